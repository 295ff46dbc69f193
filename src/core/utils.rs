//! String transformation utilities for PHP class and table naming
//!
//! These follow the conventions of the Laravel string helpers so that generated
//! class names and table names match what the framework itself would derive.

/// Words that have no distinct plural form.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "education",
    "equipment",
    "evidence",
    "feedback",
    "fish",
    "furniture",
    "hardware",
    "information",
    "knowledge",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
    "traffic",
];

/// Irregular singular/plural pairs, lower case.
const IRREGULAR: &[(&str, &str)] = &[
    ("cactus", "cacti"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("echo", "echoes"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("wife", "wives"),
    ("woman", "women"),
];

/// Converts a string to StudlyCase (PascalCase) for PHP class names.
///
/// Words are split on dashes, underscores and spaces. The first letter of each word is
/// upper-cased and the remaining letters are kept as typed, so acronyms survive.
///
/// # Examples
/// ```
/// use repoforge::core::utils::to_studly_case;
///
/// assert_eq!(to_studly_case("product"), "Product");
/// assert_eq!(to_studly_case("order_items"), "OrderItems");
/// assert_eq!(to_studly_case("HR"), "HR");
/// ```
pub fn to_studly_case(s: &str) -> String {
    s.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Converts a string to snake_case the way Laravel does for table names.
///
/// An underscore is inserted before every upper-case letter that follows another
/// character, so `TestEntities` becomes `test_entities` and `HRS` becomes `h_r_s`.
/// Dashes and spaces are treated as word separators.
///
/// # Examples
/// ```
/// use repoforge::core::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("TestEntities"), "test_entities");
/// assert_eq!(to_snake_case("HRS"), "h_r_s");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for ch in s.chars() {
        if ch == '-' || ch == ' ' || ch == '_' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        } else if ch.is_uppercase() {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }

    result.trim_end_matches('_').to_string()
}

/// Pluralizes an English noun, preserving the casing style of the input.
///
/// Only the last word of a StudlyCase identifier is inflected (`OrderItem` becomes
/// `OrderItems`). An all-uppercase word yields an all-uppercase plural (`HR` becomes `HRS`).
pub fn pluralize(s: &str) -> String {
    let split = last_word_start(s);
    let (prefix, last) = s.split_at(split);
    format!("{prefix}{}", pluralize_word(last))
}

/// Byte index where the last word of a StudlyCase identifier starts.
fn last_word_start(s: &str) -> usize {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut start = 0;
    for i in 1..chars.len() {
        let (idx, ch) = chars[i];
        let prev = chars[i - 1].1;
        if !ch.is_uppercase() {
            continue;
        }
        let camel_boundary = prev.is_lowercase() || prev.is_ascii_digit();
        let acronym_end = prev.is_uppercase()
            && chars
                .get(i + 1)
                .is_some_and(|(_, next)| next.is_lowercase());
        if camel_boundary || acronym_end {
            start = idx;
        }
    }
    start
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    let plural = match IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        Some((_, plural)) => plural.to_string(),
        None => regular_plural(&lower),
    };

    match_case(&plural, word)
}

fn regular_plural(lower: &str) -> String {
    if lower.ends_with("quiz") {
        return format!("{lower}zes");
    }
    if let Some(stem) = lower.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if lower.len() > 2 {
        if let Some(stem) = lower.strip_suffix("is") {
            return format!("{stem}es");
        }
    }
    if let Some(stem) = ["matrix", "vertex", "index"]
        .iter()
        .find(|suffix| lower.ends_with(*suffix))
        .map(|_| &lower[..lower.len() - 2])
    {
        return format!("{stem}ices");
    }
    // knife -> knives, but giraffe -> giraffes
    if let Some(stem) = lower.strip_suffix("fe") {
        if stem.chars().last().is_some_and(|c| c != 'f') {
            return format!("{stem}ves");
        }
    }
    if lower.ends_with("lf") || lower.ends_with("rf") {
        return format!("{}ves", &lower[..lower.len() - 1]);
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return format!("{lower}es");
    }
    format!("{lower}s")
}

/// Applies the casing style of `original` to the lower-case `plural`.
fn match_case(plural: &str, original: &str) -> String {
    let has_letters = original.chars().any(char::is_alphabetic);
    if has_letters && original.chars().all(|c| !c.is_lowercase()) {
        return plural.to_uppercase();
    }
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = plural.chars();
        return match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        };
    }
    plural.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_studly_case() {
        assert_eq!(to_studly_case("product"), "Product");
        assert_eq!(to_studly_case("TestEntity"), "TestEntity");
        assert_eq!(to_studly_case("test_entities"), "TestEntities");
        assert_eq!(to_studly_case("order-item"), "OrderItem");
        assert_eq!(to_studly_case("h_r_s"), "HRS");
        assert_eq!(to_studly_case("HR"), "HR");
        assert_eq!(to_studly_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Products"), "products");
        assert_eq!(to_snake_case("TestEntities"), "test_entities");
        assert_eq!(to_snake_case("HRS"), "h_r_s");
        assert_eq!(to_snake_case("HR"), "h_r");
        assert_eq!(to_snake_case("order-items"), "order_items");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("Item2s"), "item2s");
    }

    #[test]
    fn test_pluralize_regular_rules() {
        assert_eq!(pluralize("Product"), "Products");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("Status"), "Statuses");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Branch"), "Branches");
        assert_eq!(pluralize("Analysis"), "Analyses");
        assert_eq!(pluralize("widget"), "widgets");
    }

    #[test]
    fn test_pluralize_f_and_ix_endings() {
        assert_eq!(pluralize("Wolf"), "Wolves");
        assert_eq!(pluralize("Shelf"), "Shelves");
        assert_eq!(pluralize("Scarf"), "Scarves");
        assert_eq!(pluralize("Knife"), "Knives");
        assert_eq!(pluralize("Giraffe"), "Giraffes");
        assert_eq!(pluralize("Roof"), "Roofs");
        assert_eq!(pluralize("Chief"), "Chiefs");
        assert_eq!(pluralize("Index"), "Indices");
        assert_eq!(pluralize("Matrix"), "Matrices");
        assert_eq!(pluralize("Vertex"), "Vertices");
        assert_eq!(pluralize("SearchIndex"), "SearchIndices");
        assert_eq!(pluralize("Fax"), "Faxes");
    }

    #[test]
    fn test_pluralize_only_inflects_last_word() {
        assert_eq!(pluralize("TestEntity"), "TestEntities");
        assert_eq!(pluralize("SalesPerson"), "SalesPeople");
        assert_eq!(pluralize("HTTPRequest"), "HTTPRequests");
        assert_eq!(pluralize("Item2Box"), "Item2Boxes");
    }

    #[test]
    fn test_pluralize_irregular_and_uncountable() {
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("Child"), "Children");
        assert_eq!(pluralize("Equipment"), "Equipment");
        assert_eq!(pluralize("Series"), "Series");
    }

    #[test]
    fn test_pluralize_matches_upper_case() {
        assert_eq!(pluralize("HR"), "HRS");
        assert_eq!(pluralize("API"), "APIS");
    }
}
