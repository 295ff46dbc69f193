//! Placeholder substitution for stub text
//!
//! Tokens are double-brace delimited (`{{ModelName}}`, `{{tableName|studly}}`). Every
//! token is replaced in a single left-to-right pass, so a replacement value is never
//! rescanned and the iteration order of the map cannot change the result.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::generation::{GenerationError, PlaceholderMap};

/// Double braces around any non-brace text
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{[^{}]*\}\}").expect("placeholder pattern is valid"));

/// Substitute every known token in `raw`, then fail if any token is left over
pub fn substitute(raw: &str, placeholders: &PlaceholderMap) -> Result<String, GenerationError> {
    let rendered = TOKEN_RE.replace_all(raw, |caps: &Captures| {
        let token = &caps[0];
        placeholders.get(token).unwrap_or(token).to_string()
    });

    let leftover = unresolved_tokens(&rendered);
    if !leftover.is_empty() {
        return Err(GenerationError::UnresolvedPlaceholder { tokens: leftover });
    }

    Ok(rendered.into_owned())
}

/// Every distinct placeholder-shaped token in `text`, in order of first appearance
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for found in TOKEN_RE.find_iter(text) {
        if !tokens.iter().any(|t| t == found.as_str()) {
            tokens.push(found.as_str().to_string());
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::EntityName;

    fn product_map() -> PlaceholderMap {
        PlaceholderMap::for_entity(&EntityName::parse("Product").unwrap())
    }

    #[test]
    fn test_substitutes_all_four_families() {
        let raw = "class {{ModelName}} { $t = '{{tableName}}'; ${{modelName}}; Create{{tableName|studly}}Table }";
        let rendered = substitute(raw, &product_map()).unwrap();
        assert_eq!(
            rendered,
            "class Product { $t = 'products'; $product; CreateProductsTable }"
        );
    }

    #[test]
    fn test_reports_every_unresolved_token_once() {
        let raw = "{{ModelName}} {{author}} {{ version }} {{author}}";
        let err = substitute(raw, &product_map()).unwrap_err();
        match err {
            GenerationError::UnresolvedPlaceholder { tokens } => {
                assert_eq!(tokens, vec!["{{author}}", "{{ version }}"]);
            }
            other => panic!("Expected UnresolvedPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn test_replacement_values_are_not_rescanned() {
        let mut map = PlaceholderMap::new();
        map.insert("{{a}}", "{{b}}");
        map.insert("{{b}}", "x");
        let err = substitute("{{a}}", &map).unwrap_err();
        assert!(matches!(err, GenerationError::UnresolvedPlaceholder { .. }));

        let rendered = substitute("{{b}}{{a}}", &{
            let mut m = PlaceholderMap::new();
            m.insert("{{a}}", "1");
            m.insert("{{b}}", "2");
            m
        })
        .unwrap();
        assert_eq!(rendered, "21");
    }

    #[test]
    fn test_text_without_tokens_is_unchanged() {
        let raw = "<?php\n\nfunction () { return ['a' => 1]; }\n";
        assert_eq!(substitute(raw, &PlaceholderMap::new()).unwrap(), raw);
    }

    #[test]
    fn test_embedded_stubs_fully_resolve() {
        use crate::infrastructure::templates::{EmbeddedTemplateStore, Stub, TemplateStore};

        let store = EmbeddedTemplateStore::new();
        let map = PlaceholderMap::for_entity(&EntityName::parse("OrderItem").unwrap());
        for stub in Stub::all() {
            let rendered = substitute(&store.resolve(*stub).unwrap(), &map).unwrap();
            assert!(unresolved_tokens(&rendered).is_empty(), "{stub} left tokens");
        }
    }
}
