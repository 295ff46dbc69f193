//! Business rules for the generation domain

use crate::generation::GenerationError;

/// Entity names whose naive route segment collides with another resource, mapped to
/// the segment used instead
const RESERVED_ROUTE_SEGMENTS: &[(&str, &str)] = &[("HR", "h_r_s")];

/// Validates an entity name before any name is derived from it
pub fn validate_entity_name(name: &str) -> Result<(), GenerationError> {
    let invalid = |reason: &str| GenerationError::InvalidEntityName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("entity name cannot be empty"));
    };

    if !first.is_ascii_alphabetic() {
        return Err(invalid("entity name must start with a letter"));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(invalid(
            "entity name must contain only letters, digits, dashes, and underscores",
        ));
    }

    Ok(())
}

/// Route segment for a resource route
pub fn route_segment(pascal: &str, table: &str) -> String {
    RESERVED_ROUTE_SEGMENTS
        .iter()
        .find(|(reserved, _)| *reserved == pascal)
        .map(|(_, segment)| segment.to_string())
        .unwrap_or_else(|| table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entity_name() {
        assert!(validate_entity_name("Product").is_ok());
        assert!(validate_entity_name("order_item").is_ok());
        assert!(validate_entity_name("order-item2").is_ok());

        assert!(validate_entity_name("").is_err());
        assert!(validate_entity_name("_Product").is_err());
        assert!(validate_entity_name("2Product").is_err());
        assert!(validate_entity_name("Prod uct").is_err());
        assert!(validate_entity_name("App\\Product").is_err());
        assert!(validate_entity_name("{{x}}").is_err());
    }

    #[test]
    fn test_route_segment() {
        assert_eq!(route_segment("Product", "products"), "products");
        assert_eq!(route_segment("HR", "h_r"), "h_r_s");
        assert_eq!(route_segment("Hr", "hrs"), "hrs");
    }
}
