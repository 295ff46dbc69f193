//! Data Transfer Objects for application layer

use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::{EntityName, ModeSet};

/// Request to generate the artifacts of one entity
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub name: String,
    pub modes: ModeSet,
    /// Directory whose stubs take precedence over the embedded ones
    pub stub_dir: Option<PathBuf>,
    /// SQLite database consulted by the migration guard
    pub database: Option<PathBuf>,
}

impl GenerateRequest {
    /// Check the mode selection, then the entity name
    pub fn validate(&self) -> Result<EntityName, ValidationError> {
        if self.modes.is_empty() {
            return Err(ValidationError::NoModeSelected);
        }

        EntityName::parse(&self.name).map_err(|e| ValidationError::InvalidEntityName(e.to_string()))
    }
}

/// Files handled by `setup`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

/// Response from stub publishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishStubsResponse {
    pub output_dir: PathBuf,
    pub exported: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationMode;

    fn request(name: &str, modes: &[GenerationMode]) -> GenerateRequest {
        GenerateRequest {
            name: name.to_string(),
            modes: modes.iter().copied().collect(),
            stub_dir: None,
            database: None,
        }
    }

    #[test]
    fn test_validate_requires_a_mode() {
        let result = request("Product", &[]).validate();
        assert!(matches!(result, Err(ValidationError::NoModeSelected)));
    }

    #[test]
    fn test_mode_is_checked_before_name() {
        let result = request("", &[]).validate();
        assert!(matches!(result, Err(ValidationError::NoModeSelected)));
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let result = request("9Lives", &[GenerationMode::Model]).validate();
        assert!(matches!(result, Err(ValidationError::InvalidEntityName(_))));
    }

    #[test]
    fn test_validate_returns_entity() {
        let entity = request("product", &[GenerationMode::All]).validate().unwrap();
        assert_eq!(entity.pascal(), "Product");
    }

    #[test]
    fn test_no_mode_message_carries_usage() {
        let message = ValidationError::NoModeSelected.to_string();
        assert!(message.starts_with("No options specified for generate command."));
        assert!(message.contains("--controller"));
        assert!(message.ends_with("Example: repoforge generate Product --all"));
    }
}
