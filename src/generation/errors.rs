//! Error types for the generation domain

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("Unreplaced placeholders found: {}", tokens.join(", "))]
    UnresolvedPlaceholder { tokens: Vec<String> },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema catalog error: {0}")]
    CatalogError(String),
}
