//! Error types for the template infrastructure layer

use thiserror::Error;

/// Errors that can occur in template operations
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template in the catalog matches the stub name
    #[error("Stub file not found: {0}")]
    StubNotFound(String),

    /// Template content is not valid UTF-8
    #[error("Stub {0} is not valid UTF-8")]
    InvalidEncoding(String),

    /// IO error during template operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TemplateError {
    /// Create a new stub not found error
    pub fn not_found<S: Into<String>>(stub: S) -> Self {
        Self::StubNotFound(stub.into())
    }
}
