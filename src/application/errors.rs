//! Application layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Required files are missing. Please run \"repoforge setup\" first.")]
    SetupRequired { missing: Vec<PathBuf> },

    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("{0}")]
    ValidationError(#[from] ValidationError),

    #[error("Template error: {0}")]
    TemplateError(#[from] crate::infrastructure::templates::TemplateError),

    #[error("Output error: {0}")]
    OutputError(String),
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error(
        "No options specified for generate command.\n\
         Available options:\n  \
         -a, --all          Generate all files\n  \
         -m, --model        Generate the model\n  \
         -r, --repository   Generate the repository\n  \
         -s, --service      Generate the service and its repository\n  \
         -c, --controller   Generate the controller with its service, repository and resources\n  \
         -f, --migration    Generate the migration\n\
         Example: repoforge generate Product --all"
    )]
    NoModeSelected,

    #[error("{0}")]
    InvalidEntityName(String),
}
