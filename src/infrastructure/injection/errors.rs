//! Error types for shared-file injection

use std::path::PathBuf;
use thiserror::Error;

use crate::infrastructure::templates::TemplateError;

/// Why a shared project file could not be patched automatically
#[derive(Error, Debug)]
pub enum InjectionError {
    #[error("{path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No register() method found in {path}")]
    RegisterHookNotFound { path: PathBuf },

    #[error("No `return [` provider array found in {path}")]
    ProviderListNotFound { path: PathBuf },

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl InjectionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
