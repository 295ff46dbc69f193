//! Idempotent patching of the provider, provider list and routes files

pub mod errors;
pub mod provider;
pub mod routes;

pub use errors::*;
pub use provider::*;
pub use routes::*;

use std::fs;
use std::path::Path;

use crate::generation::InjectionOutcome;
use crate::infrastructure::output::FileSystemWriter;

/// Write `content` to `path`, creating missing parent directories
fn write_file(path: &Path, content: &str) -> Result<(), InjectionError> {
    if let Some(parent) = path.parent() {
        FileSystemWriter::new()
            .ensure_directory(parent)
            .map_err(|e| InjectionError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| InjectionError::io(path, e))
}

fn manual(path: &Path, error: &InjectionError, instructions: Vec<String>) -> InjectionOutcome {
    InjectionOutcome::Manual {
        path: path.to_path_buf(),
        reason: error.to_string(),
        instructions,
    }
}
