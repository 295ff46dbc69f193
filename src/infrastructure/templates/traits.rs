//! Template store traits for the infrastructure layer

use crate::infrastructure::templates::{Stub, TemplateError};
use std::io;
use std::path::Path;

/// Resolves a symbolic stub name to its raw template text
pub trait TemplateStore {
    /// Raw text of the stub, or `StubNotFound`
    fn resolve(&self, stub: Stub) -> Result<String, TemplateError>;

    /// Human-readable origin of the store, used in logs
    fn describe(&self) -> String;
}

/// Trait for exporting the stub catalog to the filesystem
pub trait TemplateExporter {
    /// Write every stub into `output_dir`, skipping files that already exist.
    /// Returns the number of files written.
    fn export_all(&self, output_dir: &Path) -> io::Result<usize>;
}
