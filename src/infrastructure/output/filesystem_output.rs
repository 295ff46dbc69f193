//! Filesystem-based artifact writer

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::generation::{ArtifactWriter, EmitOutcome, GenerationError};

/// Permission bits of directories created for generated files
#[cfg(unix)]
const DIRECTORY_MODE: u32 = 0o755;

/// Writes artifacts to the filesystem, never replacing an existing file
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Create `path` and any missing ancestors
    pub fn ensure_directory(&self, path: &Path) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIRECTORY_MODE);
        }
        builder.create(path)
    }
}

impl ArtifactWriter for FileSystemWriter {
    fn emit(&self, path: &Path, content: &str) -> Result<EmitOutcome, GenerationError> {
        let write_error = |source: io::Error| GenerationError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            self.ensure_directory(parent).map_err(write_error)?;
        }

        // create_new refuses to open a file that appeared since the guard ran
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Refusing to overwrite");
                return Ok(EmitOutcome::AlreadyExists);
            }
            Err(e) => return Err(write_error(e)),
        };

        file.write_all(content.as_bytes()).map_err(write_error)?;
        file.flush().map_err(write_error)?;

        Ok(EmitOutcome::Written)
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}
