//! Filesystem-based stub stores
//!
//! `DirectoryTemplateStore` reads customized stubs from a directory, typically one
//! produced by `repoforge publish-stubs` and selected with `--stub-dir`.
//! `LayeredTemplateStore` consults such a directory first and falls back to the
//! embedded catalog for every stub the directory does not override.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{EmbeddedTemplateStore, Stub, TemplateError, TemplateStore};

/// Template store reading `<dir>/<stub>.stub`
pub struct DirectoryTemplateStore {
    dir: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn resolve(&self, stub: Stub) -> Result<String, TemplateError> {
        let path = self.dir.join(stub.file_name());
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(stub = %stub, path = %path.display(), "Resolved stub from directory");
                Ok(content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(TemplateError::not_found(path.display().to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                Err(TemplateError::InvalidEncoding(path.display().to_string()))
            }
            Err(e) => Err(TemplateError::IoError(e)),
        }
    }

    fn describe(&self) -> String {
        format!("stub directory {}", self.dir.display())
    }
}

/// Override directory first, embedded catalog second
pub struct LayeredTemplateStore {
    overrides: Option<DirectoryTemplateStore>,
    fallback: EmbeddedTemplateStore,
}

impl LayeredTemplateStore {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self {
            overrides: override_dir.map(DirectoryTemplateStore::new),
            fallback: EmbeddedTemplateStore::new(),
        }
    }
}

impl TemplateStore for LayeredTemplateStore {
    fn resolve(&self, stub: Stub) -> Result<String, TemplateError> {
        if let Some(overrides) = &self.overrides {
            match overrides.resolve(stub) {
                Err(TemplateError::StubNotFound(_)) => {}
                other => return other,
            }
        }
        self.fallback.resolve(stub)
    }

    fn describe(&self) -> String {
        match &self.overrides {
            Some(overrides) => format!("{} (embedded fallback)", overrides.describe()),
            None => self.fallback.describe(),
        }
    }
}
