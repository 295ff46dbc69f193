//! Stub catalog embedded in the binary at compile time from `templates/`

use super::{Stub, TemplateError, TemplateExporter, TemplateStore};
use rust_embed::RustEmbed;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Container for all stubs embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedStubs;

/// Template store backed by the embedded stub catalog
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }

    fn raw(stub: Stub) -> Option<std::borrow::Cow<'static, [u8]>> {
        EmbeddedStubs::get(&stub.file_name()).map(|file| file.data)
    }
}

impl Default for EmbeddedTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn resolve(&self, stub: Stub) -> Result<String, TemplateError> {
        let data = Self::raw(stub).ok_or_else(|| TemplateError::not_found(stub.file_name()))?;
        debug!(stub = %stub, "Resolved embedded stub");
        String::from_utf8(data.into_owned())
            .map_err(|_| TemplateError::InvalidEncoding(stub.file_name()))
    }

    fn describe(&self) -> String {
        "embedded stubs".to_string()
    }
}

impl TemplateExporter for EmbeddedTemplateStore {
    fn export_all(&self, output_dir: &Path) -> io::Result<usize> {
        std::fs::create_dir_all(output_dir)?;
        let mut written = 0;

        for stub in Stub::all() {
            let Some(data) = Self::raw(*stub) else {
                continue;
            };
            let target = output_dir.join(stub.file_name());
            match OpenOptions::new().write(true).create_new(true).open(&target) {
                Ok(mut file) => {
                    file.write_all(&data)?;
                    written += 1;
                    debug!(path = %target.display(), "Exported stub");
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(path = %target.display(), "Stub already exported, keeping it");
                }
                Err(e) => return Err(e),
            }
        }

        info!(count = written, dir = %output_dir.display(), "Exported stubs");
        Ok(written)
    }
}
