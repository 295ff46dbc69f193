//! Template management use cases

use std::path::{Path, PathBuf};

use crate::application::{ApplicationError, PublishStubsResponse};
use crate::infrastructure::TemplateExporter;

/// Default stub publishing directory, relative to the project root
pub const DEFAULT_STUB_OUTPUT: &str = "resources/stubs/repoforge";

/// Use case for publishing the stub catalog so it can be customized
pub struct PublishStubsUseCase<E: TemplateExporter> {
    exporter: E,
}

impl<E: TemplateExporter> PublishStubsUseCase<E> {
    pub fn new(exporter: E) -> Self {
        Self { exporter }
    }

    /// Export every stub under `root`, into `output` or the default directory
    pub fn execute(
        &self,
        root: &Path,
        output: Option<&Path>,
    ) -> Result<PublishStubsResponse, ApplicationError> {
        let output_dir: PathBuf = root.join(output.unwrap_or(Path::new(DEFAULT_STUB_OUTPUT)));
        let exported = self.exporter.export_all(&output_dir).map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to export stubs to {}: {}",
                output_dir.display(),
                e
            ))
        })?;

        Ok(PublishStubsResponse {
            output_dir,
            exported,
        })
    }
}
