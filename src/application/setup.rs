//! Use case for installing the shared repository pattern files

use std::path::PathBuf;
use tracing::{info, warn};

use crate::application::{ApplicationError, SetupReport};
use crate::core::ProjectLayout;
use crate::generation::{ArtifactWriter, EmitOutcome};
use crate::infrastructure::templates::{Stub, TemplateStore};

/// Files `generate` refuses to run without
pub fn required_setup_files(layout: &ProjectLayout) -> Vec<PathBuf> {
    vec![layout.repository_interface(), layout.base_repository()]
}

/// Required setup files that do not exist yet
pub fn missing_setup_files(layout: &ProjectLayout) -> Vec<PathBuf> {
    required_setup_files(layout)
        .into_iter()
        .filter(|path| !path.exists())
        .collect()
}

/// Creates the interface, base repository, provider and helper traits when absent
pub struct SetupUseCase {
    layout: ProjectLayout,
    templates: Box<dyn TemplateStore>,
    writer: Box<dyn ArtifactWriter>,
}

impl SetupUseCase {
    pub fn new(
        layout: ProjectLayout,
        templates: Box<dyn TemplateStore>,
        writer: Box<dyn ArtifactWriter>,
    ) -> Self {
        Self {
            layout,
            templates,
            writer,
        }
    }

    fn targets(&self) -> Vec<(Stub, PathBuf)> {
        vec![
            (Stub::RepositoryInterface, self.layout.repository_interface()),
            (Stub::BaseRepository, self.layout.base_repository()),
            (
                Stub::RepositoriesServiceProvider,
                self.layout.service_provider(),
            ),
            (Stub::ApiResponse, self.layout.api_response_helper()),
            (Stub::HandleError, self.layout.handle_error_helper()),
        ]
    }

    pub fn execute(&self) -> Result<SetupReport, ApplicationError> {
        let mut report = SetupReport::default();

        for (stub, path) in self.targets() {
            let relative = self.layout.display_relative(&path);
            let content = self.templates.resolve(stub)?;

            match self.writer.emit(&path, &content)? {
                EmitOutcome::Written => {
                    info!(stub = %stub, path = %relative, "Created file");
                    report.created.push(path);
                }
                EmitOutcome::AlreadyExists => {
                    warn!(path = %relative, "File already exists, left untouched");
                    report.existing.push(path);
                }
            }
        }

        Ok(report)
    }
}
