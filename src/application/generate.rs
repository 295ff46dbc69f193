//! Use case for generating the repository pattern artifacts of an entity

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::application::{ApplicationError, GenerateRequest, missing_setup_files};
use crate::core::ProjectLayout;
use crate::generation::{
    ExistenceGuard, GenerationOrchestrator, GenerationReport, SchemaCatalog,
};
use crate::infrastructure::{
    BindingInjector, FileSystemWriter, LayeredTemplateStore, NullSchemaCatalog, RouteInjector,
    SqliteSchemaCatalog,
};

/// Use case for generating entity artifacts
pub struct GenerateUseCase {
    layout: ProjectLayout,
}

impl GenerateUseCase {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn execute(&self, request: GenerateRequest) -> Result<GenerationReport, ApplicationError> {
        self.execute_at(request, Local::now().naive_local())
    }

    /// Generate with a fixed migration timestamp
    pub fn execute_at(
        &self,
        request: GenerateRequest,
        timestamp: NaiveDateTime,
    ) -> Result<GenerationReport, ApplicationError> {
        // 1. Shared files must be installed first
        let missing = missing_setup_files(&self.layout);
        if !missing.is_empty() {
            for path in &missing {
                warn!(path = %self.layout.display_relative(path), "Missing setup file");
            }
            return Err(ApplicationError::SetupRequired { missing });
        }

        // 2. Validate request
        let entity = request.validate()?;

        // 3. Wire the ports and generate
        let orchestrator = self.orchestrator(&request);
        Ok(orchestrator.generate(&entity, &request.modes, timestamp))
    }

    fn orchestrator(&self, request: &GenerateRequest) -> GenerationOrchestrator {
        let templates = || Box::new(LayeredTemplateStore::new(request.stub_dir.clone()));

        GenerationOrchestrator::new(
            self.layout.clone(),
            templates(),
            ExistenceGuard::new(self.layout.migrations_dir(), self.schema_catalog(request)),
            Box::new(FileSystemWriter::new()),
            Box::new(BindingInjector::new(self.layout.clone(), templates())),
            Box::new(RouteInjector::new(self.layout.clone())),
        )
    }

    fn schema_catalog(&self, request: &GenerateRequest) -> Box<dyn SchemaCatalog> {
        let Some(database) = &request.database else {
            debug!("No database configured, migration guard uses files only");
            return Box::new(NullSchemaCatalog);
        };

        match SqliteSchemaCatalog::open(database) {
            Ok(catalog) => Box::new(catalog),
            Err(e) => {
                warn!(error = %e, "Schema catalog unavailable, relying on migration files only");
                Box::new(NullSchemaCatalog)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{SetupUseCase, ValidationError};
    use crate::generation::{ArtifactKind, ArtifactStatus, GenerationMode, Outcome};
    use crate::infrastructure::EmbeddedTemplateStore;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn project() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        SetupUseCase::new(
            ProjectLayout::with_defaults(temp_dir.path()),
            Box::new(EmbeddedTemplateStore::new()),
            Box::new(FileSystemWriter::new()),
        )
        .execute()
        .unwrap();
        let providers = temp_dir.path().join("bootstrap/providers.php");
        fs::create_dir_all(providers.parent().unwrap()).unwrap();
        fs::write(providers, "<?php\n\nreturn [\n];\n").unwrap();
        temp_dir
    }

    fn request(name: &str, modes: &[GenerationMode]) -> GenerateRequest {
        GenerateRequest {
            name: name.to_string(),
            modes: modes.iter().copied().collect(),
            stub_dir: None,
            database: None,
        }
    }

    fn use_case(root: &Path) -> GenerateUseCase {
        GenerateUseCase::new(ProjectLayout::with_defaults(root))
    }

    #[test]
    fn test_setup_is_checked_before_modes() {
        let temp_dir = TempDir::new().unwrap();
        let result = use_case(temp_dir.path()).execute_at(request("Product", &[]), timestamp());
        assert!(matches!(result, Err(ApplicationError::SetupRequired { .. })));
        assert!(!temp_dir.path().join("app").exists());
    }

    #[test]
    fn test_no_mode_is_rejected() {
        let project = project();
        let result = use_case(project.path()).execute_at(request("Product", &[]), timestamp());
        assert!(matches!(
            result,
            Err(ApplicationError::ValidationError(ValidationError::NoModeSelected))
        ));
        assert!(!project.path().join("app/Models").exists());
    }

    #[test]
    fn test_generate_all() {
        let project = project();
        let report = use_case(project.path())
            .execute_at(request("Product", &[GenerationMode::All]), timestamp())
            .unwrap();

        assert_eq!(report.outcome(), Outcome::FullSuccess);
        assert!(project
            .path()
            .join("database/migrations/2024_05_01_093000_create_products_table.php")
            .is_file());
        let controller = fs::read_to_string(
            project
                .path()
                .join("app/Http/Controllers/ProductController.php"),
        )
        .unwrap();
        assert!(controller.contains("class ProductController"));
        let routes = fs::read_to_string(project.path().join("routes/api.php")).unwrap();
        assert!(routes.contains("Route::resource('products', ProductController::class);"));
    }

    #[test]
    fn test_unreachable_database_falls_back_to_files() {
        let project = project();
        let mut request = request("Widget", &[GenerationMode::Migration]);
        request.database = Some(project.path().join("missing.sqlite"));

        let report = use_case(project.path())
            .execute_at(request, timestamp())
            .unwrap();

        assert_eq!(
            report.record(ArtifactKind::Migration).unwrap().status,
            ArtifactStatus::Produced
        );
    }
}
