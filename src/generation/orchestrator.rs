//! Generation orchestration - coordinates the generation workflow

use chrono::NaiveDateTime;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use crate::core::ProjectLayout;
use crate::generation::{
    Admission, ArtifactKind, ArtifactSpec, ArtifactWriter, BindingRegistrar, BindingReport,
    EmitOutcome, EntityName, ExistenceGuard, InjectionOutcome, ModeSet, PlaceholderMap,
    RouteRegistrar, SkipReason, placeholders, planner,
};
use crate::infrastructure::templates::TemplateStore;

/// What happened to one planned artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    Produced,
    Skipped(SkipReason),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// Aggregate outcome of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NothingProduced,
    FullSuccess,
    PartialSuccess,
    /// At least one artifact could not be rendered or written
    CompletedWithErrors,
}

impl Outcome {
    pub fn message(&self, entity: &str) -> String {
        match self {
            Outcome::NothingProduced => format!(
                "No new files were created for {entity} as all files and migration already exist."
            ),
            Outcome::FullSuccess => {
                format!("All repository pattern files for {entity} have been successfully generated!")
            }
            Outcome::PartialSuccess => format!(
                "Repository pattern files for {entity} created successfully (some files already existed and were skipped)."
            ),
            Outcome::CompletedWithErrors => format!(
                "Repository pattern files for {entity} were generated with errors (some files could not be rendered or written)."
            ),
        }
    }
}

/// Everything a generation request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub entity: String,
    pub records: Vec<ArtifactRecord>,
    pub binding: Option<BindingReport>,
    pub route: Option<InjectionOutcome>,
}

impl GenerationReport {
    pub fn any_produced(&self) -> bool {
        self.records
            .iter()
            .any(|r| r.status == ArtifactStatus::Produced)
    }

    /// Every required artifact was produced; the migration never counts against this
    pub fn all_required_produced(&self) -> bool {
        self.records
            .iter()
            .filter(|r| !r.kind.is_migration())
            .all(|r| r.status == ArtifactStatus::Produced)
    }

    pub fn any_failed(&self) -> bool {
        self.records
            .iter()
            .any(|r| matches!(r.status, ArtifactStatus::Failed(_)))
    }

    /// Failures take precedence over every other outcome
    pub fn outcome(&self) -> Outcome {
        if self.any_failed() {
            Outcome::CompletedWithErrors
        } else if !self.any_produced() {
            Outcome::NothingProduced
        } else if self.all_required_produced() {
            Outcome::FullSuccess
        } else {
            Outcome::PartialSuccess
        }
    }

    pub fn produced(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.records
            .iter()
            .filter(|r| r.status == ArtifactStatus::Produced)
    }

    pub fn record(&self, kind: ArtifactKind) -> Option<&ArtifactRecord> {
        self.records.iter().find(|r| r.kind == kind)
    }
}

/// Orchestrates the code generation workflow
pub struct GenerationOrchestrator {
    layout: ProjectLayout,
    templates: Box<dyn TemplateStore>,
    guard: ExistenceGuard,
    writer: Box<dyn ArtifactWriter>,
    bindings: Box<dyn BindingRegistrar>,
    routes: Box<dyn RouteRegistrar>,
}

impl GenerationOrchestrator {
    /// Create a new generation orchestrator
    pub fn new(
        layout: ProjectLayout,
        templates: Box<dyn TemplateStore>,
        guard: ExistenceGuard,
        writer: Box<dyn ArtifactWriter>,
        bindings: Box<dyn BindingRegistrar>,
        routes: Box<dyn RouteRegistrar>,
    ) -> Self {
        Self {
            layout,
            templates,
            guard,
            writer,
            bindings,
            routes,
        }
    }

    /// Execute the generation workflow
    pub fn generate(
        &self,
        entity: &EntityName,
        modes: &ModeSet,
        timestamp: NaiveDateTime,
    ) -> GenerationReport {
        // 1. Plan artifacts
        let plan = planner::plan(entity, modes, &self.layout, timestamp);
        debug!(
            entity = %entity,
            artifacts = plan.specs().len(),
            templates = %self.templates.describe(),
            "Planned generation"
        );

        // 2. Shared placeholder values
        let placeholders = PlaceholderMap::for_entity(entity);

        // 3. Guard, render and emit each artifact
        let records: Vec<ArtifactRecord> = plan
            .specs()
            .iter()
            .map(|spec| ArtifactRecord {
                kind: spec.kind(),
                path: spec.path().to_path_buf(),
                status: self.generate_artifact(spec, entity, &placeholders),
            })
            .collect();

        // 4. Wire up the new repository
        let repository_produced = records
            .iter()
            .any(|r| r.kind.is_repository_bearing() && r.status == ArtifactStatus::Produced);

        let binding = repository_produced.then(|| self.bindings.inject(entity));
        let route = (repository_produced && plan.injects_route())
            .then(|| self.routes.add_route(entity));

        GenerationReport {
            entity: entity.pascal().to_string(),
            records,
            binding,
            route,
        }
    }

    fn generate_artifact(
        &self,
        spec: &ArtifactSpec,
        entity: &EntityName,
        placeholders: &PlaceholderMap,
    ) -> ArtifactStatus {
        let relative = self.layout.display_relative(spec.path());

        if let Admission::Skip(reason) = self.guard.admit(spec, entity) {
            warn!(kind = %spec.kind(), "{reason}");
            return ArtifactStatus::Skipped(reason);
        }

        let raw = match self.templates.resolve(spec.stub()) {
            Ok(raw) => raw,
            Err(e) => {
                error!(kind = %spec.kind(), error = %e, "Stub unavailable");
                return ArtifactStatus::Failed(e.to_string());
            }
        };

        let content = match placeholders::substitute(&raw, placeholders) {
            Ok(content) => content,
            Err(e) => {
                error!(kind = %spec.kind(), stub = %spec.stub(), error = %e, "Stub rendering failed");
                return ArtifactStatus::Failed(format!("{} in {}", e, spec.stub()));
            }
        };

        match self.writer.emit(spec.path(), &content) {
            Ok(EmitOutcome::Written) => {
                info!(kind = %spec.kind(), path = %relative, "Generated file");
                ArtifactStatus::Produced
            }
            Ok(EmitOutcome::AlreadyExists) => {
                let reason = SkipReason::FileExists(spec.path().to_path_buf());
                warn!(kind = %spec.kind(), "{reason}");
                ArtifactStatus::Skipped(reason)
            }
            Err(e) => {
                error!(kind = %spec.kind(), path = %relative, error = %e, "Write failed");
                ArtifactStatus::Failed(e.to_string())
            }
        }
    }
}
