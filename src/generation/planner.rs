//! Artifact planning: which files a request produces and where they go

use chrono::NaiveDateTime;
use std::path::PathBuf;

use crate::core::ProjectLayout;
use crate::generation::{ArtifactKind, ArtifactSpec, EntityName, GenerationMode, ModeSet};

/// Sortable second-granularity prefix of migration file names
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Artifacts of `all`, in generation order
const ALL_KINDS: &[ArtifactKind] = &[
    ArtifactKind::Model,
    ArtifactKind::Repository,
    ArtifactKind::Controller,
    ArtifactKind::Service,
    ArtifactKind::StoreRequest,
    ArtifactKind::UpdateRequest,
    ArtifactKind::Resource,
    ArtifactKind::Collection,
    ArtifactKind::Migration,
];

/// The ordered, duplicate-free artifacts of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPlan {
    specs: Vec<ArtifactSpec>,
    injects_route: bool,
}

impl ArtifactPlan {
    pub fn specs(&self) -> &[ArtifactSpec] {
        &self.specs
    }

    pub fn kinds(&self) -> Vec<ArtifactKind> {
        self.specs.iter().map(ArtifactSpec::kind).collect()
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.specs.iter().any(|spec| spec.kind() == kind)
    }

    /// Whether the request asks for a resource route
    pub fn injects_route(&self) -> bool {
        self.injects_route
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Plans the artifacts for `modes`. `timestamp` names the migration file.
pub fn plan(
    entity: &EntityName,
    modes: &ModeSet,
    layout: &ProjectLayout,
    timestamp: NaiveDateTime,
) -> ArtifactPlan {
    let kinds = if modes.is_all() {
        ALL_KINDS.to_vec()
    } else {
        selected_kinds(modes)
    };

    let specs = kinds
        .into_iter()
        .map(|kind| ArtifactSpec::new(kind, target_path(kind, entity, layout, timestamp)))
        .collect();

    ArtifactPlan {
        specs,
        injects_route: modes.is_all() || modes.contains(GenerationMode::Controller),
    }
}

fn selected_kinds(modes: &ModeSet) -> Vec<ArtifactKind> {
    let mut kinds = Vec::new();
    let mut push = |kind: ArtifactKind| {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    };

    if modes.contains(GenerationMode::Model) {
        push(ArtifactKind::Model);
    }
    if modes.contains(GenerationMode::Repository) {
        push(ArtifactKind::Repository);
    }
    if modes.contains(GenerationMode::Service) || modes.contains(GenerationMode::Controller) {
        push(ArtifactKind::Repository);
        push(ArtifactKind::Service);
    }
    if modes.contains(GenerationMode::Controller) {
        push(ArtifactKind::Resource);
        push(ArtifactKind::Collection);
        push(ArtifactKind::Controller);
    }
    if modes.contains(GenerationMode::Migration) {
        push(ArtifactKind::Migration);
    }

    kinds
}

/// Convention-based location of an artifact
pub fn target_path(
    kind: ArtifactKind,
    entity: &EntityName,
    layout: &ProjectLayout,
    timestamp: NaiveDateTime,
) -> PathBuf {
    let name = entity.pascal();
    match kind {
        ArtifactKind::Model => layout.app_path(format!("Models/{name}.php")),
        ArtifactKind::Repository => layout.app_path(format!("Repositories/{name}Repository.php")),
        ArtifactKind::Controller => {
            layout.app_path(format!("Http/Controllers/{name}Controller.php"))
        }
        ArtifactKind::Service => layout.app_path(format!("Services/{name}Service.php")),
        ArtifactKind::StoreRequest => {
            layout.app_path(format!("Http/Requests/{name}StoreFormRequest.php"))
        }
        ArtifactKind::UpdateRequest => {
            layout.app_path(format!("Http/Requests/{name}UpdateFormRequest.php"))
        }
        ArtifactKind::Resource => layout.app_path(format!("Http/Resources/{name}Resource.php")),
        ArtifactKind::Collection => {
            layout.app_path(format!("Http/Resources/{name}Collection.php"))
        }
        ArtifactKind::Migration => layout
            .migrations_dir()
            .join(migration_file_name(entity.table(), timestamp)),
    }
}

/// `2024_05_01_093000_create_products_table.php`
pub fn migration_file_name(table: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_create_{table}_table.php",
        timestamp.format(MIGRATION_TIMESTAMP_FORMAT)
    )
}
