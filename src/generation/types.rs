//! Core types for the generation domain

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::utils::{pluralize, to_snake_case, to_studly_case};
use crate::generation::{GenerationError, rules};
use crate::infrastructure::templates::Stub;

/// A validated entity name together with every form derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName {
    pascal: String,
    table: String,
    lower: String,
}

impl EntityName {
    /// Validate `raw` and derive the class, table and lower-case forms
    pub fn parse(raw: &str) -> Result<Self, GenerationError> {
        rules::validate_entity_name(raw)?;
        let pascal = to_studly_case(raw);
        let table = to_snake_case(&pluralize(&pascal));
        Ok(Self {
            lower: raw.to_lowercase(),
            pascal,
            table,
        })
    }

    /// Class-style name, e.g. `Product`
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// Plural snake-case table name, e.g. `products`
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Lower-cased original input
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Table name in StudlyCase, e.g. `TestEntities`
    pub fn table_studly(&self) -> String {
        to_studly_case(&self.table)
    }

    /// Resource route segment, honoring reserved-name exceptions
    pub fn route_segment(&self) -> String {
        rules::route_segment(&self.pascal, &self.table)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pascal)
    }
}

/// A generation mode selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GenerationMode {
    All,
    Model,
    Repository,
    Service,
    Controller,
    Migration,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::All => "all",
            GenerationMode::Model => "model",
            GenerationMode::Repository => "repository",
            GenerationMode::Service => "service",
            GenerationMode::Controller => "controller",
            GenerationMode::Migration => "migration",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of modes selected for one request; composing flags is a union
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeSet(BTreeSet<GenerationMode>);

impl ModeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mode: GenerationMode) {
        self.0.insert(mode);
    }

    pub fn contains(&self, mode: GenerationMode) -> bool {
        self.0.contains(&mode)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_all(&self) -> bool {
        self.contains(GenerationMode::All)
    }

    pub fn iter(&self) -> impl Iterator<Item = GenerationMode> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<GenerationMode> for ModeSet {
    fn from_iter<I: IntoIterator<Item = GenerationMode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Kind of file produced by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Model,
    Repository,
    Controller,
    Service,
    StoreRequest,
    UpdateRequest,
    Resource,
    Collection,
    Migration,
}

impl ArtifactKind {
    /// Template used to render this artifact
    pub fn stub(&self) -> Stub {
        match self {
            ArtifactKind::Model => Stub::Model,
            ArtifactKind::Repository => Stub::Repository,
            ArtifactKind::Controller => Stub::Controller,
            ArtifactKind::Service => Stub::Service,
            ArtifactKind::StoreRequest => Stub::StoreFormRequest,
            ArtifactKind::UpdateRequest => Stub::UpdateFormRequest,
            ArtifactKind::Resource => Stub::Resource,
            ArtifactKind::Collection => Stub::Collection,
            ArtifactKind::Migration => Stub::Migration,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "model",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Controller => "controller",
            ArtifactKind::Service => "service",
            ArtifactKind::StoreRequest => "store-form-request",
            ArtifactKind::UpdateRequest => "update-form-request",
            ArtifactKind::Resource => "resource",
            ArtifactKind::Collection => "collection",
            ArtifactKind::Migration => "migration",
        }
    }

    /// Artifacts whose creation requires the provider binding
    pub fn is_repository_bearing(&self) -> bool {
        matches!(
            self,
            ArtifactKind::Repository | ArtifactKind::Service | ArtifactKind::Controller
        )
    }

    pub fn is_migration(&self) -> bool {
        matches!(self, ArtifactKind::Migration)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One planned artifact: what to render and where to put it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    kind: ArtifactKind,
    path: PathBuf,
}

impl ArtifactSpec {
    pub fn new(kind: ArtifactKind, path: PathBuf) -> Self {
        Self { kind, path }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn stub(&self) -> Stub {
        self.kind.stub()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_migration(&self) -> bool {
        self.kind.is_migration()
    }
}

/// Placeholder tokens and their replacement values for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap(BTreeMap<String, String>);

impl PlaceholderMap {
    pub const MODEL_NAME: &'static str = "{{ModelName}}";
    pub const LOWER_NAME: &'static str = "{{modelName}}";
    pub const TABLE_NAME: &'static str = "{{tableName}}";
    pub const TABLE_NAME_STUDLY: &'static str = "{{tableName|studly}}";

    pub fn new() -> Self {
        Self::default()
    }

    /// The four placeholder families derived from an entity name
    pub fn for_entity(entity: &EntityName) -> Self {
        let mut map = Self::new();
        map.insert(Self::MODEL_NAME, entity.pascal());
        map.insert(Self::LOWER_NAME, entity.lower());
        map.insert(Self::TABLE_NAME, entity.table());
        map.insert(Self::TABLE_NAME_STUDLY, &entity.table_studly());
        map
    }

    pub fn insert(&mut self, token: &str, value: &str) {
        self.0.insert(token.to_string(), value.to_string());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of writing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    Written,
    AlreadyExists,
}

/// Result of patching a shared project file (provider, provider list, routes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectionOutcome {
    /// The file did not exist and was created
    Created { path: PathBuf },
    /// The file was modified
    Updated { path: PathBuf },
    /// The entry was already present; nothing written
    Unchanged { path: PathBuf },
    /// The entry was already present but the file was rewritten in normalized form
    Reformatted { path: PathBuf },
    /// The file could not be patched; the operator must apply the lines by hand
    Manual {
        path: PathBuf,
        reason: String,
        instructions: Vec<String>,
    },
}

impl InjectionOutcome {
    pub fn path(&self) -> &Path {
        match self {
            InjectionOutcome::Created { path }
            | InjectionOutcome::Updated { path }
            | InjectionOutcome::Unchanged { path }
            | InjectionOutcome::Reformatted { path }
            | InjectionOutcome::Manual { path, .. } => path,
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, InjectionOutcome::Manual { .. })
    }
}

/// Outcome of the binding injection: the provider itself and its registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingReport {
    pub provider: InjectionOutcome,
    pub registration: InjectionOutcome,
}
