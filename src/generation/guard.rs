//! Existence guard: the check that keeps generation non-destructive
//!
//! Regular artifacts are keyed by their target path. Migrations are keyed by the table
//! they create, since the timestamp prefix of a migration file differs on every run.

use glob::Pattern;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::generation::{ArtifactSpec, EntityName, SchemaCatalog};

/// Guard verdict for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Proceed,
    Skip(SkipReason),
}

/// Why an artifact was not generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A file already exists at the target path
    FileExists(PathBuf),
    /// A migration creating the table already exists
    MigrationExists { table: String, file: PathBuf },
    /// The table is already present in the database
    TableExists { table: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FileExists(path) => {
                write!(f, "File {} already exists and was not overwritten.", path.display())
            }
            SkipReason::MigrationExists { table, file } => write!(
                f,
                "Migration for {table} table already satisfied: migration file {} exists.",
                file.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default()
            ),
            SkipReason::TableExists { table } => write!(
                f,
                "Migration for {table} table already satisfied: table exists in the database."
            ),
        }
    }
}

/// Decides, per artifact, whether generation may proceed
pub struct ExistenceGuard {
    migrations_dir: PathBuf,
    catalog: Box<dyn SchemaCatalog>,
}

impl ExistenceGuard {
    pub fn new(migrations_dir: impl Into<PathBuf>, catalog: Box<dyn SchemaCatalog>) -> Self {
        Self {
            migrations_dir: migrations_dir.into(),
            catalog,
        }
    }

    pub fn admit(&self, spec: &ArtifactSpec, entity: &EntityName) -> Admission {
        if spec.is_migration() {
            return self.admit_migration(entity.table());
        }

        if spec.path().exists() {
            debug!(path = %spec.path().display(), "Target exists");
            return Admission::Skip(SkipReason::FileExists(spec.path().to_path_buf()));
        }
        Admission::Proceed
    }

    fn admit_migration(&self, table: &str) -> Admission {
        if let Some(file) = self.find_migration_file(table) {
            return Admission::Skip(SkipReason::MigrationExists {
                table: table.to_string(),
                file,
            });
        }

        match self.catalog.has_table(table) {
            Ok(true) => Admission::Skip(SkipReason::TableExists {
                table: table.to_string(),
            }),
            Ok(false) => Admission::Proceed,
            Err(e) => {
                warn!(table, error = %e, "Schema catalog unavailable, relying on migration files only");
                Admission::Proceed
            }
        }
    }

    /// First file matching `*_create_<table>_table.*`, whatever its timestamp
    pub fn find_migration_file(&self, table: &str) -> Option<PathBuf> {
        let pattern = migration_pattern(&self.migrations_dir, table);
        let mut matches: Vec<PathBuf> = glob::glob(&pattern)
            .map_err(|e| warn!(pattern, error = %e, "Invalid migration pattern"))
            .ok()?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        matches.sort();
        matches.into_iter().next()
    }
}

fn migration_pattern(dir: &Path, table: &str) -> String {
    format!(
        "{}/*_create_{}_table.*",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(table)
    )
}
