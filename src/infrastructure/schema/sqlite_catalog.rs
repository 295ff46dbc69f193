//! SQLite-backed schema catalog

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::generation::{GenerationError, SchemaCatalog};

/// Answers table-existence queries from a SQLite database's `sqlite_master`
pub struct SqliteSchemaCatalog {
    path: PathBuf,
    conn: Connection,
}

impl SqliteSchemaCatalog {
    /// Open `path` read-only; the database is never created or modified
    pub fn open(path: &Path) -> Result<Self, GenerationError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| catalog_error(path, e))?;

        debug!(database = %path.display(), "Opened schema catalog");
        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaCatalog for SqliteSchemaCatalog {
    fn has_table(&self, table: &str) -> Result<bool, GenerationError> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .map_err(|e| catalog_error(&self.path, e))?;

        stmt.exists(rusqlite::params![table])
            .map_err(|e| catalog_error(&self.path, e))
    }
}

/// Catalog used when no database is configured: every table is absent
pub struct NullSchemaCatalog;

impl SchemaCatalog for NullSchemaCatalog {
    fn has_table(&self, _table: &str) -> Result<bool, GenerationError> {
        Ok(false)
    }
}

fn catalog_error(path: &Path, e: rusqlite::Error) -> GenerationError {
    GenerationError::CatalogError(format!("{}: {}", path.display(), e))
}
