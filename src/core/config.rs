//! Project configuration loaded from an optional `repoforge.toml`

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::core::layout::ProjectLayout;

/// Environment variable consulted for a stub override directory
pub const STUB_DIR_ENV: &str = "REPOFORGE_STUB_DIR";

/// Trait for reading the stub override directory, allowing dependency injection for testing
pub trait StubDirSource {
    fn stub_dir(&self) -> Option<String>;
}

/// Production implementation that reads from environment variables
pub struct EnvStubDirSource;

impl StubDirSource for EnvStubDirSource {
    fn stub_dir(&self) -> Option<String> {
        std::env::var(STUB_DIR_ENV).ok().filter(|v| !v.is_empty())
    }
}

/// Mock implementation for testing with controlled values
#[cfg(test)]
pub struct MockStubDirSource(Option<String>);

#[cfg(test)]
impl MockStubDirSource {
    pub fn new(stub_dir: Option<&str>) -> Self {
        Self(stub_dir.map(str::to_string))
    }
}

#[cfg(test)]
impl StubDirSource for MockStubDirSource {
    fn stub_dir(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Settings for a Laravel project. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Application source directory (`app/`)
    pub app_dir: PathBuf,
    /// Database directory holding `migrations/`
    pub database_dir: PathBuf,
    /// Routes file receiving resource routes
    pub routes_file: PathBuf,
    /// Application provider list
    pub providers_file: PathBuf,
    /// Directory with customized stubs
    pub stub_dir: Option<PathBuf>,
    /// SQLite database used as the schema catalog
    pub database: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::from("app"),
            database_dir: PathBuf::from("database"),
            routes_file: PathBuf::from("routes/api.php"),
            providers_file: PathBuf::from("bootstrap/providers.php"),
            stub_dir: None,
            database: None,
        }
    }
}

impl Config {
    /// Default config file name, looked up in the project root
    pub const FILE_NAME: &'static str = "repoforge.toml";

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file at `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_toml(&content, path)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("app_dir", &self.app_dir),
            ("database_dir", &self.database_dir),
            ("routes_file", &self.routes_file),
            ("providers_file", &self.providers_file),
        ] {
            if value.as_os_str().is_empty() {
                return Err(Error::config(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Resolve every configured path against the project root
    pub fn layout(&self, root: &Path) -> ProjectLayout {
        ProjectLayout::new(
            root,
            &self.app_dir,
            &self.database_dir,
            &self.routes_file,
            &self.providers_file,
        )
    }

    /// Stub override directory: CLI flag, then environment, then config file
    pub fn resolve_stub_dir(
        &self,
        root: &Path,
        cli_dir: Option<&Path>,
        source: &dyn StubDirSource,
    ) -> Option<PathBuf> {
        cli_dir
            .map(Path::to_path_buf)
            .or_else(|| source.stub_dir().map(PathBuf::from))
            .or_else(|| self.stub_dir.clone())
            .map(|dir| root.join(dir))
    }

    /// Schema catalog database: CLI flag, then config file, then the Laravel default
    /// `database/database.sqlite` when present
    pub fn resolve_database(&self, root: &Path, cli_db: Option<&Path>) -> Option<PathBuf> {
        if let Some(db) = cli_db.map(Path::to_path_buf).or_else(|| self.database.clone()) {
            return Some(root.join(db));
        }
        let fallback = root.join(&self.database_dir).join("database.sqlite");
        fallback.is_file().then_some(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_laravel_layout() {
        let config = Config::default();
        assert_eq!(config.app_dir, PathBuf::from("app"));
        assert_eq!(config.routes_file, PathBuf::from("routes/api.php"));
        assert_eq!(config.providers_file, PathBuf::from("bootstrap/providers.php"));
        assert!(config.stub_dir.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml(
            "app_dir = \"src/app\"\nstub_dir = \"stubs\"\n",
            Path::new("repoforge.toml"),
        )
        .unwrap();
        assert_eq!(config.app_dir, PathBuf::from("src/app"));
        assert_eq!(config.stub_dir, Some(PathBuf::from("stubs")));
        assert_eq!(config.database_dir, PathBuf::from("database"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = Config::from_toml("app = \"x\"\n", Path::new("repoforge.toml"));
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = Config::from_toml("routes_file = \"\"\n", Path::new("repoforge.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join(Config::FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_stub_dir_priority() {
        let root = Path::new("/project");
        let config = Config {
            stub_dir: Some(PathBuf::from("from-config")),
            ..Default::default()
        };

        let cli = config.resolve_stub_dir(
            root,
            Some(Path::new("from-cli")),
            &MockStubDirSource::new(Some("from-env")),
        );
        assert_eq!(cli, Some(PathBuf::from("/project/from-cli")));

        let env = config.resolve_stub_dir(root, None, &MockStubDirSource::new(Some("from-env")));
        assert_eq!(env, Some(PathBuf::from("/project/from-env")));

        let file = config.resolve_stub_dir(root, None, &MockStubDirSource::new(None));
        assert_eq!(file, Some(PathBuf::from("/project/from-config")));

        let none = Config::default().resolve_stub_dir(root, None, &MockStubDirSource::new(None));
        assert!(none.is_none());
    }

    #[test]
    fn test_database_falls_back_to_laravel_sqlite_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();
        assert!(config.resolve_database(temp_dir.path(), None).is_none());

        std::fs::create_dir_all(temp_dir.path().join("database")).unwrap();
        std::fs::write(temp_dir.path().join("database/database.sqlite"), b"").unwrap();
        assert_eq!(
            config.resolve_database(temp_dir.path(), None),
            Some(temp_dir.path().join("database/database.sqlite"))
        );

        assert_eq!(
            config.resolve_database(temp_dir.path(), Some(Path::new("other.sqlite"))),
            Some(temp_dir.path().join("other.sqlite"))
        );
    }
}
