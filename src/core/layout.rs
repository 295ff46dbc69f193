//! Resolved filesystem layout of the target Laravel project

use std::path::{Path, PathBuf};

/// Absolute locations of every directory and shared file the generator touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    app_dir: PathBuf,
    database_dir: PathBuf,
    routes_file: PathBuf,
    providers_file: PathBuf,
}

impl ProjectLayout {
    pub fn new(
        root: &Path,
        app_dir: &Path,
        database_dir: &Path,
        routes_file: &Path,
        providers_file: &Path,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            app_dir: root.join(app_dir),
            database_dir: root.join(database_dir),
            routes_file: root.join(routes_file),
            providers_file: root.join(providers_file),
        }
    }

    /// Layout with every default path under `root`
    pub fn with_defaults(root: &Path) -> Self {
        crate::core::config::Config::default().layout(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path inside the application directory
    pub fn app_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.app_dir.join(relative)
    }

    pub fn migrations_dir(&self) -> PathBuf {
        self.database_dir.join("migrations")
    }

    pub fn routes_file(&self) -> &Path {
        &self.routes_file
    }

    pub fn providers_file(&self) -> &Path {
        &self.providers_file
    }

    pub fn repository_interface(&self) -> PathBuf {
        self.app_path("Contracts/RepositoryInterface.php")
    }

    pub fn base_repository(&self) -> PathBuf {
        self.app_path("Repositories/BaseRepository.php")
    }

    pub fn service_provider(&self) -> PathBuf {
        self.app_path("Providers/RepositoriesServiceProvider.php")
    }

    pub fn api_response_helper(&self) -> PathBuf {
        self.app_path("Helpers/ApiResponse.php")
    }

    pub fn handle_error_helper(&self) -> PathBuf {
        self.app_path("Helpers/HandleError.php")
    }

    /// Display a path relative to the project root when possible
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
