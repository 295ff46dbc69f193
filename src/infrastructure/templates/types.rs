//! Stub catalog identities

use std::fmt;

/// Symbolic name of every template in the stub catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stub {
    Model,
    Repository,
    Service,
    Controller,
    StoreFormRequest,
    UpdateFormRequest,
    Resource,
    Collection,
    Migration,
    RepositoryInterface,
    BaseRepository,
    RepositoriesServiceProvider,
    ApiResponse,
    HandleError,
}

impl Stub {
    /// Catalog name, also the file stem of the `.stub` file
    pub fn name(&self) -> &'static str {
        match self {
            Stub::Model => "model",
            Stub::Repository => "repository",
            Stub::Service => "service",
            Stub::Controller => "controller",
            Stub::StoreFormRequest => "store-form-request",
            Stub::UpdateFormRequest => "update-form-request",
            Stub::Resource => "resource",
            Stub::Collection => "collection",
            Stub::Migration => "migration",
            Stub::RepositoryInterface => "repository-interface",
            Stub::BaseRepository => "base-repository",
            Stub::RepositoriesServiceProvider => "repositories-service-provider",
            Stub::ApiResponse => "api-response",
            Stub::HandleError => "handle-error",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.stub", self.name())
    }

    pub fn all() -> &'static [Stub] {
        &[
            Stub::Model,
            Stub::Repository,
            Stub::Service,
            Stub::Controller,
            Stub::StoreFormRequest,
            Stub::UpdateFormRequest,
            Stub::Resource,
            Stub::Collection,
            Stub::Migration,
            Stub::RepositoryInterface,
            Stub::BaseRepository,
            Stub::RepositoriesServiceProvider,
            Stub::ApiResponse,
            Stub::HandleError,
        ]
    }
}

impl fmt::Display for Stub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
