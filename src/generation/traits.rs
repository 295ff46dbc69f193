//! Port interfaces for the generation domain

use crate::generation::{BindingReport, EmitOutcome, EntityName, GenerationError, InjectionOutcome};
use std::path::Path;

/// Reports which tables already exist in the application database
pub trait SchemaCatalog {
    fn has_table(&self, table: &str) -> Result<bool, GenerationError>;
}

/// Writes rendered artifacts without ever replacing an existing file
pub trait ArtifactWriter {
    fn emit(&self, path: &Path, content: &str) -> Result<EmitOutcome, GenerationError>;
}

/// Registers the repository binding of an entity in the service provider
pub trait BindingRegistrar {
    fn inject(&self, entity: &EntityName) -> BindingReport;
}

/// Declares the resource route of an entity in the routes file
pub trait RouteRegistrar {
    fn add_route(&self, entity: &EntityName) -> InjectionOutcome;
}
