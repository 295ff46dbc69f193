//! Generation domain module - orchestrates repository pattern scaffolding
//!
//! Turns an entity name and a set of modes into a plan of PHP artifacts, guards each
//! against overwriting, renders it from its stub and hands it to an [`ArtifactWriter`].
//! Shared project files are patched through the registrar ports afterwards.

pub mod errors;
pub mod guard;
pub mod orchestrator;
pub mod placeholders;
pub mod planner;
pub mod rules;
pub mod traits;
pub mod types;

pub use errors::*;
pub use guard::*;
pub use orchestrator::*;
pub use planner::{ArtifactPlan, MIGRATION_TIMESTAMP_FORMAT};
pub use traits::*;
pub use types::*;
