//! repoforge core
//!
//! Configuration, project layout resolution, error types and the naming helpers
//! shared by every other layer.

pub mod config;
pub mod error;
pub mod layout;
pub mod utils;

pub use config::{Config, EnvStubDirSource, StubDirSource};
pub use error::Error;
pub use layout::ProjectLayout;
