//! Infrastructure layer - concrete implementations of domain ports

pub mod injection;
pub mod output;
pub mod schema;
pub mod templates;

pub use injection::{BindingInjector, InjectionError, RouteInjector};
pub use output::FileSystemWriter;
pub use schema::{NullSchemaCatalog, SqliteSchemaCatalog};
pub use templates::*;
