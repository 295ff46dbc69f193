//! Database schema catalogs

pub mod sqlite_catalog;

pub use sqlite_catalog::*;
