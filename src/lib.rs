//! repoforge: repository pattern scaffolding for Laravel projects
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
