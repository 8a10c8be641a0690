#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod config;
pub mod types;

pub use config::{ConfigError, ConfigLoader, EngineConfig};
pub use types::{Engine, TypeDefinition, TypeRegistry, TypedefError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
