//! Configuration management for Relnotes.
//!
//! This crate handles loading and validating the `relnotes.toml`
//! configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, load_config};
pub use schema::{Config, ReleaseConfig, SectionConfig, SourceConfig};
