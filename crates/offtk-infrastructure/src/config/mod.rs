//! Configuration
//!
//! Layered configuration: defaults, then a TOML file, then `OFFTK__*`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, ConfigSource};
pub use types::*;
