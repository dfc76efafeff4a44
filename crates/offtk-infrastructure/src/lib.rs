//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML, `OFFTK__*` environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension trait for foreign errors |
//! | [`bootstrap`] | Registry construction from configuration |
//! | [`constants`] | Centralized configuration constants |

// Force linkme registration of the toolkit wrappers
extern crate offtk_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::build_toolkit_registry;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
