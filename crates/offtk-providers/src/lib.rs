//! # offtk - Toolkit Wrapper Implementations
//!
//! This crate contains the toolkit wrappers the registry dispatches to. Each
//! wrapper implements the `ToolkitWrapper` port defined in `offtk-domain`
//! and registers a factory in the `TOOLKIT_WRAPPERS` slice of
//! `offtk-application`.
//!
//! ## Components
//!
//! | Module | Contents |
//! |--------|----------|
//! | `toolkits` | OpenEye, RDKit and AmberTools wrappers |
//! | `bridge` | `BridgeToolkitBackend`, the JSON-over-stdio native backend |
//! | `availability` | PATH, license and AmberTools executable probes |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! offtk-providers = { version = "0.1", default-features = false, features = ["toolkit-rdkit"] }
//! ```
//!
//! Linking this crate is what makes its wrappers discoverable; binaries
//! that never name a wrapper type need `extern crate offtk_providers;`.

// Re-export offtk-domain types commonly used with wrappers
pub use offtk_domain::error::{Error, Result};
pub use offtk_domain::ports::{ToolkitBackend, ToolkitWrapper};

/// Provider-specific constants
pub mod constants;

/// Availability probes for native dependencies
pub mod availability;

/// Native bridge backend
///
/// Implements `ToolkitBackend` by running a bridge subprocess per call.
pub mod bridge;

/// Toolkit wrapper implementations
///
/// Implements `ToolkitWrapper` for each supported toolkit.
pub mod toolkits;
