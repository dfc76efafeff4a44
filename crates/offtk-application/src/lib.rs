//! Application Layer - offtk
//!
//! Implements the toolkit registry and the operations built on top of it.
//!
//! ## Components
//!
//! - [`ToolkitRegistry`]: ordered toolkit wrappers, first declaring wrapper wins
//! - [`ToolkitDispatch`]: routes requests through a registry or a single wrapper
//! - [`MoleculeService`]: typed molecule operations over any dispatch target
//! - `ports::registry`: compile-time wrapper entries and discovery
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `offtk-domain`: operations, molecule facade, wrapper port, errors
//! - Pure Rust libraries for logging and async traits

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
