//! Application ports
//!
//! Re-exports the domain ports wrappers implement, next to the compile-time
//! wrapper registry.

pub mod registry;

pub use offtk_domain::ports::{Availability, BackendReply, ToolkitBackend, ToolkitWrapper};
