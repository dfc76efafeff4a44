//! Domain services: the toolkit registry and its dispatch targets

pub mod dispatch;
pub mod toolkit_registry;

pub use dispatch::ToolkitDispatch;
pub use toolkit_registry::{ResolvedOperation, ToolkitRegistry};
