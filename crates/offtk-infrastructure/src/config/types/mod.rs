//! Configuration types module

pub mod app;
pub mod logging;
pub mod toolkits;

// Re-export main types
pub use app::*;
