//! Toolkit Wrapper Registration
//!
//! Defines the auto-registration infrastructure for toolkit wrappers.
//! Uses the `linkme` crate for compile-time registration of wrappers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Wrapper Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Wrapper defines:   #[linkme::distributed_slice(TOOLKIT_     │
//! │                        WRAPPERS)] static ENTRY = ...            │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static TOOLKIT_WRAPPERS: [Entry]     │
//! │                              ↓                                  │
//! │  3. Discovery builds:  discover_toolkits(&config)               │
//! │                              ↓                                  │
//! │  4. ToolkitRegistry:   precedence list, first match wins        │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are immutable compile-time data. Nothing is registered into a
//! `ToolkitRegistry` until its constructor is handed the discovery result.

pub mod toolkit;

pub use toolkit::{
    TOOLKIT_WRAPPERS, ToolkitWrapperConfig, ToolkitWrapperEntry, discover_toolkits,
    list_toolkits, resolve_toolkit,
};
