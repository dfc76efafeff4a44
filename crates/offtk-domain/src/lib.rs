//! # offtk Domain Layer
//!
//! Core types shared by every other crate: the molecule facade, the closed
//! set of toolkit operations with their typed arguments, the ports toolkit
//! wrappers and native backends implement, and the error type.
//!
//! This crate has no knowledge of any concrete toolkit.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Availability, BackendReply, ToolkitBackend, ToolkitWrapper};
pub use value_objects::*;
