//! Native bridge backend
//!
//! Runs a bridge program that hosts the native toolkits and exchanges one
//! JSON request and one JSON response per call.
//!
//! ## Protocol
//!
//! The request is an `OperationRequest` serialized on stdin. The bridge
//! answers on stdout with either
//!
//! ```json
//! {"status": "ok", "result": {"kind": "smiles", "value": "CCO"}, "warnings": []}
//! ```
//!
//! or
//!
//! ```json
//! {"status": "error", "error": {"kind": "undefined_stereochemistry", "message": "..."}}
//! ```

mod backend;
mod protocol;

pub use backend::BridgeToolkitBackend;
pub use protocol::{BridgeError, BridgeResponse};
