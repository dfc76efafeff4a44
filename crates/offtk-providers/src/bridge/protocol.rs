//! Bridge wire types

use serde::{Deserialize, Serialize};

use offtk_domain::error::{Error, Result};
use offtk_domain::ports::BackendReply;
use offtk_domain::value_objects::OperationOutput;

/// Error kind for stereocenters left undefined
pub const KIND_UNDEFINED_STEREOCHEMISTRY: &str = "undefined_stereochemistry";

/// Error kind for chemical input the toolkit rejected
pub const KIND_INVALID_INPUT: &str = "invalid_input";

/// One bridge response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BridgeResponse {
    /// The operation completed
    Ok {
        /// Operation output
        result: OperationOutput,
        /// Non-fatal warnings raised by the toolkit
        #[serde(default)]
        warnings: Vec<String>,
    },
    /// The toolkit reported an error
    Error {
        /// Error details
        error: BridgeError,
    },
}

/// Error reported by the bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeError {
    /// Machine-readable error kind
    pub kind: String,
    /// Toolkit error message
    pub message: String,
}

impl BridgeError {
    /// Map the bridge error onto the domain error for `toolkit`
    pub fn into_error(self, toolkit: &str) -> Error {
        match self.kind.as_str() {
            KIND_UNDEFINED_STEREOCHEMISTRY => Error::undefined_stereochemistry(self.message),
            KIND_INVALID_INPUT => Error::invalid_input(self.message),
            other => Error::backend(toolkit, format!("{other}: {}", self.message)),
        }
    }
}

impl BridgeResponse {
    /// Parse a response from raw stdout
    pub fn parse(toolkit: &str, stdout: &[u8]) -> Result<Self> {
        serde_json::from_slice(stdout).map_err(|e| {
            Error::backend_with_source(toolkit, "bridge returned malformed JSON", e)
        })
    }

    /// Convert into a backend reply or the mapped error
    pub fn into_reply(self, toolkit: &str) -> Result<BackendReply> {
        match self {
            BridgeResponse::Ok { result, warnings } => Ok(BackendReply {
                output: result,
                warnings,
            }),
            BridgeResponse::Error { error } => Err(error.into_error(toolkit)),
        }
    }
}
