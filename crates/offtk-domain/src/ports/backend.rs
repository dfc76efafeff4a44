//! Native Backend Port
//!
//! The engine that actually performs chemistry for a toolkit wrapper. The
//! wrapper validates arguments and results; the backend is opaque.

use async_trait::async_trait;

use crate::error::Result;
use crate::ports::toolkit::Availability;
use crate::value_objects::{OperationOutput, OperationRequest};

/// Output of one backend call together with any warnings the engine raised
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    /// Operation output
    pub output: OperationOutput,
    /// Non-fatal warnings, e.g. unexpected atom types in an input file
    pub warnings: Vec<String>,
}

impl BackendReply {
    /// Create a reply without warnings
    pub fn new(output: OperationOutput) -> Self {
        Self {
            output,
            warnings: Vec::new(),
        }
    }

    /// Attach a warning
    pub fn with_warning<S: Into<String>>(mut self, warning: S) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// Handle to a native cheminformatics engine
#[async_trait]
pub trait ToolkitBackend: Send + Sync {
    /// Name of the backend implementation
    fn backend_name(&self) -> &str;

    /// Whether the engine can be reached; side-effect free
    fn probe(&self) -> Availability;

    /// Run `request` inside the engine on behalf of `toolkit`
    async fn execute(&self, toolkit: &str, request: &OperationRequest) -> Result<BackendReply>;
}
