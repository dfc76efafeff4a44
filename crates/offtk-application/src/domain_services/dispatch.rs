//! Dispatch targets
//!
//! Molecule operations accept either a whole [`ToolkitRegistry`] or a single
//! toolkit wrapper. Both implement [`ToolkitDispatch`].

use std::sync::Arc;

use async_trait::async_trait;
use offtk_domain::error::{Error, Result};
use offtk_domain::ports::{Availability, ToolkitWrapper};
use offtk_domain::value_objects::{OperationOutput, OperationRequest};

use crate::domain_services::toolkit_registry::ToolkitRegistry;

/// Something that can route an operation request to a toolkit
#[async_trait]
pub trait ToolkitDispatch: Send + Sync {
    /// Route and execute `request`
    async fn dispatch(&self, request: OperationRequest) -> Result<OperationOutput>;
}

#[async_trait]
impl ToolkitDispatch for ToolkitRegistry {
    async fn dispatch(&self, request: OperationRequest) -> Result<OperationOutput> {
        self.call(request).await
    }
}

/// A single wrapper acts as a one-entry registry
#[async_trait]
impl ToolkitDispatch for Arc<dyn ToolkitWrapper> {
    async fn dispatch(&self, request: OperationRequest) -> Result<OperationOutput> {
        let operation = request.operation();
        if !self.supports(operation) {
            return Err(Error::no_suitable_toolkit(
                operation,
                vec![self.toolkit_name().to_string()],
            ));
        }
        if let Availability::Unavailable { reason } = self.availability() {
            return Err(Error::toolkit_unavailable(self.toolkit_name(), reason));
        }
        self.execute(request).await
    }
}
