//! Toolkit Wrapper Port
//!
//! A toolkit wrapper adapts one external cheminformatics engine to the fixed
//! capability interface. The registry only ever asks a wrapper three things:
//! its name, whether it is available, and whether it declares an operation.
//!
//! ## Contract
//!
//! - [`ToolkitWrapper::availability`] is side-effect free, idempotent and
//!   never fails; a missing native dependency is a normal answer.
//! - [`ToolkitWrapper::execute`] is only called with requests whose
//!   operation appears in [`ToolkitWrapper::capabilities`]. Wrappers still
//!   reject other requests with [`Error::UnsupportedOperation`].
//!
//! [`Error::UnsupportedOperation`]: crate::error::Error::UnsupportedOperation

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Operation, OperationOutput, OperationRequest};

/// Whether a toolkit's native dependency is usable in this environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// The toolkit can execute operations
    Available,
    /// The toolkit cannot be used
    Unavailable {
        /// Human-readable reason, e.g. the missing executable
        reason: String,
    },
}

impl Availability {
    /// Create an unavailable status
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Availability::Unavailable {
            reason: reason.into(),
        }
    }

    /// True when the toolkit can be used
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    /// Reason for unavailability, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Availability::Available => None,
            Availability::Unavailable { reason } => Some(reason),
        }
    }

    /// Combine two checks; the first failure wins
    pub fn and(self, other: Availability) -> Availability {
        match self {
            Availability::Available => other,
            unavailable => unavailable,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("available"),
            Availability::Unavailable { reason } => write!(f, "unavailable ({reason})"),
        }
    }
}

/// Adapter exposing one external toolkit through the capability interface
///
/// # Example
///
/// ```ignore
/// use offtk_domain::{Operation, OperationRequest, ToolkitWrapper};
///
/// if wrapper.is_available() && wrapper.supports(Operation::FromSmiles) {
///     let molecule = wrapper
///         .execute(OperationRequest::from_smiles("CCO"))
///         .await?
///         .into_molecule()?;
/// }
/// ```
#[async_trait]
pub trait ToolkitWrapper: Send + Sync {
    /// Registry name of the toolkit (e.g. "openeye", "rdkit")
    fn toolkit_name(&self) -> &str;

    /// Wrapper type name used in user-facing messages
    fn display_name(&self) -> &str {
        self.toolkit_name()
    }

    /// Availability of the native dependency
    fn availability(&self) -> Availability;

    /// True when [`availability`](Self::availability) is `Available`
    fn is_available(&self) -> bool {
        self.availability().is_available()
    }

    /// Operations this wrapper implements
    fn capabilities(&self) -> &[Operation];

    /// Whether this wrapper implements `operation`
    fn supports(&self, operation: Operation) -> bool {
        self.capabilities().contains(&operation)
    }

    /// Execute one operation
    async fn execute(&self, request: OperationRequest) -> Result<OperationOutput>;
}

impl fmt::Debug for dyn ToolkitWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolkitWrapper")
            .field("toolkit_name", &self.toolkit_name())
            .finish()
    }
}
