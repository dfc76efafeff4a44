//! Error handling types

use thiserror::Error;

use crate::value_objects::Operation;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for offtk
///
/// Registry-level failures (`NoSuitableToolkit`, `ToolkitUnavailable`, ...) are
/// raised by the registry itself. Everything a toolkit wrapper or its backend
/// returns travels through the registry unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// No registered toolkit implements the requested operation
    #[error("No registered toolkit implements '{operation}'. Registered toolkits: {registered:?}")]
    NoSuitableToolkit {
        /// The requested operation
        operation: Operation,
        /// Names of the toolkits that were searched, in precedence order
        registered: Vec<String>,
    },

    /// A toolkit whose native dependency is missing was used explicitly
    #[error("Toolkit '{toolkit}' is not available: {reason}")]
    ToolkitUnavailable {
        /// Toolkit name
        toolkit: String,
        /// Why the toolkit is unavailable
        reason: String,
    },

    /// Deregistration of a toolkit that is not in the registry
    #[error("Toolkit '{toolkit}' is not registered")]
    ToolkitNotRegistered {
        /// Toolkit name
        toolkit: String,
    },

    /// No wrapper entry exists under the given name
    #[error("Unknown toolkit '{name}'. Known toolkits: {known:?}")]
    UnknownToolkit {
        /// Requested toolkit name
        name: String,
        /// Names of every known wrapper entry
        known: Vec<String>,
    },

    /// An operation name did not parse into a known operation
    #[error("Unknown operation '{name}'")]
    UnknownOperation {
        /// The rejected name
        name: String,
    },

    /// A wrapper was asked directly for an operation it does not declare
    #[error("{toolkit} does not implement '{operation}'")]
    UnsupportedOperation {
        /// Toolkit name
        toolkit: String,
        /// The requested operation
        operation: Operation,
    },

    /// Stereocenters or stereo bonds were left undefined
    #[error("Undefined stereochemistry: {message}")]
    UndefinedStereochemistry {
        /// Backend description of the offending centers
        message: String,
    },

    /// The backend rejected the chemical input
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },

    /// Requested charge model is not offered by the toolkit
    #[error(
        "Charge model '{model}' is not supported by {toolkit}. Supported models are [{}]",
        quoted_list(.supported)
    )]
    ChargeModelUnsupported {
        /// Requested model
        model: String,
        /// Wrapper type name
        toolkit: String,
        /// Models the wrapper accepts
        supported: Vec<String>,
    },

    /// Requested bond order model is not offered by the toolkit
    #[error(
        "Bond order model '{model}' is not supported by {toolkit}. Supported models are [{}]",
        quoted_list(.supported)
    )]
    BondOrderModelUnsupported {
        /// Requested model
        model: String,
        /// Wrapper type name
        toolkit: String,
        /// Models the wrapper accepts
        supported: Vec<String>,
    },

    /// File format the toolkit cannot read or write
    #[error("{toolkit} cannot {direction} {format} files")]
    UnsupportedFileFormat {
        /// Wrapper type name
        toolkit: String,
        /// Requested format
        format: String,
        /// "read" or "write"
        direction: &'static str,
    },

    /// The operation needs at least one conformer
    #[error("{operation} requires at least one conformer")]
    MissingConformers {
        /// The operation that was attempted
        operation: Operation,
    },

    /// Molecule data violates a structural invariant
    #[error("Invalid molecule: {message}")]
    InvalidMolecule {
        /// Description of the violated invariant
        message: String,
    },

    /// An operation returned an output kind the caller did not expect
    #[error("Expected {expected} output, got {actual}")]
    UnexpectedOutput {
        /// Expected output kind
        expected: &'static str,
        /// Output kind actually received
        actual: &'static str,
    },

    /// Native backend failure
    #[error("{toolkit} backend error: {message}")]
    Backend {
        /// Toolkit name
        toolkit: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

// Registry error creation methods
impl Error {
    /// Create a no-suitable-toolkit error
    pub fn no_suitable_toolkit(operation: Operation, registered: Vec<String>) -> Self {
        Self::NoSuitableToolkit {
            operation,
            registered,
        }
    }

    /// Create a toolkit-unavailable error
    pub fn toolkit_unavailable<T: Into<String>, R: Into<String>>(toolkit: T, reason: R) -> Self {
        Self::ToolkitUnavailable {
            toolkit: toolkit.into(),
            reason: reason.into(),
        }
    }

    /// Create a toolkit-not-registered error
    pub fn toolkit_not_registered<S: Into<String>>(toolkit: S) -> Self {
        Self::ToolkitNotRegistered {
            toolkit: toolkit.into(),
        }
    }

    /// Whether this error means no registered toolkit could serve the operation
    pub fn is_no_suitable_toolkit(&self) -> bool {
        matches!(self, Self::NoSuitableToolkit { .. })
    }
}

// Wrapper error creation methods
impl Error {
    /// Create an unsupported-operation error
    pub fn unsupported_operation<S: Into<String>>(toolkit: S, operation: Operation) -> Self {
        Self::UnsupportedOperation {
            toolkit: toolkit.into(),
            operation,
        }
    }

    /// Create an undefined-stereochemistry error
    pub fn undefined_stereochemistry<S: Into<String>>(message: S) -> Self {
        Self::UndefinedStereochemistry {
            message: message.into(),
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid-molecule error
    pub fn invalid_molecule<S: Into<String>>(message: S) -> Self {
        Self::InvalidMolecule {
            message: message.into(),
        }
    }

    /// Create a backend error
    pub fn backend<T: Into<String>, M: Into<String>>(toolkit: T, message: M) -> Self {
        Self::Backend {
            toolkit: toolkit.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend error with source
    pub fn backend_with_source<
        T: Into<String>,
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        toolkit: T,
        message: M,
        source: E,
    ) -> Self {
        Self::Backend {
            toolkit: toolkit.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
