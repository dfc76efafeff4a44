//! RDKit Toolkit Wrapper
//!
//! Implements the `ToolkitWrapper` port for RDKit. Only needs the bridge
//! backend; RDKit is free software and has no license check.

use std::sync::Arc;

use async_trait::async_trait;

use offtk_domain::constants::TOOLKIT_RDKIT;
use offtk_domain::error::Result;
use offtk_domain::ports::{Availability, ToolkitBackend, ToolkitWrapper};
use offtk_domain::value_objects::{FileFormat, Operation, OperationOutput, OperationRequest};

use crate::toolkits::common::{BackendDelegate, ensure_format, ensure_supported, validate_input};

const CAPABILITIES: &[Operation] = &[
    Operation::FromSmiles,
    Operation::ToSmiles,
    Operation::FromFile,
    Operation::ToFile,
    Operation::FromRdkit,
    Operation::ToRdkit,
    Operation::GenerateConformers,
    Operation::FindRotatableBonds,
];

const READ_FORMATS: &[FileFormat] = &[FileFormat::Sdf, FileFormat::Mol, FileFormat::Smi];

const WRITE_FORMATS: &[FileFormat] = &[
    FileFormat::Sdf,
    FileFormat::Mol,
    FileFormat::Smi,
    FileFormat::Pdb,
];

/// RDKit toolkit wrapper
pub struct RDKitToolkitWrapper {
    delegate: BackendDelegate,
}

impl RDKitToolkitWrapper {
    /// Create a wrapper over `backend`
    pub fn new(backend: Arc<dyn ToolkitBackend>) -> Self {
        Self {
            delegate: BackendDelegate::new(TOOLKIT_RDKIT, backend),
        }
    }

    /// Formats RDKit reads
    pub fn read_formats() -> &'static [FileFormat] {
        READ_FORMATS
    }

    /// Formats RDKit writes
    pub fn write_formats() -> &'static [FileFormat] {
        WRITE_FORMATS
    }
}

#[async_trait]
impl ToolkitWrapper for RDKitToolkitWrapper {
    fn toolkit_name(&self) -> &str {
        TOOLKIT_RDKIT
    }

    fn display_name(&self) -> &str {
        "RDKitToolkitWrapper"
    }

    fn availability(&self) -> Availability {
        self.delegate.availability(|| Availability::Available)
    }

    fn capabilities(&self) -> &[Operation] {
        CAPABILITIES
    }

    async fn execute(&self, request: OperationRequest) -> Result<OperationOutput> {
        ensure_supported(self.display_name(), CAPABILITIES, request.operation())?;
        validate_input(&request)?;
        match &request {
            OperationRequest::FromFile { file_format, .. } => {
                ensure_format(self.display_name(), *file_format, READ_FORMATS, "read")?;
            }
            OperationRequest::ToFile { file_format, .. } => {
                ensure_format(self.display_name(), *file_format, WRITE_FORMATS, "write")?;
            }
            _ => {}
        }
        self.delegate.run(request).await
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use offtk_application::ports::registry::{
    TOOLKIT_WRAPPERS, ToolkitWrapperConfig, ToolkitWrapperEntry,
};

use crate::bridge::BridgeToolkitBackend;

#[linkme::distributed_slice(TOOLKIT_WRAPPERS)]
static RDKIT_TOOLKIT: ToolkitWrapperEntry = ToolkitWrapperEntry {
    name: TOOLKIT_RDKIT,
    description: "RDKit open-source cheminformatics toolkit",
    default_precedence: 20,
    factory: |config: &ToolkitWrapperConfig| {
        let backend = Arc::new(BridgeToolkitBackend::from_config(config));
        Ok(Arc::new(RDKitToolkitWrapper::new(backend)))
    },
};
