//! OpenEye Toolkit Wrapper
//!
//! Implements the `ToolkitWrapper` port for the OpenEye toolkits (OEChem,
//! Omega, Quacpac). Requires the bridge backend and a license file, either
//! configured explicitly or named by `OE_LICENSE`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use offtk_domain::constants::TOOLKIT_OPENEYE;
use offtk_domain::error::{Error, Result};
use offtk_domain::ports::{Availability, ToolkitBackend, ToolkitWrapper};
use offtk_domain::value_objects::{FileFormat, Operation, OperationOutput, OperationRequest};

use crate::availability::probe_license;
use crate::constants::{
    DEFAULT_BOND_ORDER_MODEL, OPENEYE_BOND_ORDER_MODELS, OPENEYE_CHARGE_MODELS,
    OPENEYE_DEFAULT_CHARGE_MODEL, OPENEYE_GEOMETRY_FREE_CHARGE_MODELS,
};
use crate::toolkits::common::{
    BackendDelegate, ModelKind, ensure_format, ensure_supported, resolve_model, validate_input,
};

const CAPABILITIES: &[Operation] = &[
    Operation::FromSmiles,
    Operation::ToSmiles,
    Operation::FromFile,
    Operation::ToFile,
    Operation::FromOpenEye,
    Operation::ToOpenEye,
    Operation::GenerateConformers,
    Operation::ComputePartialCharges,
    Operation::ComputePartialChargesAm1bcc,
    Operation::AssignFractionalBondOrders,
    Operation::FindRotatableBonds,
];

const FILE_FORMATS: &[FileFormat] = &[
    FileFormat::Sdf,
    FileFormat::Mol,
    FileFormat::Mol2,
    FileFormat::Pdb,
    FileFormat::Smi,
    FileFormat::Can,
    FileFormat::Ism,
    FileFormat::Oeb,
];

/// OpenEye toolkit wrapper
///
/// ## Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use offtk_providers::bridge::BridgeToolkitBackend;
/// use offtk_providers::toolkits::OpenEyeToolkitWrapper;
///
/// let openeye = OpenEyeToolkitWrapper::new(
///     Arc::new(BridgeToolkitBackend::new("offtk-bridge")),
///     Some("/opt/openeye/oe_license.txt".into()),
/// );
/// ```
pub struct OpenEyeToolkitWrapper {
    delegate: BackendDelegate,
    license_path: Option<PathBuf>,
}

impl OpenEyeToolkitWrapper {
    /// Create a wrapper over `backend`
    ///
    /// # Arguments
    /// * `backend` - Engine hosting OEChem
    /// * `license_path` - License file; `OE_LICENSE` is consulted when `None`
    pub fn new(backend: Arc<dyn ToolkitBackend>, license_path: Option<PathBuf>) -> Self {
        Self {
            delegate: BackendDelegate::new(TOOLKIT_OPENEYE, backend),
            license_path,
        }
    }

    /// File formats OEChem reads and writes
    pub fn file_formats() -> &'static [FileFormat] {
        FILE_FORMATS
    }

    /// Normalize models and check preconditions
    fn prepare(&self, request: OperationRequest) -> Result<OperationRequest> {
        let display_name = self.display_name();
        match request {
            OperationRequest::FromFile { file_format, .. } => {
                ensure_format(display_name, file_format, FILE_FORMATS, "read")?;
                Ok(request)
            }
            OperationRequest::ToFile { file_format, .. } => {
                ensure_format(display_name, file_format, FILE_FORMATS, "write")?;
                Ok(request)
            }
            OperationRequest::ComputePartialCharges {
                molecule,
                charge_model,
            } => {
                let model = resolve_model(
                    ModelKind::Charge,
                    display_name,
                    charge_model.as_deref(),
                    &OPENEYE_CHARGE_MODELS,
                    OPENEYE_DEFAULT_CHARGE_MODEL,
                )?;
                if molecule.n_conformers() == 0
                    && !OPENEYE_GEOMETRY_FREE_CHARGE_MODELS.contains(&model.as_str())
                {
                    return Err(Error::MissingConformers {
                        operation: Operation::ComputePartialCharges,
                    });
                }
                Ok(OperationRequest::ComputePartialCharges {
                    molecule,
                    charge_model: Some(model),
                })
            }
            OperationRequest::ComputePartialChargesAm1bcc { ref molecule }
                if molecule.n_conformers() == 0 =>
            {
                Err(Error::MissingConformers {
                    operation: Operation::ComputePartialChargesAm1bcc,
                })
            }
            OperationRequest::AssignFractionalBondOrders {
                molecule,
                bond_order_model,
            } => {
                let model = resolve_model(
                    ModelKind::BondOrder,
                    display_name,
                    bond_order_model.as_deref(),
                    &OPENEYE_BOND_ORDER_MODELS,
                    DEFAULT_BOND_ORDER_MODEL,
                )?;
                Ok(OperationRequest::AssignFractionalBondOrders {
                    molecule,
                    bond_order_model: Some(model),
                })
            }
            other => Ok(other),
        }
    }
}

#[async_trait]
impl ToolkitWrapper for OpenEyeToolkitWrapper {
    fn toolkit_name(&self) -> &str {
        TOOLKIT_OPENEYE
    }

    fn display_name(&self) -> &str {
        "OpenEyeToolkitWrapper"
    }

    fn availability(&self) -> Availability {
        self.delegate
            .availability(|| probe_license(self.license_path.as_deref()))
    }

    fn capabilities(&self) -> &[Operation] {
        CAPABILITIES
    }

    async fn execute(&self, request: OperationRequest) -> Result<OperationOutput> {
        ensure_supported(self.display_name(), CAPABILITIES, request.operation())?;
        validate_input(&request)?;
        let request = self.prepare(request)?;
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

/// Factory function for creating OpenEye wrapper instances.
fn openeye_factory(config: &ToolkitWrapperConfig) -> Result<Arc<dyn ToolkitWrapper>> {
    let backend = Arc::new(BridgeToolkitBackend::from_config(config));
    Ok(Arc::new(OpenEyeToolkitWrapper::new(
        backend,
        config.license_path.clone(),
    )))
}

#[linkme::distributed_slice(TOOLKIT_WRAPPERS)]
static OPENEYE_TOOLKIT: ToolkitWrapperEntry = ToolkitWrapperEntry {
    name: TOOLKIT_OPENEYE,
    description: "OpenEye toolkits (OEChem, Omega, Quacpac); requires a license",
    default_precedence: 10,
    factory: openeye_factory,
};
