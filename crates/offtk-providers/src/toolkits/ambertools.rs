//! AmberTools Toolkit Wrapper
//!
//! Implements the charge and bond order operations with `antechamber` and
//! `sqm`. AmberTools builds its own geometry, so input conformers are
//! optional. Both executables must be found in the configured bin directory,
//! `$AMBERHOME/bin` or `PATH`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use offtk_domain::constants::TOOLKIT_AMBERTOOLS;
use offtk_domain::error::Result;
use offtk_domain::ports::{Availability, ToolkitBackend, ToolkitWrapper};
use offtk_domain::value_objects::{Operation, OperationOutput, OperationRequest};

use crate::availability::probe_ambertools;
use crate::constants::{
    AMBERTOOLS_BOND_ORDER_MODELS, AMBERTOOLS_CHARGE_MODELS, AMBERTOOLS_DEFAULT_CHARGE_MODEL,
    DEFAULT_BOND_ORDER_MODEL,
};
use crate::toolkits::common::{
    BackendDelegate, ModelKind, ensure_supported, resolve_model, validate_input,
};

const CAPABILITIES: &[Operation] = &[
    Operation::ComputePartialCharges,
    Operation::ComputePartialChargesAm1bcc,
    Operation::AssignFractionalBondOrders,
];

/// AmberTools toolkit wrapper
pub struct AmberToolsToolkitWrapper {
    delegate: BackendDelegate,
    bin_dir: Option<PathBuf>,
}

impl AmberToolsToolkitWrapper {
    /// Create a wrapper over `backend`
    ///
    /// # Arguments
    /// * `backend` - Engine driving antechamber and sqm
    /// * `bin_dir` - Directory holding the executables; tried before `$AMBERHOME/bin` and `PATH`
    pub fn new(backend: Arc<dyn ToolkitBackend>, bin_dir: Option<PathBuf>) -> Self {
        Self {
            delegate: BackendDelegate::new(TOOLKIT_AMBERTOOLS, backend),
            bin_dir,
        }
    }

    fn prepare(&self, request: OperationRequest) -> Result<OperationRequest> {
        match request {
            OperationRequest::ComputePartialCharges {
                molecule,
                charge_model,
            } => Ok(OperationRequest::ComputePartialCharges {
                charge_model: Some(resolve_model(
                    ModelKind::Charge,
                    self.display_name(),
                    charge_model.as_deref(),
                    &AMBERTOOLS_CHARGE_MODELS,
                    AMBERTOOLS_DEFAULT_CHARGE_MODEL,
                )?),
                molecule,
            }),
            OperationRequest::AssignFractionalBondOrders {
                molecule,
                bond_order_model,
            } => Ok(OperationRequest::AssignFractionalBondOrders {
                bond_order_model: Some(resolve_model(
                    ModelKind::BondOrder,
                    self.display_name(),
                    bond_order_model.as_deref(),
                    &AMBERTOOLS_BOND_ORDER_MODELS,
                    DEFAULT_BOND_ORDER_MODEL,
                )?),
                molecule,
            }),
            other => Ok(other),
        }
    }
}

#[async_trait]
impl ToolkitWrapper for AmberToolsToolkitWrapper {
    fn toolkit_name(&self) -> &str {
        TOOLKIT_AMBERTOOLS
    }

    fn display_name(&self) -> &str {
        "AmberToolsToolkitWrapper"
    }

    fn availability(&self) -> Availability {
        self.delegate
            .availability(|| probe_ambertools(self.bin_dir.as_deref()))
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

/// Factory function for creating AmberTools wrapper instances.
fn ambertools_factory(config: &ToolkitWrapperConfig) -> Result<Arc<dyn ToolkitWrapper>> {
    let backend = Arc::new(BridgeToolkitBackend::from_config(config));
    Ok(Arc::new(AmberToolsToolkitWrapper::new(
        backend,
        config.ambertools_bin_dir.clone(),
    )))
}

#[linkme::distributed_slice(TOOLKIT_WRAPPERS)]
static AMBERTOOLS_TOOLKIT: ToolkitWrapperEntry = ToolkitWrapperEntry {
    name: TOOLKIT_AMBERTOOLS,
    description: "AmberTools antechamber/sqm charge and bond order engine",
    default_precedence: 30,
    factory: ambertools_factory,
};
