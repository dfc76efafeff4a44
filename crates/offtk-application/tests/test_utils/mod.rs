//! Shared fakes for registry tests
//!
//! `FakeToolkit` declares whatever capabilities a test asks for and tags its
//! outputs with its own name, so tests can tell which wrapper served a call.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use offtk_application::ports::registry::{
    TOOLKIT_WRAPPERS, ToolkitWrapperConfig, ToolkitWrapperEntry,
};
use offtk_domain::error::{Error, Result};
use offtk_domain::ports::{Availability, ToolkitWrapper};
use offtk_domain::value_objects::{Molecule, Operation, OperationOutput, OperationRequest};

/// Charge models every fake accepts
pub const FAKE_CHARGE_MODELS: [&str; 2] = ["am1bcc", "gasteiger"];

/// Scriptable toolkit wrapper
pub struct FakeToolkit {
    name: &'static str,
    availability: Availability,
    capabilities: Vec<Operation>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl FakeToolkit {
    /// Available fake declaring `capabilities`
    pub fn new(name: &'static str, capabilities: &[Operation]) -> Self {
        Self {
            name,
            availability: Availability::Available,
            capabilities: capabilities.to_vec(),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Mark the fake unavailable
    pub fn unavailable(mut self) -> Self {
        self.availability = Availability::unavailable(format!("{} is not installed", self.name));
        self
    }

    /// Make every call fail with a backend error
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Wrap in the trait object the registry stores
    pub fn shared(self) -> Arc<FakeToolkit> {
        Arc::new(self)
    }

    /// Number of executed requests
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolkitWrapper for FakeToolkit {
    fn toolkit_name(&self) -> &str {
        self.name
    }

    fn availability(&self) -> Availability {
        self.availability.clone()
    }

    fn capabilities(&self) -> &[Operation] {
        &self.capabilities
    }

    async fn execute(&self, request: OperationRequest) -> Result<OperationOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let operation = request.operation();
        if !self.supports(operation) {
            return Err(Error::unsupported_operation(self.name, operation));
        }
        if let Some(message) = &self.failure {
            return Err(Error::backend(self.name, message.clone()));
        }

        match request {
            OperationRequest::FromSmiles { smiles, .. } => Ok(OperationOutput::Molecule(
                Molecule::new().with_name(format!("{}:{}", self.name, smiles)),
            )),
            OperationRequest::ToSmiles { molecule } => Ok(OperationOutput::Smiles(format!(
                "{}:{}",
                self.name, molecule.name
            ))),
            OperationRequest::ComputePartialCharges {
                molecule,
                charge_model,
            } => {
                if let Some(model) = charge_model {
                    if !FAKE_CHARGE_MODELS.contains(&model.as_str()) {
                        return Err(Error::ChargeModelUnsupported {
                            model,
                            toolkit: self.name.to_string(),
                            supported: FAKE_CHARGE_MODELS.iter().map(|m| m.to_string()).collect(),
                        });
                    }
                }
                let mut molecule = molecule;
                molecule.set_partial_charges(vec![0.0; molecule.n_atoms()])?;
                Ok(OperationOutput::Molecule(molecule))
            }
            OperationRequest::FindRotatableBonds { .. } => {
                Ok(OperationOutput::RotatableBonds(vec![(0, 1)]))
            }
            OperationRequest::ToFile { .. } => Ok(OperationOutput::Written),
            other => Err(Error::backend(
                self.name,
                format!("fake has no canned output for '{}'", other.operation()),
            )),
        }
    }
}

/// Erase the concrete fake type
pub fn as_wrapper(fake: &Arc<FakeToolkit>) -> Arc<dyn ToolkitWrapper> {
    Arc::clone(fake) as Arc<dyn ToolkitWrapper>
}

// ============================================================================
// Compile-time entries for discovery tests
// ============================================================================

#[linkme::distributed_slice(TOOLKIT_WRAPPERS)]
static FAKE_SMILES_ENTRY: ToolkitWrapperEntry = ToolkitWrapperEntry {
    name: "fake-smiles",
    description: "Fake SMILES toolkit for registry tests",
    default_precedence: 10,
    factory: |_config: &ToolkitWrapperConfig| {
        Ok(Arc::new(FakeToolkit::new(
            "fake-smiles",
            &[Operation::FromSmiles, Operation::ToSmiles],
        )))
    },
};

#[linkme::distributed_slice(TOOLKIT_WRAPPERS)]
static FAKE_CHARGES_ENTRY: ToolkitWrapperEntry = ToolkitWrapperEntry {
    name: "fake-charges",
    description: "Fake charge toolkit for registry tests",
    default_precedence: 20,
    factory: |_config: &ToolkitWrapperConfig| {
        Ok(Arc::new(FakeToolkit::new(
            "fake-charges",
            &[Operation::ComputePartialCharges, Operation::ToSmiles],
        )))
    },
};

#[linkme::distributed_slice(TOOLKIT_WRAPPERS)]
static FAKE_MISSING_ENTRY: ToolkitWrapperEntry = ToolkitWrapperEntry {
    name: "fake-missing",
    description: "Fake toolkit whose native library is never installed",
    default_precedence: 5,
    factory: |_config: &ToolkitWrapperConfig| {
        Ok(Arc::new(
            FakeToolkit::new("fake-missing", &[Operation::ToSmiles]).unavailable(),
        ))
    },
};
