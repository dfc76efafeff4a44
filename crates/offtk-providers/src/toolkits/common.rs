//! Shared wrapper plumbing
//!
//! Argument normalization, output validation and the backend call shared by
//! every toolkit wrapper.

use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use offtk_domain::error::{Error, Result};
use offtk_domain::ports::{Availability, ToolkitBackend};
use offtk_domain::value_objects::{FileFormat, Molecule, Operation, OperationOutput, OperationRequest};

/// Backend handle plus the cached availability of one wrapper instance
pub(crate) struct BackendDelegate {
    toolkit: &'static str,
    backend: Arc<dyn ToolkitBackend>,
    availability: OnceLock<Availability>,
}

impl BackendDelegate {
    pub(crate) fn new(toolkit: &'static str, backend: Arc<dyn ToolkitBackend>) -> Self {
        Self {
            toolkit,
            backend,
            availability: OnceLock::new(),
        }
    }

    /// Availability computed on first use; `extra` adds toolkit-specific checks
    pub(crate) fn availability(&self, extra: impl FnOnce() -> Availability) -> Availability {
        self.availability
            .get_or_init(|| {
                let availability = match self.backend.probe() {
                    Availability::Available => extra(),
                    unavailable => unavailable,
                };
                debug!(toolkit = self.toolkit, status = %availability, "Probed toolkit");
                availability
            })
            .clone()
    }

    /// Send `request` to the backend and validate the output shape
    pub(crate) async fn run(&self, request: OperationRequest) -> Result<OperationOutput> {
        let operation = request.operation();
        let reply = self.backend.execute(self.toolkit, &request).await?;
        for warning in &reply.warnings {
            warn!(toolkit = self.toolkit, operation = %operation, "{warning}");
        }
        check_output(self.toolkit, operation, reply.output)
    }
}

/// Reject an operation outside the wrapper's capability set
pub(crate) fn ensure_supported(
    display_name: &str,
    capabilities: &[Operation],
    operation: Operation,
) -> Result<()> {
    if capabilities.contains(&operation) {
        Ok(())
    } else {
        Err(Error::unsupported_operation(display_name, operation))
    }
}

/// Which kind of model a name refers to, for error reporting
#[derive(Debug, Clone, Copy)]
pub(crate) enum ModelKind {
    Charge,
    BondOrder,
}

/// Apply the default and check support, matching names case-insensitively
///
/// Errors echo the name as the caller wrote it.
pub(crate) fn resolve_model(
    kind: ModelKind,
    display_name: &str,
    requested: Option<&str>,
    supported: &[&str],
    default: &str,
) -> Result<String> {
    let Some(requested) = requested else {
        return Ok(default.to_string());
    };
    let normalized = requested.trim().to_ascii_lowercase();
    if supported.contains(&normalized.as_str()) {
        return Ok(normalized);
    }

    let model = requested.to_string();

    let supported = supported.iter().map(|m| m.to_string()).collect();
    let toolkit = display_name.to_string();
    Err(match kind {
        ModelKind::Charge => Error::ChargeModelUnsupported {
            model,
            toolkit,
            supported,
        },
        ModelKind::BondOrder => Error::BondOrderModelUnsupported {
            model,
            toolkit,
            supported,
        },
    })
}

/// Reject a file format the wrapper cannot handle
pub(crate) fn ensure_format(
    display_name: &str,
    format: FileFormat,
    supported: &[FileFormat],
    direction: &'static str,
) -> Result<()> {
    if supported.contains(&format) {
        Ok(())
    } else {
        Err(Error::UnsupportedFileFormat {
            toolkit: display_name.to_string(),
            format: format.to_string(),
            direction,
        })
    }
}

/// Structural checks on molecules passed into a wrapper
pub(crate) fn validate_input(request: &OperationRequest) -> Result<()> {
    match request {
        OperationRequest::FromSmiles { smiles, .. } if smiles.trim().is_empty() => {
            Err(Error::invalid_input("empty SMILES string"))
        }
        OperationRequest::GenerateConformers { n_conformers: 0, .. } => {
            Err(Error::invalid_input("n_conformers must be at least 1"))
        }
        OperationRequest::ToSmiles { molecule }
        | OperationRequest::ToFile { molecule, .. }
        | OperationRequest::ToOpenEye { molecule }
        | OperationRequest::ToRdkit { molecule }
        | OperationRequest::GenerateConformers { molecule, .. }
        | OperationRequest::ComputePartialCharges { molecule, .. }
        | OperationRequest::ComputePartialChargesAm1bcc { molecule }
        | OperationRequest::AssignFractionalBondOrders { molecule, .. }
        | OperationRequest::FindRotatableBonds { molecule, .. } => molecule.validate(),
        _ => Ok(()),
    }
}

/// Output kind every successful call of `operation` produces
pub(crate) fn expected_output(operation: Operation) -> &'static str {
    match operation {
        Operation::FromFile => "molecules",
        Operation::ToSmiles => "smiles",
        Operation::ToFile => "written",
        Operation::ToOpenEye | Operation::ToRdkit => "native",
        Operation::FindRotatableBonds => "rotatable_bonds",
        Operation::FromSmiles
        | Operation::FromOpenEye
        | Operation::FromRdkit
        | Operation::GenerateConformers
        | Operation::ComputePartialCharges
        | Operation::ComputePartialChargesAm1bcc
        | Operation::AssignFractionalBondOrders => "molecule",
    }
}

/// Validate a backend result for `operation`
pub(crate) fn check_output(
    toolkit: &str,
    operation: Operation,
    output: OperationOutput,
) -> Result<OperationOutput> {
    let expected = expected_output(operation);
    if output.kind() != expected {
        return Err(Error::backend(
            toolkit,
            format!(
                "{operation} returned {} output, expected {expected}",
                output.kind()
            ),
        ));
    }

    match &output {
        OperationOutput::Molecule(molecule) => {
            check_molecule(toolkit, molecule)?;
            match operation {
                Operation::ComputePartialCharges | Operation::ComputePartialChargesAm1bcc => {
                    check_charges(toolkit, molecule)?;
                }
                Operation::AssignFractionalBondOrders => check_bond_orders(toolkit, molecule)?,
                Operation::GenerateConformers if molecule.n_conformers() == 0 => {
                    return Err(Error::backend(toolkit, "no conformers were generated"));
                }
                _ => {}
            }
        }
        OperationOutput::Molecules(molecules) => {
            for molecule in molecules {
                check_molecule(toolkit, molecule)?;
            }
        }
        _ => {}
    }
    Ok(output)
}

fn check_molecule(toolkit: &str, molecule: &Molecule) -> Result<()> {
    molecule
        .validate()
        .map_err(|e| Error::backend(toolkit, format!("backend returned an invalid molecule: {e}")))
}

fn check_charges(toolkit: &str, molecule: &Molecule) -> Result<()> {
    match &molecule.partial_charges {
        Some(charges) if charges.len() == molecule.n_atoms() => Ok(()),
        Some(charges) => Err(Error::backend(
            toolkit,
            format!(
                "{} partial charges returned for {} atoms",
                charges.len(),
                molecule.n_atoms()
            ),
        )),
        None => Err(Error::backend(toolkit, "no partial charges were assigned")),
    }
}

fn check_bond_orders(toolkit: &str, molecule: &Molecule) -> Result<()> {
    match molecule
        .bonds
        .iter()
        .position(|b| b.fractional_bond_order.is_none())
    {
        Some(index) => Err(Error::backend(
            toolkit,
            format!("bond {index} has no fractional bond order"),
        )),
        None => Ok(()),
    }
}
