//! Molecule Service
//!
//! Typed molecule operations on top of a [`ToolkitDispatch`] target. Each
//! method builds the request, dispatches it and unwraps the expected output
//! kind; toolkit errors are returned untouched.

use std::path::Path;

use offtk_domain::constants::{TOOLKIT_OPENEYE, TOOLKIT_RDKIT};
use offtk_domain::error::{Error, Result};
use offtk_domain::value_objects::{
    FileFormat, Molecule, NativeMolecule, Operation, OperationRequest,
};
use tracing::debug;

use crate::domain_services::dispatch::ToolkitDispatch;

/// Molecule operations routed through a registry or a single wrapper
///
/// # Example
///
/// ```ignore
/// let service = MoleculeService::new(&registry);
/// let ethane = service.from_smiles("CC").await?;
/// let ethane = service.generate_conformers(ethane, 1).await?;
/// let charged = service.compute_partial_charges_am1bcc(ethane).await?;
/// ```
pub struct MoleculeService<'a> {
    dispatch: &'a dyn ToolkitDispatch,
}

impl<'a> MoleculeService<'a> {
    /// Create a service over `dispatch`
    pub fn new(dispatch: &'a dyn ToolkitDispatch) -> Self {
        Self { dispatch }
    }

    /// Parse SMILES, rejecting undefined stereochemistry
    pub async fn from_smiles(&self, smiles: &str) -> Result<Molecule> {
        self.dispatch
            .dispatch(OperationRequest::from_smiles(smiles))
            .await?
            .into_molecule()
    }

    /// Parse SMILES with explicit stereo and hydrogen handling
    pub async fn from_smiles_with(
        &self,
        smiles: &str,
        allow_undefined_stereo: bool,
        hydrogens_are_explicit: bool,
    ) -> Result<Molecule> {
        self.dispatch
            .dispatch(OperationRequest::FromSmiles {
                smiles: smiles.to_string(),
                allow_undefined_stereo,
                hydrogens_are_explicit,
            })
            .await?
            .into_molecule()
    }

    /// Write canonical isomeric SMILES
    pub async fn to_smiles(&self, molecule: &Molecule) -> Result<String> {
        self.dispatch
            .dispatch(OperationRequest::to_smiles(molecule.clone()))
            .await?
            .into_smiles()
    }

    /// Read every molecule of a file; the format is taken from the extension
    pub async fn from_file(&self, path: &Path) -> Result<Vec<Molecule>> {
        let file_format = FileFormat::from_path(path)?;
        let molecules = self
            .dispatch
            .dispatch(OperationRequest::FromFile {
                path: path.to_path_buf(),
                file_format,
                allow_undefined_stereo: false,
            })
            .await?
            .into_molecules()?;
        debug!(path = %path.display(), count = molecules.len(), "Read molecules");
        Ok(molecules)
    }

    /// Write a molecule to a file in the given format
    pub async fn to_file(
        &self,
        molecule: &Molecule,
        path: &Path,
        file_format: FileFormat,
    ) -> Result<()> {
        self.dispatch
            .dispatch(OperationRequest::ToFile {
                molecule: molecule.clone(),
                path: path.to_path_buf(),
                file_format,
            })
            .await?;
        Ok(())
    }

    /// Convert to the native object of the toolkit serving `operation`
    ///
    /// `operation` must be [`Operation::ToOpenEye`] or [`Operation::ToRdkit`].
    pub async fn to_native(
        &self,
        molecule: &Molecule,
        operation: Operation,
    ) -> Result<NativeMolecule> {
        let molecule = molecule.clone();
        let request = match operation {
            Operation::ToOpenEye => OperationRequest::ToOpenEye { molecule },
            Operation::ToRdkit => OperationRequest::ToRdkit { molecule },
            other => {
                return Err(Error::invalid_input(format!(
                    "'{other}' is not a native conversion"
                )));
            }
        };
        self.dispatch.dispatch(request).await?.into_native()
    }

    /// Convert a native object back; the toolkit tag selects the operation
    pub async fn from_native(&self, native: NativeMolecule) -> Result<Molecule> {
        let request = match native.toolkit.as_str() {
            TOOLKIT_OPENEYE => OperationRequest::FromOpenEye {
                native,
                allow_undefined_stereo: false,
            },
            TOOLKIT_RDKIT => OperationRequest::FromRdkit {
                native,
                allow_undefined_stereo: false,
            },
            other => {
                return Err(Error::invalid_input(format!(
                    "no converter for native molecules of toolkit '{other}'"
                )));
            }
        };
        self.dispatch.dispatch(request).await?.into_molecule()
    }

    /// Replace the molecule's conformers with up to `n_conformers` new ones
    pub async fn generate_conformers(
        &self,
        molecule: Molecule,
        n_conformers: usize,
    ) -> Result<Molecule> {
        self.dispatch
            .dispatch(OperationRequest::GenerateConformers {
                molecule,
                n_conformers,
                clear_existing: true,
            })
            .await?
            .into_molecule()
    }

    /// Assign partial charges with a named model (toolkit default if `None`)
    pub async fn compute_partial_charges(
        &self,
        molecule: Molecule,
        charge_model: Option<&str>,
    ) -> Result<Molecule> {
        self.dispatch
            .dispatch(OperationRequest::ComputePartialCharges {
                molecule,
                charge_model: charge_model.map(str::to_string),
            })
            .await?
            .into_molecule()
    }

    /// Assign AM1-BCC partial charges
    pub async fn compute_partial_charges_am1bcc(&self, molecule: Molecule) -> Result<Molecule> {
        self.dispatch
            .dispatch(OperationRequest::ComputePartialChargesAm1bcc { molecule })
            .await?
            .into_molecule()
    }

    /// Assign fractional bond orders (toolkit default model if `None`)
    pub async fn assign_fractional_bond_orders(
        &self,
        molecule: Molecule,
        bond_order_model: Option<&str>,
    ) -> Result<Molecule> {
        self.dispatch
            .dispatch(OperationRequest::AssignFractionalBondOrders {
                molecule,
                bond_order_model: bond_order_model.map(str::to_string),
            })
            .await?
            .into_molecule()
    }

    /// Rotatable bonds as atom index pairs, ignoring the given SMARTS groups
    pub async fn find_rotatable_bonds(
        &self,
        molecule: &Molecule,
        ignore_functional_groups: &[&str],
    ) -> Result<Vec<(usize, usize)>> {
        self.dispatch
            .dispatch(OperationRequest::FindRotatableBonds {
                molecule: molecule.clone(),
                ignore_functional_groups: ignore_functional_groups
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            })
            .await?
            .into_rotatable_bonds()
    }
}
