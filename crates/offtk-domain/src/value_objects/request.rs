//! Typed operation requests and outputs
//!
//! Each [`OperationRequest`] variant carries the arguments of exactly one
//! [`Operation`]. The registry never looks inside a request beyond
//! [`OperationRequest::operation`]; wrappers and backends own the payload.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value_objects::molecule::{Molecule, NativeMolecule};
use crate::value_objects::operation::Operation;

/// Chemical file formats passed through to toolkits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileFormat {
    /// MDL SD file
    Sdf,
    /// MDL mol file
    Mol,
    /// Tripos MOL2
    Mol2,
    /// Protein Data Bank
    Pdb,
    /// SMILES file
    Smi,
    /// Canonical SMILES file
    Can,
    /// Isomeric SMILES file
    Ism,
    /// OpenEye binary
    Oeb,
}

impl FileFormat {
    /// Upper-case format name
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Sdf => "SDF",
            FileFormat::Mol => "MOL",
            FileFormat::Mol2 => "MOL2",
            FileFormat::Pdb => "PDB",
            FileFormat::Smi => "SMI",
            FileFormat::Can => "CAN",
            FileFormat::Ism => "ISM",
            FileFormat::Oeb => "OEB",
        }
    }

    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "cannot infer file format of '{}' without an extension",
                    path.display()
                ))
            })?;
        ext.parse()
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SDF" | "SD" => Ok(FileFormat::Sdf),
            "MOL" | "MDL" => Ok(FileFormat::Mol),
            "MOL2" => Ok(FileFormat::Mol2),
            "PDB" => Ok(FileFormat::Pdb),
            "SMI" | "SMILES" => Ok(FileFormat::Smi),
            "CAN" => Ok(FileFormat::Can),
            "ISM" => Ok(FileFormat::Ism),
            "OEB" => Ok(FileFormat::Oeb),
            other => Err(Error::invalid_input(format!("unknown file format '{other}'"))),
        }
    }
}

/// Arguments of one toolkit operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum OperationRequest {
    /// Parse SMILES
    FromSmiles {
        /// SMILES string
        smiles: String,
        /// Accept undefined stereocenters instead of failing
        #[serde(default)]
        allow_undefined_stereo: bool,
        /// Require every hydrogen to be explicit in the SMILES
        #[serde(default)]
        hydrogens_are_explicit: bool,
    },
    /// Write SMILES
    ToSmiles {
        /// Molecule to write
        molecule: Molecule,
    },
    /// Read molecules from a file
    FromFile {
        /// Input path
        path: PathBuf,
        /// File format
        file_format: FileFormat,
        /// Accept undefined stereocenters instead of failing
        #[serde(default)]
        allow_undefined_stereo: bool,
    },
    /// Write a molecule to a file
    ToFile {
        /// Molecule to write
        molecule: Molecule,
        /// Output path
        path: PathBuf,
        /// File format
        file_format: FileFormat,
    },
    /// Convert from an OpenEye-native molecule
    #[serde(rename = "from_openeye")]
    FromOpenEye {
        /// Native molecule
        native: NativeMolecule,
        /// Accept undefined stereocenters instead of failing
        #[serde(default)]
        allow_undefined_stereo: bool,
    },
    /// Convert to an OpenEye-native molecule
    #[serde(rename = "to_openeye")]
    ToOpenEye {
        /// Molecule to convert
        molecule: Molecule,
    },
    /// Convert from an RDKit-native molecule
    FromRdkit {
        /// Native molecule
        native: NativeMolecule,
        /// Accept undefined stereocenters instead of failing
        #[serde(default)]
        allow_undefined_stereo: bool,
    },
    /// Convert to an RDKit-native molecule
    ToRdkit {
        /// Molecule to convert
        molecule: Molecule,
    },
    /// Generate conformers
    GenerateConformers {
        /// Molecule to embed
        molecule: Molecule,
        /// Maximum number of conformers
        n_conformers: usize,
        /// Drop existing conformers first
        #[serde(default = "default_true")]
        clear_existing: bool,
    },
    /// Assign partial charges with a named model
    ComputePartialCharges {
        /// Molecule to charge
        molecule: Molecule,
        /// Charge model; the toolkit default when absent
        #[serde(default)]
        charge_model: Option<String>,
    },
    /// Assign AM1-BCC partial charges
    ComputePartialChargesAm1bcc {
        /// Molecule to charge
        molecule: Molecule,
    },
    /// Assign fractional bond orders
    AssignFractionalBondOrders {
        /// Molecule to annotate
        molecule: Molecule,
        /// Bond order model; the toolkit default when absent
        #[serde(default)]
        bond_order_model: Option<String>,
    },
    /// Find rotatable bonds
    FindRotatableBonds {
        /// Molecule to search
        molecule: Molecule,
        /// SMARTS patterns of groups whose bonds are ignored
        #[serde(default)]
        ignore_functional_groups: Vec<String>,
    },
}

fn default_true() -> bool {
    true
}

impl OperationRequest {
    /// The operation these arguments belong to
    pub fn operation(&self) -> Operation {
        match self {
            OperationRequest::FromSmiles { .. } => Operation::FromSmiles,
            OperationRequest::ToSmiles { .. } => Operation::ToSmiles,
            OperationRequest::FromFile { .. } => Operation::FromFile,
            OperationRequest::ToFile { .. } => Operation::ToFile,
            OperationRequest::FromOpenEye { .. } => Operation::FromOpenEye,
            OperationRequest::ToOpenEye { .. } => Operation::ToOpenEye,
            OperationRequest::FromRdkit { .. } => Operation::FromRdkit,
            OperationRequest::ToRdkit { .. } => Operation::ToRdkit,
            OperationRequest::GenerateConformers { .. } => Operation::GenerateConformers,
            OperationRequest::ComputePartialCharges { .. } => Operation::ComputePartialCharges,
            OperationRequest::ComputePartialChargesAm1bcc { .. } => {
                Operation::ComputePartialChargesAm1bcc
            }
            OperationRequest::AssignFractionalBondOrders { .. } => {
                Operation::AssignFractionalBondOrders
            }
            OperationRequest::FindRotatableBonds { .. } => Operation::FindRotatableBonds,
        }
    }

    /// Shorthand for a strict `from_smiles` request
    pub fn from_smiles<S: Into<String>>(smiles: S) -> Self {
        OperationRequest::FromSmiles {
            smiles: smiles.into(),
            allow_undefined_stereo: false,
            hydrogens_are_explicit: false,
        }
    }

    /// Shorthand for a `to_smiles` request
    pub fn to_smiles(molecule: Molecule) -> Self {
        OperationRequest::ToSmiles { molecule }
    }
}

/// Result of one toolkit operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OperationOutput {
    /// A single (new or updated) molecule
    Molecule(Molecule),
    /// Several molecules, e.g. one per record of a multi-record file
    Molecules(Vec<Molecule>),
    /// A SMILES string
    Smiles(String),
    /// A toolkit-native molecule
    Native(NativeMolecule),
    /// Atom index pairs of rotatable bonds
    RotatableBonds(Vec<(usize, usize)>),
    /// The operation wrote its result to a file
    Written,
}

impl OperationOutput {
    /// Output kind name, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            OperationOutput::Molecule(_) => "molecule",
            OperationOutput::Molecules(_) => "molecules",
            OperationOutput::Smiles(_) => "smiles",
            OperationOutput::Native(_) => "native",
            OperationOutput::RotatableBonds(_) => "rotatable_bonds",
            OperationOutput::Written => "written",
        }
    }

    /// Unwrap a single molecule
    pub fn into_molecule(self) -> Result<Molecule> {
        match self {
            OperationOutput::Molecule(molecule) => Ok(molecule),
            other => Err(Error::UnexpectedOutput {
                expected: "molecule",
                actual: other.kind(),
            }),
        }
    }

    /// Unwrap a molecule list; a single molecule becomes a one-element list
    pub fn into_molecules(self) -> Result<Vec<Molecule>> {
        match self {
            OperationOutput::Molecules(molecules) => Ok(molecules),
            OperationOutput::Molecule(molecule) => Ok(vec![molecule]),
            other => Err(Error::UnexpectedOutput {
                expected: "molecules",
                actual: other.kind(),
            }),
        }
    }

    /// Unwrap a SMILES string
    pub fn into_smiles(self) -> Result<String> {
        match self {
            OperationOutput::Smiles(smiles) => Ok(smiles),
            other => Err(Error::UnexpectedOutput {
                expected: "smiles",
                actual: other.kind(),
            }),
        }
    }

    /// Unwrap a native molecule
    pub fn into_native(self) -> Result<NativeMolecule> {
        match self {
            OperationOutput::Native(native) => Ok(native),
            other => Err(Error::UnexpectedOutput {
                expected: "native",
                actual: other.kind(),
            }),
        }
    }

    /// Unwrap rotatable bond index pairs
    pub fn into_rotatable_bonds(self) -> Result<Vec<(usize, usize)>> {
        match self {
            OperationOutput::RotatableBonds(bonds) => Ok(bonds),
            other => Err(Error::UnexpectedOutput {
                expected: "rotatable_bonds",
                actual: other.kind(),
            }),
        }
    }
}
