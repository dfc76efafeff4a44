//! Toolkit operations
//!
//! The closed set of capabilities a toolkit wrapper can declare. Operation
//! names are plain strings only at the boundary (configuration, CLI, bridge
//! protocol); everything inside the registry dispatches on [`Operation`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A backend-delegated unit of work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Parse a SMILES string into a molecule
    FromSmiles,
    /// Write a molecule as canonical isomeric SMILES
    ToSmiles,
    /// Read molecules from a file
    FromFile,
    /// Write a molecule to a file
    ToFile,
    /// Convert an OpenEye-native molecule
    #[serde(rename = "from_openeye")]
    FromOpenEye,
    /// Produce an OpenEye-native molecule
    #[serde(rename = "to_openeye")]
    ToOpenEye,
    /// Convert an RDKit-native molecule
    FromRdkit,
    /// Produce an RDKit-native molecule
    ToRdkit,
    /// Generate 3D conformers
    GenerateConformers,
    /// Assign partial charges with a named charge model
    ComputePartialCharges,
    /// Assign AM1-BCC partial charges
    ComputePartialChargesAm1bcc,
    /// Assign fractional (Wiberg) bond orders
    AssignFractionalBondOrders,
    /// Find rotatable bonds
    FindRotatableBonds,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Operation; 13] = [
        Operation::FromSmiles,
        Operation::ToSmiles,
        Operation::FromFile,
        Operation::ToFile,
        Operation::FromOpenEye,
        Operation::ToOpenEye,
        Operation::FromRdkit,
        Operation::ToRdkit,
        Operation::GenerateConformers,
        Operation::ComputePartialCharges,
        Operation::ComputePartialChargesAm1bcc,
        Operation::AssignFractionalBondOrders,
        Operation::FindRotatableBonds,
    ];

    /// Boundary name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FromSmiles => "from_smiles",
            Operation::ToSmiles => "to_smiles",
            Operation::FromFile => "from_file",
            Operation::ToFile => "to_file",
            Operation::FromOpenEye => "from_openeye",
            Operation::ToOpenEye => "to_openeye",
            Operation::FromRdkit => "from_rdkit",
            Operation::ToRdkit => "to_rdkit",
            Operation::GenerateConformers => "generate_conformers",
            Operation::ComputePartialCharges => "compute_partial_charges",
            Operation::ComputePartialChargesAm1bcc => "compute_partial_charges_am1bcc",
            Operation::AssignFractionalBondOrders => "assign_fractional_bond_orders",
            Operation::FindRotatableBonds => "find_rotatable_bonds",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| Error::UnknownOperation {
                name: s.to_string(),
            })
    }
}
