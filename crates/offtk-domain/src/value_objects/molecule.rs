//! Molecule facade value objects
//!
//! Plain data carried between callers and toolkit backends. Nothing here
//! perceives chemistry: stereochemistry, aromaticity and bond orders are
//! whatever the backend reported.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cartesian coordinates of one conformer, in angstrom, one entry per atom
pub type Conformer = Vec<[f64; 3]>;

/// Tetrahedral stereo label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtomStereo {
    /// Rectus
    R,
    /// Sinister
    S,
}

/// Double bond stereo label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondStereo {
    /// Entgegen
    E,
    /// Zusammen
    Z,
}

/// An atom of a [`Molecule`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Atomic number
    pub atomic_number: u8,
    /// Formal charge in elementary charge units
    #[serde(default)]
    pub formal_charge: i8,
    /// Aromaticity flag
    #[serde(default)]
    pub is_aromatic: bool,
    /// Stereo label, if the atom is a defined stereocenter
    #[serde(default)]
    pub stereochemistry: Option<AtomStereo>,
    /// Optional atom name
    #[serde(default)]
    pub name: String,
}

impl Atom {
    /// Create a neutral, non-aromatic atom
    pub fn new(atomic_number: u8) -> Self {
        Self {
            atomic_number,
            formal_charge: 0,
            is_aromatic: false,
            stereochemistry: None,
            name: String::new(),
        }
    }

    /// Set the formal charge
    pub fn with_formal_charge(mut self, formal_charge: i8) -> Self {
        self.formal_charge = formal_charge;
        self
    }
}

/// A bond of a [`Molecule`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// Index of the first atom
    pub atom1: usize,
    /// Index of the second atom
    pub atom2: usize,
    /// Integer bond order
    pub bond_order: u8,
    /// Aromaticity flag
    #[serde(default)]
    pub is_aromatic: bool,
    /// Stereo label, if the bond is a defined stereo double bond
    #[serde(default)]
    pub stereochemistry: Option<BondStereo>,
    /// Fractional bond order, once assigned by a toolkit
    #[serde(default)]
    pub fractional_bond_order: Option<f64>,
}

impl Bond {
    /// Create a bond between two atom indices
    pub fn new(atom1: usize, atom2: usize, bond_order: u8) -> Self {
        Self {
            atom1,
            atom2,
            bond_order,
            is_aromatic: false,
            stereochemistry: None,
            fractional_bond_order: None,
        }
    }
}

/// Molecule data object on which toolkit operations are invoked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    /// Molecule name (title)
    #[serde(default)]
    pub name: String,
    /// Atoms
    #[serde(default)]
    pub atoms: Vec<Atom>,
    /// Bonds
    #[serde(default)]
    pub bonds: Vec<Bond>,
    /// Conformers
    #[serde(default)]
    pub conformers: Vec<Conformer>,
    /// Partial charges in elementary charge units, one per atom
    #[serde(default)]
    pub partial_charges: Option<Vec<f64>>,
    /// Free-form properties (SD data tags)
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Molecule {
    /// Create an empty molecule
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the molecule name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Append an atom and return its index
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Append a bond between two existing atoms and return its index
    pub fn add_bond(&mut self, bond: Bond) -> Result<usize> {
        check_bond(&bond, self.atoms.len())?;
        self.bonds.push(bond);
        Ok(self.bonds.len() - 1)
    }

    /// Append a conformer with one coordinate per atom
    pub fn add_conformer(&mut self, conformer: Conformer) -> Result<()> {
        if conformer.len() != self.atoms.len() {
            return Err(Error::invalid_molecule(format!(
                "conformer has {} coordinates for {} atoms",
                conformer.len(),
                self.atoms.len()
            )));
        }
        self.conformers.push(conformer);
        Ok(())
    }

    /// Set partial charges, one per atom
    pub fn set_partial_charges(&mut self, charges: Vec<f64>) -> Result<()> {
        if charges.len() != self.atoms.len() {
            return Err(Error::invalid_molecule(format!(
                "{} partial charges for {} atoms",
                charges.len(),
                self.atoms.len()
            )));
        }
        self.partial_charges = Some(charges);
        Ok(())
    }

    /// Number of atoms
    pub fn n_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds
    pub fn n_bonds(&self) -> usize {
        self.bonds.len()
    }

    /// Number of conformers
    pub fn n_conformers(&self) -> usize {
        self.conformers.len()
    }

    /// Sum of formal charges
    pub fn total_charge(&self) -> i32 {
        self.atoms.iter().map(|a| i32::from(a.formal_charge)).sum()
    }

    /// Check the per-atom invariants of conformers and partial charges
    pub fn validate(&self) -> Result<()> {
        let n_atoms = self.atoms.len();
        if let Some(i) = self.conformers.iter().position(|c| c.len() != n_atoms) {
            return Err(Error::invalid_molecule(format!(
                "conformer {i} does not have {n_atoms} coordinates"
            )));
        }
        if let Some(charges) = &self.partial_charges {
            if charges.len() != n_atoms {
                return Err(Error::invalid_molecule(format!(
                    "{} partial charges for {n_atoms} atoms",
                    charges.len()
                )));
            }
        }
        self.bonds
            .iter()
            .try_for_each(|bond| check_bond(bond, n_atoms))
    }
}

fn check_bond(bond: &Bond, n_atoms: usize) -> Result<()> {
    if bond.atom1 >= n_atoms || bond.atom2 >= n_atoms {
        return Err(Error::invalid_molecule(format!(
            "bond {}-{} references an atom outside 0..{n_atoms}",
            bond.atom1, bond.atom2
        )));
    }
    if bond.atom1 == bond.atom2 {
        return Err(Error::invalid_molecule(format!(
            "bond connects atom {} to itself",
            bond.atom1
        )));
    }
    Ok(())
}

/// Toolkit-native molecule handle
///
/// Opaque to everything but the toolkit named in `toolkit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeMolecule {
    /// Toolkit that produced the payload
    pub toolkit: String,
    /// Serialized native object
    pub payload: serde_json::Value,
}
