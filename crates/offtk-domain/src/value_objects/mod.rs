//! Value objects exchanged with toolkit wrappers

pub mod molecule;
pub mod operation;
pub mod request;

pub use molecule::{Atom, AtomStereo, Bond, BondStereo, Conformer, Molecule, NativeMolecule};
pub use operation::Operation;
pub use request::{FileFormat, OperationOutput, OperationRequest};
