//! Toolkit Wrapper Implementations
//!
//! Adapt external cheminformatics engines to the fixed capability interface.
//! Every wrapper validates arguments before delegating to its backend and
//! validates the results it gets back.
//!
//! ## Available Wrappers
//!
//! | Wrapper | Default precedence | Needs |
//! |---------|--------------------|-------|
//! | OpenEyeToolkitWrapper | 10 | bridge, license file |
//! | RDKitToolkitWrapper | 20 | bridge |
//! | AmberToolsToolkitWrapper | 30 | bridge, antechamber, sqm |

#[cfg(feature = "toolkit-ambertools")]
pub mod ambertools;
pub(crate) mod common;
#[cfg(feature = "toolkit-openeye")]
pub mod openeye;
#[cfg(feature = "toolkit-rdkit")]
pub mod rdkit;

// Re-export for convenience
#[cfg(feature = "toolkit-ambertools")]
pub use ambertools::AmberToolsToolkitWrapper;
#[cfg(feature = "toolkit-openeye")]
pub use openeye::OpenEyeToolkitWrapper;
#[cfg(feature = "toolkit-rdkit")]
pub use rdkit::RDKitToolkitWrapper;
