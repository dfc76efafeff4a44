//! # offtk
//!
//! Toolkit registry for cheminformatics backends.
//!
//! Molecule operations are requested by capability name and routed to the
//! first registered toolkit wrapper that implements them. Wrappers for
//! OpenEye, RDKit and AmberTools drive the native libraries through a
//! subprocess bridge.
//!
//! ## Example
//!
//! ```ignore
//! use offtk::application::MoleculeService;
//! use offtk::infrastructure::{ConfigLoader, build_toolkit_registry};
//!
//! let config = ConfigLoader::new().load()?;
//! let registry = build_toolkit_registry(&config)?;
//! let service = MoleculeService::new(&registry);
//!
//! let ethanol = service.from_smiles("CCO").await?;
//! let ethanol = service.generate_conformers(ethanol, 1).await?;
//! let charged = service.compute_partial_charges(ethanol, Some("am1bcc")).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - molecule facade, operations, wrapper/backend ports, errors
//! - `application` - toolkit registry, wrapper entries, molecule service
//! - `providers` - OpenEye, RDKit and AmberTools wrappers, bridge backend
//! - `infrastructure` - configuration, logging, registry bootstrap
//! - [`cli`] - the `offtk` command line

pub mod cli;

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use offtk_domain::*;
}

/// Application layer - registry and molecule service
pub mod application {
    pub use offtk_application::*;
}

/// Toolkit wrappers and the bridge backend
pub mod providers {
    pub use offtk_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use offtk_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{MoleculeService, ToolkitRegistry};
pub use infrastructure::{AppConfig, ConfigLoader, build_toolkit_registry};
