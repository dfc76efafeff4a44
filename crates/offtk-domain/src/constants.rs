//! Domain layer constants

// ============================================================================
// TOOLKIT NAMES
// ============================================================================

/// Registry name of the OpenEye wrapper
pub const TOOLKIT_OPENEYE: &str = "openeye";

/// Registry name of the RDKit wrapper
pub const TOOLKIT_RDKIT: &str = "rdkit";

/// Registry name of the AmberTools wrapper
pub const TOOLKIT_AMBERTOOLS: &str = "ambertools";

/// Default precedence used when nothing else is configured
pub const DEFAULT_TOOLKIT_PRECEDENCE: [&str; 3] =
    [TOOLKIT_OPENEYE, TOOLKIT_RDKIT, TOOLKIT_AMBERTOOLS];

// ============================================================================
// OPERATION DEFAULTS
// ============================================================================

/// Default number of conformers requested by the molecule service
pub const DEFAULT_CONFORMER_COUNT: usize = 1;
