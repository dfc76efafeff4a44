//! Provider Constants
//!
//! Constants specific to toolkit wrapper implementations. Toolkit names live
//! in `offtk-domain`.

// ============================================================================
// BRIDGE BACKEND CONSTANTS
// ============================================================================

/// Bridge program used when none is configured
pub const DEFAULT_BRIDGE_COMMAND: &str = "offtk-bridge";

/// Per-call bridge timeout in seconds (AM1-BCC on large molecules is slow)
pub const DEFAULT_BRIDGE_TIMEOUT_SECS: u64 = 300;

/// Flag passing the toolkit name to the bridge
pub const BRIDGE_TOOLKIT_FLAG: &str = "--toolkit";

/// Bytes of stderr kept in bridge failure messages
pub const BRIDGE_STDERR_TAIL_BYTES: usize = 2048;

// ============================================================================
// AVAILABILITY PROBE CONSTANTS
// ============================================================================

/// Environment variable naming the OpenEye license file
pub const OE_LICENSE_ENV: &str = "OE_LICENSE";

/// Environment variable naming the AmberTools installation root
pub const AMBERHOME_ENV: &str = "AMBERHOME";

/// AmberTools charge fitting driver
pub const ANTECHAMBER_EXECUTABLE: &str = "antechamber";

/// AmberTools semi-empirical QM engine
pub const SQM_EXECUTABLE: &str = "sqm";

// ============================================================================
// OPENEYE CONSTANTS
// ============================================================================

/// Charge models offered by OpenEye quacpac
pub const OPENEYE_CHARGE_MODELS: [&str; 6] = [
    "noop",
    "mmff",
    "mmff94",
    "am1bcc",
    "am1bccnosymspt",
    "am1bccelf10",
];

/// OpenEye charge model used when none is requested
pub const OPENEYE_DEFAULT_CHARGE_MODEL: &str = "am1bcc";

/// Charge models that do not read conformer geometry
pub const OPENEYE_GEOMETRY_FREE_CHARGE_MODELS: [&str; 1] = ["noop"];

/// Bond order models offered by OpenEye
pub const OPENEYE_BOND_ORDER_MODELS: [&str; 2] = ["am1-wiberg", "pm3-wiberg"];

// ============================================================================
// AMBERTOOLS CONSTANTS
// ============================================================================

/// Charge methods accepted by antechamber
pub const AMBERTOOLS_CHARGE_MODELS: [&str; 5] = ["gas", "mul", "bcc", "cm1", "cm2"];

/// AmberTools charge model used when none is requested
pub const AMBERTOOLS_DEFAULT_CHARGE_MODEL: &str = "bcc";

/// Bond order models offered by sqm
pub const AMBERTOOLS_BOND_ORDER_MODELS: [&str; 1] = ["am1-wiberg"];

/// Bond order model used when none is requested
pub const DEFAULT_BOND_ORDER_MODEL: &str = "am1-wiberg";
