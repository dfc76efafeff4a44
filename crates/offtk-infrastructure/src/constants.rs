//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "offtk.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "offtk";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "OFFTK";

/// Separator between the prefix and nested keys (`OFFTK__TOOLKITS__PRECEDENCE`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "OFFTK_LOG";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "offtk";
