//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::toolkits::{AmberToolsConfig, BridgeConfig, OpenEyeConfig, ToolkitsConfig};

/// Root configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [toolkits]
/// precedence = ["rdkit", "ambertools"]
///
/// [toolkits.bridge]
/// command = "/opt/offtk/bin/offtk-bridge"
/// timeout_secs = 600
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Toolkit registry configuration
    pub toolkits: ToolkitsConfig,
}
