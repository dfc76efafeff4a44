//! Toolkit registry configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use offtk_domain::constants::DEFAULT_TOOLKIT_PRECEDENCE;
use offtk_providers::constants::{DEFAULT_BRIDGE_COMMAND, DEFAULT_BRIDGE_TIMEOUT_SECS};

/// Toolkit registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitsConfig {
    /// Toolkit names in precedence order
    pub precedence: Vec<String>,

    /// Append every other available toolkit after `precedence`
    pub register_discovered: bool,

    /// Native bridge settings
    pub bridge: BridgeConfig,

    /// OpenEye settings
    pub openeye: OpenEyeConfig,

    /// AmberTools settings
    pub ambertools: AmberToolsConfig,
}

impl Default for ToolkitsConfig {
    fn default() -> Self {
        Self {
            precedence: DEFAULT_TOOLKIT_PRECEDENCE
                .iter()
                .map(|name| name.to_string())
                .collect(),
            register_discovered: false,
            bridge: BridgeConfig::default(),
            openeye: OpenEyeConfig::default(),
            ambertools: AmberToolsConfig::default(),
        }
    }
}

/// Bridge program settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Program hosting the native toolkits
    pub command: String,

    /// Arguments placed before `--toolkit <name>`
    pub args: Vec<String>,

    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_BRIDGE_COMMAND.to_string(),
            args: Vec::new(),
            timeout_secs: DEFAULT_BRIDGE_TIMEOUT_SECS,
        }
    }
}

/// OpenEye settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenEyeConfig {
    /// License file; `OE_LICENSE` is used when unset
    pub license_path: Option<PathBuf>,
}

/// AmberTools settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmberToolsConfig {
    /// Directory containing antechamber and sqm; `$AMBERHOME/bin` or `PATH` when unset
    pub bin_dir: Option<PathBuf>,
}
