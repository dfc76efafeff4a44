//! Registry Bootstrap
//!
//! Composition root turning configuration into a ready `ToolkitRegistry`.
//!
//! ```text
//! AppConfig → ToolkitWrapperConfig → linkme entries → ToolkitRegistry
//! ```

use std::time::Duration;

use offtk_application::domain_services::ToolkitRegistry;
use offtk_application::ports::registry::ToolkitWrapperConfig;
use offtk_domain::error::Result;
use tracing::info;

use crate::config::{AppConfig, ToolkitsConfig};

/// Map toolkit settings onto the factory configuration
pub fn wrapper_config(config: &ToolkitsConfig) -> ToolkitWrapperConfig {
    let mut wrapper = ToolkitWrapperConfig::new()
        .with_bridge_command(config.bridge.command.clone())
        .with_timeout(Duration::from_secs(config.bridge.timeout_secs));
    for arg in &config.bridge.args {
        wrapper = wrapper.with_bridge_arg(arg.clone());
    }
    if let Some(path) = &config.openeye.license_path {
        wrapper = wrapper.with_license_path(path.clone());
    }
    if let Some(dir) = &config.ambertools.bin_dir {
        wrapper = wrapper.with_ambertools_bin_dir(dir.clone());
    }
    wrapper
}

/// Build the registry described by `config`
///
/// Unavailable toolkits are left out; an environment without any toolkit
/// yields an empty registry rather than an error.
pub fn build_toolkit_registry(config: &AppConfig) -> Result<ToolkitRegistry> {
    let toolkits = &config.toolkits;
    let registry = ToolkitRegistry::from_precedence_names(
        toolkits.precedence.as_slice(),
        &wrapper_config(toolkits),
        toolkits.register_discovered,
    )?;

    info!(
        registered = ?registry.toolkit_names(),
        requested = ?toolkits.precedence,
        "Toolkit registry ready"
    );
    Ok(registry)
}
