//! Toolkit Wrapper Registry
//!
//! Auto-registration system for toolkit wrappers using linkme distributed slices.
//! Wrappers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use offtk_domain::error::{Error, Result};
use offtk_domain::ports::ToolkitWrapper;
use tracing::{debug, warn};

/// Configuration for toolkit wrapper creation
///
/// Every setting any wrapper reads. Wrappers use what they need and ignore
/// the rest.
#[derive(Debug, Clone, Default)]
pub struct ToolkitWrapperConfig {
    /// Program executed by the native bridge backend
    pub bridge_command: Option<String>,
    /// Extra arguments placed before `--toolkit <name>`
    pub bridge_args: Vec<String>,
    /// Per-call timeout of the bridge backend
    pub timeout: Option<Duration>,
    /// OpenEye license file (overrides `OE_LICENSE`)
    pub license_path: Option<PathBuf>,
    /// Directory holding the AmberTools executables
    pub ambertools_bin_dir: Option<PathBuf>,
}

impl ToolkitWrapperConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bridge program
    pub fn with_bridge_command(mut self, command: impl Into<String>) -> Self {
        self.bridge_command = Some(command.into());
        self
    }

    /// Add a bridge argument
    pub fn with_bridge_arg(mut self, arg: impl Into<String>) -> Self {
        self.bridge_args.push(arg.into());
        self
    }

    /// Set the bridge timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the OpenEye license file
    pub fn with_license_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.license_path = Some(path.into());
        self
    }

    /// Set the AmberTools bin directory
    pub fn with_ambertools_bin_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.ambertools_bin_dir = Some(path.into());
        self
    }
}

/// Registry entry for toolkit wrappers
///
/// Each wrapper implementation registers itself with this entry using
/// `#[linkme::distributed_slice(TOOLKIT_WRAPPERS)]`. The entry contains
/// metadata and a factory function to create wrapper instances.
pub struct ToolkitWrapperEntry {
    /// Unique toolkit name (e.g., "openeye", "rdkit")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Position in the default precedence order (lower first)
    pub default_precedence: u16,
    /// Factory function to create a wrapper instance
    pub factory: fn(&ToolkitWrapperConfig) -> Result<Arc<dyn ToolkitWrapper>>,
}

// Auto-collection via linkme distributed slices - wrappers submit entries at compile time
#[linkme::distributed_slice]
pub static TOOLKIT_WRAPPERS: [ToolkitWrapperEntry] = [..];

/// Registered entries in default precedence order
fn ordered_entries() -> Vec<&'static ToolkitWrapperEntry> {
    let mut entries: Vec<_> = TOOLKIT_WRAPPERS.iter().collect();
    entries.sort_by_key(|e| (e.default_precedence, e.name));
    entries
}

/// Resolve a toolkit wrapper by name from the registry
///
/// Searches the registry for an entry matching `name` and creates an
/// instance using the entry's factory function. The wrapper is returned
/// whether or not it is available.
///
/// # Example
///
/// ```ignore
/// let config = ToolkitWrapperConfig::new().with_bridge_command("offtk-bridge");
/// let rdkit = resolve_toolkit("rdkit", &config)?;
/// ```
pub fn resolve_toolkit(
    name: &str,
    config: &ToolkitWrapperConfig,
) -> Result<Arc<dyn ToolkitWrapper>> {
    let wanted = name.trim().to_ascii_lowercase();

    for entry in TOOLKIT_WRAPPERS {
        if entry.name == wanted {
            return (entry.factory)(config);
        }
    }

    Err(Error::UnknownToolkit {
        name: name.to_string(),
        known: ordered_entries()
            .iter()
            .map(|e| e.name.to_string())
            .collect(),
    })
}

/// List all registered toolkit wrappers
///
/// Returns (name, description) tuples in default precedence order.
/// Useful for CLI help and config validation.
pub fn list_toolkits() -> Vec<(&'static str, &'static str)> {
    ordered_entries()
        .into_iter()
        .map(|e| (e.name, e.description))
        .collect()
}

/// Build every registered wrapper and keep the available ones
///
/// This is the explicit replacement for import-time auto-registration: call
/// it once while constructing a registry and pass the result in. Entries
/// whose factory fails are logged and skipped.
pub fn discover_toolkits(config: &ToolkitWrapperConfig) -> Vec<Arc<dyn ToolkitWrapper>> {
    let mut discovered = Vec::new();

    for entry in ordered_entries() {
        match (entry.factory)(config) {
            Ok(toolkit) => {
                let availability = toolkit.availability();
                if availability.is_available() {
                    debug!(toolkit = entry.name, "Discovered available toolkit");
                    discovered.push(toolkit);
                } else {
                    debug!(
                        toolkit = entry.name,
                        status = %availability,
                        "Toolkit not available; not discovered"
                    );
                }
            }
            Err(e) => {
                warn!(toolkit = entry.name, error = %e, "Toolkit factory failed");
            }
        }
    }

    discovered
}
