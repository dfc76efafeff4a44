//! Command line interface
//!
//! Commands write plain text to the given writer so they can be exercised
//! without a terminal. Logging goes to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use offtk_application::MoleculeService;
use offtk_application::ports::registry::{list_toolkits, resolve_toolkit};
use offtk_infrastructure::bootstrap::{build_toolkit_registry, wrapper_config};
use offtk_infrastructure::config::{AppConfig, ConfigLoader, ConfigSource};
use tracing::debug;

/// Command line interface for offtk
#[derive(Parser, Debug)]
#[command(name = "offtk")]
#[command(about = "Dispatch molecule operations to OpenEye, RDKit and AmberTools")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List known toolkits, their availability and the registered precedence
    Toolkits,

    /// Show which registered toolkit serves an operation
    Resolve {
        /// Operation name, e.g. `compute_partial_charges`
        operation: String,
    },

    /// Parse SMILES and write it back through the registry
    Smiles {
        /// Input SMILES
        smiles: String,

        /// Accept undefined stereocenters
        #[arg(long)]
        allow_undefined_stereo: bool,
    },

    /// Generate conformers and compute partial charges
    Charges {
        /// Input SMILES
        smiles: String,

        /// Charge model; the serving toolkit's default when omitted
        #[arg(short, long)]
        model: Option<String>,

        /// Number of conformers to generate first
        #[arg(long, default_value_t = 1)]
        conformers: usize,
    },
}

/// Load configuration from `path`, or from the default locations
///
/// Nothing is logged; report the returned source once logging is up.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(AppConfig, ConfigSource)> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader
        .load_with_source()
        .context("Failed to load configuration")
}

/// Run `command` against the registry described by `config`
pub async fn execute(
    command: &Command,
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Toolkits => list(config, out),
        Command::Resolve { operation } => {
            let registry = build_toolkit_registry(config)?;
            let resolved = registry.resolve_named(operation)?;
            writeln!(out, "{} -> {}", resolved.operation(), resolved.toolkit_name())?;
            Ok(())
        }
        Command::Smiles {
            smiles,
            allow_undefined_stereo,
        } => {
            let registry = build_toolkit_registry(config)?;
            let service = MoleculeService::new(&registry);
            let molecule = service
                .from_smiles_with(smiles, *allow_undefined_stereo, false)
                .await?;
            writeln!(out, "{}", service.to_smiles(&molecule).await?)?;
            Ok(())
        }
        Command::Charges {
            smiles,
            model,
            conformers,
        } => {
            let registry = build_toolkit_registry(config)?;
            let service = MoleculeService::new(&registry);
            let molecule = service.from_smiles(smiles).await?;
            let molecule = service.generate_conformers(molecule, *conformers).await?;
            debug!(conformers = molecule.n_conformers(), "Conformers generated");
            let molecule = service
                .compute_partial_charges(molecule, model.as_deref())
                .await?;

            let charges = molecule
                .partial_charges
                .as_deref()
                .context("toolkit returned a molecule without partial charges")?;
            for (index, (atom, charge)) in molecule.atoms.iter().zip(charges).enumerate() {
                writeln!(out, "{index:>4} {:>3} {charge:>10.6}", atom.atomic_number)?;
            }
            Ok(())
        }
    }
}

fn list(config: &AppConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let wrapper_config = wrapper_config(&config.toolkits);
    for (name, description) in list_toolkits() {
        let availability = resolve_toolkit(name, &wrapper_config)?.availability();
        writeln!(out, "{name:<12} {availability}")?;
        writeln!(out, "{:<12} {description}", "")?;
    }

    let registry = build_toolkit_registry(config)?;
    writeln!(out, "registered: {:?}", registry.toolkit_names())?;
    Ok(())
}
