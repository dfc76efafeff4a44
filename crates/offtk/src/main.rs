//! offtk - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `offtk toolkits` | Known wrappers, their availability and the registered precedence |
//! | `offtk resolve <operation>` | Toolkit serving an operation |
//! | `offtk smiles <SMILES>` | Canonical SMILES through the registry |
//! | `offtk charges <SMILES> [--model M]` | Conformer generation and partial charges |

// Force-link offtk-providers to ensure linkme wrapper registrations are included
extern crate offtk_providers;

use clap::Parser;
use offtk::cli::{Cli, execute, load_config};
use offtk_infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    source.log();

    let mut stdout = std::io::stdout().lock();
    execute(&cli.command, &config, &mut stdout).await
}
