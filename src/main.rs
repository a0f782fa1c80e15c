use anyhow::Result;
use clap::Parser;

use prompta::cli::Cli;
use prompta::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if !config.color {
        colored::control::set_override(false);
    }

    cli.command.execute(config)?;

    Ok(())
}
