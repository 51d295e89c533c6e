//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init`.

use basemaps::config::{config_file_path, ConfigFile, ConfigInit};
use clap::Subcommand;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration
    Show,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init => run_init(),
    }
}

fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

fn run_show() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    print!("{}", format_config(&config));
    Ok(())
}

fn run_init() -> Result<(), CliError> {
    match ConfigFile::ensure_exists()? {
        ConfigInit::Created(path) => println!("Created configuration: {}", path.display()),
        ConfigInit::Existing(path) => {
            println!("Configuration already exists: {}", path.display())
        }
    }
    Ok(())
}

fn format_config(config: &ConfigFile) -> String {
    let registry = config
        .registry
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string());
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(stderr only)".to_string());

    format!(
        "[registry]\nfile = {}\n\n[locale]\nlanguage = {}\n\n[logging]\nfile = {}\nlevel = {}\n",
        registry, config.locale.language, log_file, config.logging.level
    )
}
