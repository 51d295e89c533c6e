//! Basemaps CLI - Command-line interface
//!
//! This binary provides a command-line interface to the basemaps library.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::bodies::BodiesArgs;
use commands::config::ConfigCommands;
use commands::resolve::ResolveArgs;
use commands::targets::TargetsArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "basemaps")]
#[command(version = basemaps::VERSION)]
#[command(about = "Resolve planetary basemaps for STAC collections and items", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the target bodies of a STAC document
    Targets {
        /// STAC collection or item (JSON)
        input: PathBuf,
    },

    /// Print the basemaps to offer for a STAC document
    Resolve {
        /// STAC collection or item (JSON)
        input: PathBuf,

        /// Registry document to use instead of the configured one
        #[arg(long)]
        registry: Option<PathBuf>,

        /// Language tag for the front end (defaults to config)
        #[arg(long)]
        locale: Option<String>,

        /// Print basemap definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the bodies known to the registry
    Bodies {
        /// Registry document to use instead of the configured one
        #[arg(long)]
        registry: Option<PathBuf>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Commands::Targets { input } => commands::targets::run(TargetsArgs {
            input,
            debug: cli.debug,
        }),
        Commands::Resolve {
            input,
            registry,
            locale,
            json,
        } => commands::resolve::run(ResolveArgs {
            input,
            registry,
            locale,
            json,
            debug: cli.debug,
        }),
        Commands::Bodies { registry } => commands::bodies::run(BodiesArgs {
            registry,
            debug: cli.debug,
        }),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
