//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use basemaps::config::ConfigFileError;
use basemaps::registry::RegistryError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Registry could not be built
    Registry(RegistryError),
    /// Failed to read an input document
    ReadInput { path: String, error: std::io::Error },
    /// Input document is not valid JSON
    InvalidJson {
        path: String,
        error: serde_json::Error,
    },
    /// Failed to render command output
    Output(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Registry(_) = self {
            eprintln!();
            eprintln!("Check the registry document named by [registry] file in config.ini");
            eprintln!("or the --registry option. Each body maps to an array of basemaps");
            eprintln!("with at least 'source', 'url' and 'title'.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Registry(e) => write!(f, "Invalid basemap registry: {}", e),
            CliError::ReadInput { path, error } => {
                write!(f, "Failed to read '{}': {}", path, error)
            }
            CliError::InvalidJson { path, error } => {
                write!(f, "'{}' is not valid JSON: {}", path, error)
            }
            CliError::Output(e) => write!(f, "Failed to render output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Registry(e) => Some(e),
            CliError::ReadInput { error, .. } => Some(error),
            CliError::InvalidJson { error, .. } => Some(error),
            CliError::Output(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<RegistryError> for CliError {
    fn from(e: RegistryError) -> Self {
        CliError::Registry(e)
    }
}
