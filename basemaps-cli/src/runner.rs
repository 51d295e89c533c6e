//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, and registry
//! construction to reduce duplication across command handlers.

use std::path::Path;

use basemaps::config::{ConfigFile, LogLevel};
use basemaps::configure::Locale;
use basemaps::logging::{init_logging, LoggingGuard};
use basemaps::registry::BasemapRegistry;
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - When true, enables debug-level logging regardless of config
    pub fn new(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let level = if debug_mode {
            LogLevel::Debug
        } else {
            config.logging.level
        };
        let logging_guard = init_logging(level, config.logging.file.as_deref())
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("basemaps v{}: {} command", basemaps::VERSION, command);
    }

    /// Build the registry, preferring an explicit document over config.
    pub fn registry(&self, override_path: Option<&Path>) -> Result<BasemapRegistry, CliError> {
        let registry = match override_path {
            Some(path) => BasemapRegistry::load_from(path)?,
            None => self.config.load_registry()?,
        };
        Ok(registry)
    }

    /// Locale from the command line, falling back to config.
    pub fn locale(&self, language: Option<String>) -> Locale {
        language
            .map(Locale::new)
            .unwrap_or_else(|| self.config.locale())
    }
}
