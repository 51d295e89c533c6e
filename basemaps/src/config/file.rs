//! The `~/.basemaps/config.ini` file and what it selects.
//!
//! A missing file means defaults. Parsing lives in [`super::parser`] and the
//! commented output in [`super::writer`]; this module ties them to disk and
//! turns the loaded sections into a registry and a locale.

use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use super::settings::ConfigFile;
use crate::configure::Locale;
use crate::registry::{BasemapRegistry, RegistryError};

/// Name of the per-user configuration directory under HOME.
const CONFIG_DIR_NAME: &str = ".basemaps";

/// Name of the configuration file inside [`config_directory`].
const CONFIG_FILE_NAME: &str = "config.ini";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read or parse config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file {}: {source}", path.display())]
    WriteError { path: PathBuf, source: io::Error },

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory {}: {source}", path.display())]
    DirectoryError { path: PathBuf, source: io::Error },
}

/// Outcome of [`ConfigFile::ensure_exists`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInit {
    /// A default file was written.
    Created(PathBuf),
    /// A file was already present and left alone.
    Existing(PathBuf),
}

impl ConfigInit {
    pub fn path(&self) -> &Path {
        match self {
            ConfigInit::Created(path) | ConfigInit::Existing(path) => path,
        }
    }
}

impl ConfigFile {
    /// Load `~/.basemaps/config.ini`, or defaults when it is absent.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load a config file, or defaults when `path` does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let config = super::parser::parse_ini(&Ini::load_from_file(path)?)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Write this configuration to `~/.basemaps/config.ini`.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigFileError::DirectoryError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, super::writer::to_config_string(self)).map_err(|source| {
            ConfigFileError::WriteError {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Write a default `~/.basemaps/config.ini` unless one exists.
    pub fn ensure_exists() -> Result<ConfigInit, ConfigFileError> {
        Self::ensure_exists_at(&config_file_path())
    }

    /// Write a default config file at `path` unless one exists.
    pub fn ensure_exists_at(path: &Path) -> Result<ConfigInit, ConfigFileError> {
        if path.exists() {
            return Ok(ConfigInit::Existing(path.to_path_buf()));
        }
        Self::default().save_to(path)?;
        Ok(ConfigInit::Created(path.to_path_buf()))
    }

    /// Registry selected by `[registry] file`, or the built-in one.
    pub fn load_registry(&self) -> Result<BasemapRegistry, RegistryError> {
        match &self.registry.file {
            Some(path) => BasemapRegistry::load_from(path),
            None => Ok(BasemapRegistry::builtin()),
        }
    }

    /// Locale from `[locale] language`.
    pub fn locale(&self) -> Locale {
        Locale::new(self.locale.language.clone())
    }
}

/// The per-user configuration directory (`~/.basemaps`).
///
/// Falls back to the working directory when HOME cannot be determined.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path of the configuration file (`~/.basemaps/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}
