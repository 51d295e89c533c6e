//! User configuration.
//!
//! Settings are read from `~/.basemaps/config.ini` and overlaid on defaults.
//! A missing file is not an error.
//!
//! # Example
//!
//! ```
//! use basemaps::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! let registry = config.load_registry().unwrap();
//! assert!(registry.get("mars").is_some());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LOG_FILE_NAME, DEFAULT_LOG_LEVEL};
pub use file::{config_directory, config_file_path, ConfigFileError, ConfigInit};
pub use settings::{ConfigFile, LocaleSettings, LogLevel, LoggingSettings, RegistrySettings};
