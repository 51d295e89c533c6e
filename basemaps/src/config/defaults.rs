//! Default values for all configuration settings.

use super::file::config_directory;
use super::settings::*;
use crate::configure::DEFAULT_LANGUAGE;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "basemaps.log";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            registry: RegistrySettings::default(),
            locale: LocaleSettings {
                language: DEFAULT_LANGUAGE.to_string(),
            },
            logging: LoggingSettings {
                file: Some(config_directory().join(DEFAULT_LOG_FILE_NAME)),
                level: DEFAULT_LOG_LEVEL,
            },
        }
    }
}
