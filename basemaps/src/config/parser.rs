//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::{ConfigFile, LogLevel};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [registry] section
    if let Some(section) = ini.section(Some("registry")) {
        if let Some(v) = section.get("file") {
            config.registry.file = optional_path(v);
        }
    }

    // [locale] section
    if let Some(section) = ini.section(Some("locale")) {
        if let Some(v) = section.get("language") {
            let v = v.trim();
            if v.is_empty() {
                return Err(ConfigFileError::InvalidValue {
                    section: "locale".to_string(),
                    key: "language".to_string(),
                    value: v.to_string(),
                    reason: "must be a language tag such as 'en' or 'de-CH'".to_string(),
                });
            }
            config.locale.language = v.to_string();
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            config.logging.file = optional_path(v);
        }
        if let Some(v) = section.get("level") {
            config.logging.level =
                v.parse::<LogLevel>()
                    .map_err(|_| ConfigFileError::InvalidValue {
                        section: "logging".to_string(),
                        key: "level".to_string(),
                        value: v.to_string(),
                        reason: "must be one of: trace, debug, info, warn, error".to_string(),
                    })?;
        }
    }

    Ok(config)
}

/// An empty value means "not set".
fn optional_path(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(expand_tilde(value))
    }
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
