//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let registry_file = optional_path_to_string(config.registry.file.as_deref());
    let log_file = optional_path_to_string(config.logging.file.as_deref());

    format!(
        r#"[registry]
; Registry document (JSON) mapping body identifiers to basemap definitions.
; Leave empty to use the built-in registry (earth, europa, mars, moon).
file = {}

[locale]
; Language tag handed to the map front end for titles and attributions
language = {}

[logging]
; Log file path. Leave empty to log to stderr only.
file = {}
; Default log level (trace, debug, info, warn, error). RUST_LOG overrides it.
level = {}
"#,
        registry_file, config.locale.language, log_file, config.logging.level,
    )
}

fn optional_path_to_string(path: Option<&Path>) -> String {
    path.map(path_to_string).unwrap_or_default()
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::super::settings::{ConfigFile, LogLevel};
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.registry.file = Some(temp_dir.path().join("registry.json"));
        config.locale.language = "it".to_string();
        config.logging.level = LogLevel::Warn;
        config.logging.file = None;

        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested/config.ini");

        ConfigFile::default().save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, ConfigFile::default());
    }

    #[test]
    fn test_comments_present() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("[registry]"));
        assert!(content.contains("; Leave empty to use the built-in registry"));
        assert!(content.contains("level = info"));
    }

    #[test]
    fn test_path_to_string_plain() {
        assert_eq!(
            path_to_string(&PathBuf::from("/etc/basemaps.json")),
            "/etc/basemaps.json"
        );
    }
}
