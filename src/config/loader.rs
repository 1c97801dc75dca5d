//! Settings loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::PluginSettings;
use crate::config::validation::report_problems;

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<PluginSettings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings for startup.
///
/// Never fails: an unreadable or malformed file falls back to the defaults
/// (both paths unset) and every validation problem is logged, so the plugin
/// comes up in a disabled state instead of refusing to start.
pub fn load_or_default(path: Option<&Path>) -> PluginSettings {
    let settings = match path {
        Some(path) => match load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(error = %e, "There was an error loading your configuration file");
                PluginSettings::default()
            }
        },
        None => PluginSettings::default(),
    };

    report_problems(&settings);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_snake_case_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[mapchange]\nconfiguration_file = \"maps.txt\"\noutput_file = \"next.txt\"\n\n[observability]\nlog_level = \"debug\""
        )
        .unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.mapchange.configuration_file, "maps.txt");
        assert_eq!(settings.mapchange.output_file, "next.txt");
        assert_eq!(settings.observability.log_level, "debug");
    }

    #[test]
    fn test_load_legacy_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[mapchange]\nConfigurationFile = \"maps.txt\"\nOutputFile = \"next.txt\""
        )
        .unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.mapchange.configuration_file, "maps.txt");
        assert_eq!(settings.mapchange.output_file, "next.txt");
        // Missing section falls back to defaults
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mapchange\nconfiguration_file = ").unwrap();

        assert!(matches!(
            load_settings(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let settings = load_or_default(Some(file.path()));
        assert!(settings.mapchange.configuration_file.is_empty());
        assert!(settings.mapchange.output_file.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(matches!(load_settings(&missing), Err(ConfigError::Io { .. })));
        let settings = load_or_default(Some(missing.as_path()));
        assert!(settings.mapchange.output_file.is_empty());
    }
}
