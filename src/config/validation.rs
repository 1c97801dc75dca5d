//! Settings validation.
//!
//! # Responsibilities
//! - Check both paths are set
//! - Warn when the configuration list is not present yet
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure apart from one existence check
//! - Problems are reported, never fatal: the plugin runs disabled

use std::path::Path;

use thiserror::Error;

use crate::config::schema::PluginSettings;

/// A single semantic problem with the startup settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("configuration_file is not set")]
    MissingConfigurationFile,

    #[error("output_file is not set")]
    MissingOutputFile,

    #[error("configuration file {0} does not exist")]
    ConfigurationFileNotFound(String),
}

/// Validate startup settings, collecting every problem.
pub fn validate_settings(settings: &PluginSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let cfg = &settings.mapchange;

    if cfg.configuration_file.trim().is_empty() {
        errors.push(ValidationError::MissingConfigurationFile);
    } else if !Path::new(&cfg.configuration_file).exists() {
        errors.push(ValidationError::ConfigurationFileNotFound(
            cfg.configuration_file.clone(),
        ));
    }

    if cfg.output_file.trim().is_empty() {
        errors.push(ValidationError::MissingOutputFile);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Log every validation problem. Returns true when the settings are usable.
pub fn report_problems(settings: &PluginSettings) -> bool {
    match validate_settings(settings) {
        Ok(()) => true,
        Err(problems) => {
            for problem in problems {
                tracing::warn!(%problem, "Startup configuration problem");
            }
            false
        }
    }
}
