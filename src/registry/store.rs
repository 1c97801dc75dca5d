//! Loading the configuration list from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::registry::entry::ConfigSet;

/// The configuration list could not be read.
#[derive(Debug, Error)]
#[error("cannot read configuration list {}: {source}", .path.display())]
pub struct RegistryError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Read and parse every valid entry of the list at `source`.
pub fn load_entries(source: &Path) -> Result<ConfigSet, RegistryError> {
    let text = fs::read_to_string(source).map_err(|e| RegistryError {
        path: source.to_path_buf(),
        source: e,
    })?;

    Ok(ConfigSet::parse(&text))
}
