//! Map configuration registry.
//!
//! # Data Flow
//! ```text
//! Query (resolve / list / random)
//!     → store.rs (read the list file, parse lines)
//!     → entry.rs (ConfigEntry, ConfigSet)
//!     → resolver.rs (case-insensitive lookup, listing)
//!     → selector.rs (random pick)
//! ```
//!
//! # Design Decisions
//! - No cache: the list is re-read on every query so live edits apply
//! - An unreadable list is treated as empty and logged
//! - Malformed lines are skipped silently

pub mod entry;
pub mod resolver;
pub mod selector;
pub mod store;

use std::path::{Path, PathBuf};

pub use entry::{ConfigEntry, ConfigSet};
pub use selector::{RandomSelector, Selector};
pub use store::{load_entries, RegistryError};

/// Registry backed by a configuration list on disk.
#[derive(Debug)]
pub struct ConfigRegistry {
    source: PathBuf,
    selector: Box<dyn Selector>,
}

impl ConfigRegistry {
    /// Registry over `source` with a clock-seeded random selector.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self::with_selector(source, Box::new(RandomSelector::new()))
    }

    pub fn with_selector(source: impl Into<PathBuf>, selector: Box<dyn Selector>) -> Self {
        Self {
            source: source.into(),
            selector,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Current entries. An unreadable list yields an empty set.
    pub fn entries(&self) -> ConfigSet {
        match load_entries(&self.source) {
            Ok(set) => {
                tracing::debug!(source = %self.source.display(), entries = set.len(), "Configuration list loaded");
                set
            }
            Err(e) => {
                tracing::warn!(error = %e, "Configuration list unavailable, treating as empty");
                ConfigSet::default()
            }
        }
    }

    /// Resolve a user-supplied name to its configuration path.
    pub fn resolve(&self, name: &str) -> Option<String> {
        let set = self.entries();
        resolver::resolve(name, &set).map(|entry| entry.path.clone())
    }

    pub fn list_names(&self) -> Vec<String> {
        resolver::list_names(&self.entries())
    }

    pub fn pick_random(&self) -> Option<ConfigEntry> {
        let set = self.entries();
        resolver::pick_random(&set, self.selector.as_ref()).cloned()
    }
}
