//! Name resolution over a loaded configuration set.
//!
//! # Design Decisions
//! - Names compare case-insensitively (lower-case fold)
//! - Exact match only, no prefixes
//! - First match wins when the list holds duplicates

use crate::registry::entry::{ConfigEntry, ConfigSet};
use crate::registry::selector::Selector;

/// Resolve `name` to its entry.
pub fn resolve<'a>(name: &str, set: &'a ConfigSet) -> Option<&'a ConfigEntry> {
    set.iter().find(|entry| entry.matches(name))
}

/// Names of every entry, in source order.
pub fn list_names(set: &ConfigSet) -> Vec<String> {
    set.iter().map(|entry| entry.name.clone()).collect()
}

/// Pick one entry with the given selector. `None` for an empty set.
pub fn pick_random<'a>(set: &'a ConfigSet, selector: &dyn Selector) -> Option<&'a ConfigEntry> {
    selector
        .select(set.as_slice())
        .and_then(|i| set.as_slice().get(i))
}
