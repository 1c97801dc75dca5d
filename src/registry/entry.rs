//! Configuration entries and line parsing.

use serde::Serialize;

/// A named map configuration and the path handed to the restart mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub name: String,
    pub path: String,
}

impl ConfigEntry {
    /// Parse one line of the configuration list.
    ///
    /// The first run of spaces/tabs separates the name from the path; the
    /// path is the trimmed remainder and may contain spaces itself. Returns
    /// `None` unless both parts are non-empty.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, rest) = line.split_once([' ', '\t'])?;
        let path = rest.trim_matches([' ', '\t']);

        if name.is_empty() || path.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            path: path.to_string(),
        })
    }

    /// Case-insensitive name comparison.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Ordered set of valid entries, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSet {
    entries: Vec<ConfigEntry>,
}

impl ConfigSet {
    /// Parse the full text of a configuration list, dropping malformed lines.
    pub fn parse(text: &str) -> Self {
        let entries = text.lines().filter_map(ConfigEntry::parse_line).collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ConfigEntry] {
        &self.entries
    }
}

impl From<Vec<ConfigEntry>> for ConfigSet {
    fn from(entries: Vec<ConfigEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a ConfigSet {
    type Item = &'a ConfigEntry;
    type IntoIter = std::slice::Iter<'a, ConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
