//! Entry selection strategies for random configuration changes.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::registry::entry::ConfigEntry;

/// Picks one entry out of a loaded set.
pub trait Selector: Send + Sync + std::fmt::Debug {
    /// Returns the index of the chosen entry, or `None` for an empty set.
    fn select(&self, entries: &[ConfigEntry]) -> Option<usize>;
}

/// Uniform random selection.
///
/// The generator is seeded once from the wall clock when the selector is
/// built; picks are not reproducible across runs.
#[derive(Debug)]
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for RandomSelector {
    fn select(&self, entries: &[ConfigEntry]) -> Option<usize> {
        if entries.is_empty() {
            return None;
        }

        // A poisoned lock only means another pick panicked; the rng is still usable
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Some(rng.gen_range(0..entries.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<ConfigEntry> {
        (0..n)
            .map(|i| ConfigEntry {
                name: format!("map{i}"),
                path: format!("maps/{i}.conf"),
            })
            .collect()
    }

    #[test]
    fn test_random_in_range() {
        let selector = RandomSelector::new();
        let set = entries(5);

        for _ in 0..200 {
            let i = selector.select(&set).unwrap();
            assert!(i < set.len());
        }
    }

    #[test]
    fn test_random_empty() {
        let selector = RandomSelector::with_seed(7);
        assert_eq!(selector.select(&[]), None);
    }

    #[test]
    fn test_random_covers_all_entries() {
        let selector = RandomSelector::with_seed(42);
        let set = entries(3);
        let mut seen = [false; 3];

        for _ in 0..300 {
            seen[selector.select(&set).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
