//! Match state gate.
//!
//! # State Transitions
//! ```text
//! inactive → active:   match-start signal
//! active → inactive:   match-end signal
//! ```
//!
//! Only the lifecycle handler writes; change requests only read.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether a match is currently being played.
#[derive(Debug, Default)]
pub struct MatchGate {
    active: AtomicBool,
}

impl MatchGate {
    /// A gate with no match in progress.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_match_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn set_match_active(&self, active: bool) {
        let previous = self.active.swap(active, Ordering::AcqRel);
        if previous != active {
            tracing::info!(match_active = active, "Match state changed");
        }
        ::metrics::gauge!("mapchange_match_active").set(if active { 1.0 } else { 0.0 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let gate = MatchGate::new();
        assert!(!gate.is_match_active());

        gate.set_match_active(true);
        assert!(gate.is_match_active());

        // Repeated signal is idempotent
        gate.set_match_active(true);
        assert!(gate.is_match_active());

        gate.set_match_active(false);
        assert!(!gate.is_match_active());
    }
}
