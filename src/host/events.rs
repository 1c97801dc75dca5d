//! Match lifecycle events forwarded by the host.

use crate::lifecycle::MatchGate;

/// Host events the plugin listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    MatchStarted,
    MatchEnded,
}

impl LifecycleEvent {
    /// Apply the event to the match gate.
    pub fn apply(self, gate: &MatchGate) {
        match self {
            LifecycleEvent::MatchStarted => gate.set_match_active(true),
            LifecycleEvent::MatchEnded => gate.set_match_active(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_toggle_gate() {
        let gate = MatchGate::new();

        LifecycleEvent::MatchStarted.apply(&gate);
        assert!(gate.is_match_active());

        LifecycleEvent::MatchEnded.apply(&gate);
        assert!(!gate.is_match_active());
    }
}
