//! Poll-driven changes.
//!
//! ```text
//! poll opened  → name must resolve → remember requestor
//! poll closed  → passed? → named change attributed to that requestor
//! ```
//!
//! Only one poll is tracked at a time; opening a new one replaces the
//! stored requestor. The requestor is forgotten on every close.

use crate::coordinator::change::ChangeCoordinator;
use crate::coordinator::types::{ActorId, ChangeKind, ChangeResult};

impl ChangeCoordinator {
    /// Validate a poll request and remember who opened it.
    ///
    /// Permission checks are the caller's job. Returns false, leaving the
    /// stored requestor untouched, when `name` does not resolve.
    pub fn open_poll(&self, requestor: ActorId, name: &str) -> bool {
        if self.registry().resolve(name).is_none() {
            tracing::info!(requestor = %requestor, name = %name, "Poll refused: unknown configuration");
            return false;
        }

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(requestor) {
            tracing::debug!(previous = %previous, "Replacing pending poll requestor");
        }
        tracing::info!(requestor = %requestor, name = %name, "Map change poll opened");
        true
    }

    /// Finish a poll. Runs the named change only when the poll passed.
    ///
    /// Returns `None` when nothing was attempted.
    pub fn close_poll(&self, name: &str, passed: bool) -> Option<ChangeResult> {
        let requestor = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        if !passed {
            tracing::info!(name = %name, "Map change poll failed");
            return None;
        }

        match requestor {
            Some(requestor) => Some(self.change_named(ChangeKind::Poll, name, requestor)),
            None => {
                tracing::warn!(name = %name, "Poll passed but no requestor was recorded");
                None
            }
        }
    }

    /// Requestor of the currently open poll, if any.
    pub fn pending_requestor(&self) -> Option<ActorId> {
        *self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}
