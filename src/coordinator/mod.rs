//! Change coordination subsystem.
//!
//! # Data Flow
//! ```text
//! Named change:
//!     MatchGate check → resolve name → publish → broadcast → restart
//!
//! Random change:
//!     MatchGate check → random pick → publish → broadcast → restart
//!
//! Poll change:
//!     open:  resolve name → remember requestor
//!     close: passed → named change for the remembered requestor
//! ```
//!
//! # Design Decisions
//! - No knowledge of the host's dispatch types; adapters in `host` call in
//! - Every refusal happens before any side effect
//! - A failed publish stops the change before broadcast and restart
//! - Racing requests are not serialized: the last publish wins

pub mod change;
pub mod poll;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use change::ChangeCoordinator;
pub use types::{ActorId, ChangeError, ChangeKind, ChangeReceipt, ChangeResult};

/// The parts of the host a successful change needs.
pub trait ServerControl: Send + Sync + std::fmt::Debug {
    /// Display name of an actor, if the host knows it.
    fn callsign(&self, actor: ActorId) -> Option<String>;

    /// Send a notice to every connected actor.
    fn broadcast(&self, message: &str);

    /// Ask the host to restart with the freshly published configuration.
    fn request_restart(&self);
}
