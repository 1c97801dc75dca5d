//! Host integration subsystem.
//!
//! # Data Flow
//! ```text
//! Host dispatch (slash command / poll / lifecycle event)
//!     → plugin.rs (registration table, entry points)
//!     → commands.rs / polls.rs (permissions, usage, notices)
//!     → ChangeCoordinator
//!     → Host (messages, broadcast, restart)
//! ```
//!
//! # Design Decisions
//! - Adapters are thin: they check permissions and turn outcomes into text
//! - Every failure is one notice to the requesting actor only
//! - The coordinator never sees these types

pub mod commands;
pub mod console;
pub mod events;
pub mod plugin;
pub mod polls;

pub use commands::Command;
pub use console::ConsoleHost;
pub use events::LifecycleEvent;
pub use plugin::MapChangePlugin;

use crate::coordinator::{ActorId, ServerControl};

/// Permission required to change configurations.
pub const PERM_MAPCHANGE: &str = "mapchange";

/// Additional permission required to open a map change poll.
pub const PERM_POLL_MAPCHANGE: &str = "pollMapchange";

/// Everything the adapters need from the game server.
pub trait Host: ServerControl {
    /// Send a notice to one actor.
    fn send_message(&self, to: ActorId, message: &str);

    fn has_permission(&self, actor: ActorId, permission: &str) -> bool;

    /// Whether the actor holds the operator flag.
    fn is_operator(&self, actor: ActorId) -> bool;
}
