//! Map configuration switching for multiplayer game servers.

pub mod config;
pub mod coordinator;
pub mod host;
pub mod lifecycle;
pub mod observability;
pub mod publish;
pub mod registry;

pub use config::PluginSettings;
pub use coordinator::{ActorId, ChangeCoordinator, ChangeError, ServerControl};
pub use host::{Host, MapChangePlugin};
pub use lifecycle::RestartSignal;
