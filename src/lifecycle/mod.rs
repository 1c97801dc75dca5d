//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load settings → Validate → Build coordinator → Register adapters
//!
//! Match state (match_gate.rs):
//!     match-start / match-end from the host → MatchGate
//!
//! Restart (restart.rs):
//!     Successful change → publish → RestartSignal → host restarts
//!
//! Signals (signals.rs):
//!     SIGINT → end the console session
//! ```

pub mod match_gate;
pub mod restart;
pub mod signals;
pub mod startup;

pub use match_gate::MatchGate;
pub use restart::RestartSignal;
pub use startup::build_coordinator;
