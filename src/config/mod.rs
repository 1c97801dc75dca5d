//! Startup configuration subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (read & deserialize, fall back to defaults)
//!     → validation.rs (semantic checks, logged)
//!     → PluginSettings (immutable for the process lifetime)
//!     → paths handed to the registry and publisher
//! ```
//!
//! # Design Decisions
//! - Settings are read once at startup; the configuration list they point
//!   at is re-read on every query by the registry
//! - All fields have defaults to allow minimal settings files
//! - A broken settings file disables the plugin instead of aborting startup

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_or_default, load_settings, ConfigError};
pub use schema::{MapChangeConfig, ObservabilityConfig, PluginSettings};
pub use validation::{report_problems, validate_settings, ValidationError};
