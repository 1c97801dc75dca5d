//! Hand-off of the chosen configuration to the restart mechanism.
//!
//! # Data Flow
//! ```text
//! Resolved path
//!     → OutputPublisher::publish
//!     → output file truncated, "<path>\n" written, flushed, synced
//!     → restart script reads the file on its next run
//! ```
//!
//! # Design Decisions
//! - Truncate-then-write: no residue from a longer previous value
//! - The write is flushed and synced before `publish` returns
//! - A failed write aborts the change; nothing is broadcast

pub mod file;

use thiserror::Error;

pub use file::FilePublisher;

/// Errors raised while publishing the chosen configuration.
#[derive(Debug, Error)]
pub enum PublishError {
    /// No output location was configured.
    #[error("output file is not configured")]
    Unconfigured,

    /// The output location could not be written.
    #[error("cannot write output file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the chosen configuration path where the restart mechanism reads it.
pub trait OutputPublisher: Send + Sync + std::fmt::Debug {
    fn publish(&self, path: &str) -> Result<(), PublishError>;
}
