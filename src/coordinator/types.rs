//! Request identities, outcomes and error definitions.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::publish::PublishError;

/// Host-assigned identifier of the actor issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub i32);

impl From<i32> for ActorId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the target configuration was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Explicit name from a command.
    Named,
    /// Random pick from the registry.
    Random,
    /// Explicit name from a passed poll.
    Poll,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Named => "named",
            ChangeKind::Random => "random",
            ChangeKind::Poll => "poll",
        }
    }
}

/// Reasons a change request was refused or aborted.
#[derive(Debug, Error)]
pub enum ChangeError {
    /// A match is being played; nothing was changed.
    #[error("a match is in progress")]
    MatchInProgress,

    /// No entry matches the requested name.
    #[error("unknown configuration: {name}")]
    UnknownConfiguration { name: String },

    /// The registry holds no valid entries.
    #[error("no configurations available")]
    NoConfigurationsAvailable,

    /// The target could not be handed off; nothing was broadcast.
    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),
}

impl ChangeError {
    /// Text sent to the requestor.
    pub fn notice(&self) -> String {
        match self {
            ChangeError::MatchInProgress => {
                "Sorry, you are not allowed to change configurations when a match is in progress"
                    .to_string()
            }
            ChangeError::UnknownConfiguration { name } => {
                format!("The {name} configuration you requested does not exist.")
            }
            ChangeError::NoConfigurationsAvailable => "No map configurations found.".to_string(),
            ChangeError::Publish(_) => {
                "The configuration change could not be saved; the server will not restart."
                    .to_string()
            }
        }
    }

    /// Metrics label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeError::MatchInProgress => "match_in_progress",
            ChangeError::UnknownConfiguration { .. } => "unknown_configuration",
            ChangeError::NoConfigurationsAvailable => "no_configurations",
            ChangeError::Publish(_) => "publish_failed",
        }
    }
}

/// Record of a completed change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReceipt {
    pub request_id: Uuid,
    pub kind: ChangeKind,
    pub path: String,
    pub requestor: ActorId,
}

/// Result type for change requests.
pub type ChangeResult = Result<ChangeReceipt, ChangeError>;
