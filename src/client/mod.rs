//! Roster service client.
//!
//! [`RosterApi`] is the seam between the sync controller and the network:
//! three operations, one round trip each, with results normalized into
//! [`ClientError`] so the controller never sees HTTP details.

use crate::roster::Roster;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpRosterClient;

/// Coarse error category, kept separate from the display text for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Remote,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Transport => "transport",
            Self::Remote => "remote",
        }
    }
}

/// Errors returned by roster operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Arguments rejected before any request was sent.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Connectivity failure, timeout, or a response that could not be decoded.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Well-formed rejection from the service.
    #[error("Remote error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Remote { status: u16, detail: Option<String> },
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Remote { .. } => ErrorKind::Remote,
        }
    }

    /// Server-supplied text suitable for showing verbatim, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Remote { detail, .. } => detail.as_deref().filter(|d| !d.is_empty()),
            _ => None,
        }
    }
}

/// Successful mutation response body.
///
/// Any JSON object is accepted; `message` is empty when the service sent none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReceipt {
    #[serde(default)]
    pub message: String,
}

/// Operations against the roster service.
#[async_trait]
pub trait RosterApi: Send + Sync {
    /// Fetch the full roster.
    async fn list_activities(&self) -> Result<Roster, ClientError>;

    /// Sign `email` up for `activity`.
    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReceipt, ClientError>;

    /// Remove `email` from `activity`.
    async fn remove_participant(&self, activity: &str, email: &str) -> Result<MutationReceipt, ClientError>;
}

/// Shared argument check for the two mutations.
pub(crate) fn require_mutation_args(activity: &str, email: &str) -> Result<(), ClientError> {
    if activity.is_empty() {
        return Err(ClientError::Validation("activity name is required".to_string()));
    }
    if email.is_empty() {
        return Err(ClientError::Validation("email is required".to_string()));
    }
    Ok(())
}
