//! Error types for the inline editor.
//!
//! Three failure kinds are kept apart even though the user sees one generic
//! notice for the last two:
//!
//! - [`ValidationError`]: local, never reaches the network.
//! - [`TransportError`]: no usable response.
//! - [`EditorError::Rejected`]: the server answered `success: false`.

use thiserror::Error;

/// Input rejected before sending.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A request that produced no usable response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Invalid url: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Undecodable response: {0}")]
    Decode(String),
}

/// Errors returned by the editor clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered `success: false`.
    #[error("Server rejected {action}")]
    Rejected { action: &'static str },

    #[error("No such row: {0}")]
    UnknownRow(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl EditorError {
    /// Short label used as the `error_kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            EditorError::Validation(_) => "validation",
            EditorError::Transport(_) => "transport",
            EditorError::Rejected { .. } => "rejected",
            EditorError::UnknownRow(_) => "unknown_row",
            EditorError::ActorCommunicationError(_) => "actor",
        }
    }
}
