//! Top-level protocol error type.

use thiserror::Error;

/// Top-level protocol error type.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid point '{0}', expected 'x,y'")]
    InvalidPoint(String),

    #[error("Unknown template kind: {0}")]
    UnknownTemplate(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
