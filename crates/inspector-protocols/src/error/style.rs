//! Computed-style accessor errors.

use thiserror::Error;

/// Failure reading an element's computed style from the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Computed style unavailable: {0}")]
    Unavailable(String),

    #[error("Element is detached from its document")]
    Detached,
}
