//! Exclusion selector errors.

use thiserror::Error;

/// Errors raised while parsing an exclusion selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Selector is empty")]
    Empty,

    #[error("Unsupported selector '{selector}': {reason}")]
    Unsupported { selector: String, reason: String },
}

impl SelectorError {
    pub fn unsupported(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            selector: selector.into(),
            reason: reason.into(),
        }
    }
}
