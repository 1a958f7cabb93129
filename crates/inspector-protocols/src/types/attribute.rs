//! Element attributes.

use serde::{Deserialize, Serialize};

/// A single `name="value"` attribute, in host order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Whether this is a `data-*` attribute.
    pub fn is_data(&self) -> bool {
        self.name.starts_with("data-")
    }
}
