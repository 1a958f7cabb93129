//! Computed style snapshot.

use serde::{Deserialize, Serialize};

/// The five computed properties the inspector reports, as resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedStyle {
    pub color: String,
    pub background_color: String,
    pub font_size: String,
    pub font_weight: String,
    pub display: String,
}

impl ComputedStyle {
    /// Properties keyed by their CSSOM names, in reporting order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("color", &self.color),
            ("backgroundColor", &self.background_color),
            ("fontSize", &self.font_size),
            ("fontWeight", &self.font_weight),
            ("display", &self.display),
        ]
    }
}
