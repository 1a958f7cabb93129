//! Configuration schema definitions.

use std::path::PathBuf;

use inspector_protocols::TemplateKind;
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub serializer: SerializerConfig,

    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Element resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Extra exclusion selector, e.g. `"#toolbar, .debug-panel"`.
    #[serde(default)]
    pub exclude_selector: Option<String>,

    /// Class carried by the inspector's own overlay.
    #[serde(default = "default_overlay_class")]
    pub overlay_class: String,

    /// Attribute carried by the inspector's own overlay.
    #[serde(default = "default_overlay_attribute")]
    pub overlay_attribute: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            exclude_selector: None,
            overlay_class: default_overlay_class(),
            overlay_attribute: default_overlay_attribute(),
        }
    }
}

fn default_overlay_class() -> String {
    "element-selector".to_string()
}

fn default_overlay_attribute() -> String {
    "data-element-selector".to_string()
}

/// Element serialization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializerConfig {
    /// Visible text longer than this many characters is truncated.
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Entity-escape values in the XML template.
    #[serde(default)]
    pub escape_markup: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
            escape_markup: false,
        }
    }
}

fn default_max_text_length() -> usize {
    100
}

/// Prompt composition settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default)]
    pub template: TemplateKind,

    /// Page URL used when the caller does not supply one.
    #[serde(default)]
    pub page_url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily-rotated log files. Console only when unset.
    #[serde(default)]
    pub file_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
