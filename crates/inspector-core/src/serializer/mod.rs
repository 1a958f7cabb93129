//! Element context serialization.
//!
//! Turns one element into a deterministic text block describing its tag,
//! identity, attributes, visible text, parent and a handful of computed
//! styles. Blocks are rebuilt from live element state on every call.
//!
//! Two surface forms exist, chosen by [`TemplateKind`]:
//!
//! - `Xml`: an `<element index="n">` block
//! - `Markdown`: a `### Element n` section

mod attributes;
mod markdown;
mod xml;

pub use attributes::element_attributes;
pub(crate) use xml::escape_markup;

use inspector_config::{Config, SerializerConfig};
use inspector_protocols::{Attribute, ElementHandle, TemplateKind};
use tracing::debug;

/// Structural context line for elements without a parent.
pub const NO_PARENT_NOTICE: &str = "No parent element found (likely root or disconnected)";

/// Styles line used when the computed-style read fails.
pub const STYLES_UNAVAILABLE: &str = "Could not retrieve computed styles";

/// Serialization knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerOptions {
    /// Visible text longer than this many characters is cut and suffixed
    /// with `...`.
    pub max_text_length: usize,
    /// Entity-escape values in XML output.
    pub escape_markup: bool,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self::from_config(&SerializerConfig::default())
    }
}

impl SerializerOptions {
    pub fn from_config(config: &SerializerConfig) -> Self {
        Self {
            max_text_length: config.max_text_length,
            escape_markup: config.escape_markup,
        }
    }
}

/// Serializes elements with a fixed template and options.
#[derive(Debug, Clone, Default)]
pub struct ElementSerializer {
    template: TemplateKind,
    options: SerializerOptions,
}

impl ElementSerializer {
    pub fn new(template: TemplateKind) -> Self {
        Self {
            template,
            options: SerializerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SerializerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.prompt.template)
            .with_options(SerializerOptions::from_config(&config.serializer))
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn options(&self) -> &SerializerOptions {
        &self.options
    }

    /// Block for `element` at zero-based selection position `index`.
    pub fn serialize<E: ElementHandle>(&self, element: &E, index: usize) -> String {
        let context = ElementContext::gather(element, index, &self.options);
        match self.template {
            TemplateKind::Xml => xml::render(&context, self.options.escape_markup),
            TemplateKind::Markdown => markdown::render(&context),
        }
    }

    /// Blocks for every element, numbered in slice order.
    pub fn serialize_all<E: ElementHandle>(&self, elements: &[E]) -> String {
        elements
            .iter()
            .enumerate()
            .map(|(index, element)| self.serialize(element, index))
            .collect()
    }
}

/// XML block for `element` with default options.
pub fn serialize_element<E: ElementHandle>(element: &E, index: usize) -> String {
    ElementSerializer::default().serialize(element, index)
}

/// Everything a block reports, read once from the element.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ElementContext {
    pub ordinal: usize,
    pub tag: String,
    pub id: Option<String>,
    pub classes: Option<String>,
    /// `None` when the attribute map is empty. A map whose only entry was
    /// the suppressed `class` is `Some(vec![])`.
    pub attributes: Option<Vec<Attribute>>,
    pub text: Option<String>,
    pub parent: Option<ParentContext>,
    pub styles: Option<Vec<(&'static str, String)>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParentContext {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Option<String>,
}

impl ElementContext {
    pub(crate) fn gather<E: ElementHandle>(
        element: &E,
        index: usize,
        options: &SerializerOptions,
    ) -> Self {
        let classes = joined_classes(element);

        let attributes = element_attributes(element);
        let attributes = (!attributes.is_empty()).then(|| {
            attributes
                .into_iter()
                .filter(|attr| classes.is_none() || !attr.name.eq_ignore_ascii_case("class"))
                .collect()
        });

        let parent = element.parent().map(|parent| ParentContext {
            tag: parent.tag_name().to_lowercase(),
            id: non_empty(parent.id()),
            classes: joined_classes(&parent),
        });

        let styles = match element.computed_style() {
            Ok(style) => Some(
                style
                    .entries()
                    .iter()
                    .map(|(name, value)| (*name, value.to_string()))
                    .collect(),
            ),
            Err(e) => {
                debug!(tag = %element.tag_name(), error = %e, "computed style unavailable");
                None
            }
        };

        Self {
            ordinal: index + 1,
            tag: element.tag_name().to_lowercase(),
            id: non_empty(element.id()),
            classes,
            attributes,
            text: visible_text(element, options.max_text_length),
            parent,
            styles,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn joined_classes<E: ElementHandle>(element: &E) -> Option<String> {
    non_empty(element.class_list().join(", "))
}

/// Trimmed text content, cut to `max_len` characters.
fn visible_text<E: ElementHandle>(element: &E, max_len: usize) -> Option<String> {
    let text = element.text_content();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(truncate_text(text, max_len))
}

pub(crate) fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "serializer_tests.rs"]
mod tests;
