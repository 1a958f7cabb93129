//! Serializable snapshot tree.

use inspector_protocols::{Attribute, BoundingBox, ComputedStyle};
use serde::{Deserialize, Serialize};

/// A captured document: optional page URL plus the root element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub root: NodeSnapshot,
}

impl DocumentSnapshot {
    pub fn new(root: NodeSnapshot) -> Self {
        Self { url: None, root }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// One element and its subtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub tag: String,

    /// Attributes in source order.
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Text owned directly by this element, placed before its children.
    #[serde(default)]
    pub text: String,

    /// Layout box in viewport coordinates.
    #[serde(default)]
    pub rect: BoundingBox,

    /// Box used for hit testing when it differs from `rect` (transforms,
    /// pointer-events tricks). Defaults to `rect`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_rect: Option<BoundingBox>,

    /// Paint order, higher is on top.
    #[serde(default)]
    pub z_index: i32,

    /// Computed style. Reading the style of a node without one fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ComputedStyle>,

    #[serde(default)]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rect = BoundingBox::new(x, y, width, height);
        self
    }

    pub fn hit_rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.hit_rect = Some(BoundingBox::new(x, y, width, height));
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn style(mut self, style: ComputedStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn child(mut self, child: NodeSnapshot) -> Self {
        self.children.push(child);
        self
    }
}
