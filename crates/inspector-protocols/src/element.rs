//! Element protocol definitions.
//!
//! The inspector never owns a tree. Hosts hand it [`ElementHandle`]s and a
//! [`HitTestProvider`]; every call re-reads live element state.

use crate::error::StyleError;
use crate::types::{Attribute, BoundingBox, ComputedStyle, Point};

/// Read-only handle to an element in a host tree.
///
/// `PartialEq` must be reference identity: two handles are equal only when
/// they point at the same node.
pub trait ElementHandle: Clone + PartialEq {
    /// Tag name as reported by the host (any case).
    fn tag_name(&self) -> String;

    /// Attributes in host order.
    fn attributes(&self) -> Vec<Attribute>;

    /// Bounding box in viewport coordinates.
    fn bounding_box(&self) -> BoundingBox;

    /// Parent element, `None` for the root or a detached element.
    fn parent(&self) -> Option<Self>;

    /// Element children, in document order.
    fn children(&self) -> Vec<Self>;

    /// Text content of this element and its descendants.
    fn text_content(&self) -> String;

    /// Best-effort computed style. Hosts may fail here.
    fn computed_style(&self) -> Result<ComputedStyle, StyleError>;

    /// Value of the first attribute with this name (ASCII case-insensitive).
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// The `id` attribute, empty when absent.
    fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    /// Class tokens, deduplicated, in first-seen order.
    fn class_list(&self) -> Vec<String> {
        let mut classes: Vec<String> = Vec::new();
        if let Some(raw) = self.attribute("class") {
            for token in raw.split_ascii_whitespace() {
                if !classes.iter().any(|c| c == token) {
                    classes.push(token.to_string());
                }
            }
        }
        classes
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().iter().any(|c| c == class)
    }

    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Number of parent hops until the root.
    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(parent) = current {
            depth += 1;
            current = parent.parent();
        }
        depth
    }

    /// This element followed by each ancestor up to the root.
    fn ancestors_inclusive(&self) -> Vec<Self> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(parent) = current {
            current = parent.parent();
            chain.push(parent);
        }
        chain
    }
}

/// Source of hit-test information for a document.
pub trait HitTestProvider {
    type Element: ElementHandle;

    /// Every element in the hit-test stack at `point`, topmost first.
    fn elements_at(&self, point: Point) -> Vec<Self::Element>;

    /// Whether `element` really covers `point`.
    fn contains_point(&self, element: &Self::Element, point: Point) -> bool {
        element.bounding_box().contains(point)
    }

    /// Element returned when nothing eligible is under the point (usually `body`).
    fn fallback_element(&self) -> Self::Element;
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
