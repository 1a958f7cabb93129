//! Element handles into a [`Document`].

use std::fmt;
use std::ptr;

use inspector_protocols::{Attribute, BoundingBox, ComputedStyle, ElementHandle, StyleError};

use crate::document::{Document, NodeId};

/// Borrowed handle to one element. Equality is node identity within the same
/// document instance.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    node: NodeId,
}

impl<'a> ElementRef<'a> {
    pub(crate) fn new(doc: &'a Document, node: NodeId) -> Self {
        Self { doc, node }
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Paint order recorded in the snapshot.
    pub fn z_index(&self) -> i32 {
        self.doc.node(self.node).z_index
    }

    fn collect_text(&self, out: &mut String) {
        let node = self.doc.node(self.node);
        out.push_str(&node.text);
        for child in &node.children {
            ElementRef::new(self.doc, *child).collect_text(out);
        }
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.doc, other.doc) && self.node == other.node
    }
}

impl Eq for ElementRef<'_> {}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.doc.node(self.node);
        write!(f, "<{}", node.tag)?;
        let id = self.id();
        if !id.is_empty() {
            write!(f, "#{}", id)?;
        }
        for class in self.class_list() {
            write!(f, ".{}", class)?;
        }
        write!(f, "> @{}", self.node.index())
    }
}

impl ElementHandle for ElementRef<'_> {
    fn tag_name(&self) -> String {
        self.doc.node(self.node).tag.clone()
    }

    fn attributes(&self) -> Vec<Attribute> {
        self.doc.node(self.node).attributes.clone()
    }

    fn bounding_box(&self) -> BoundingBox {
        self.doc.node(self.node).rect
    }

    fn parent(&self) -> Option<Self> {
        self.doc
            .node(self.node)
            .parent
            .map(|parent| ElementRef::new(self.doc, parent))
    }

    fn children(&self) -> Vec<Self> {
        self.doc
            .node(self.node)
            .children
            .iter()
            .map(|child| ElementRef::new(self.doc, *child))
            .collect()
    }

    fn child_count(&self) -> usize {
        self.doc.node(self.node).children.len()
    }

    fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn computed_style(&self) -> Result<ComputedStyle, StyleError> {
        let node = self.doc.node(self.node);
        node.style.clone().ok_or_else(|| {
            StyleError::Unavailable(format!("no computed style recorded for <{}>", node.tag))
        })
    }
}
