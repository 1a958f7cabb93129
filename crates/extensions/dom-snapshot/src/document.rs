//! Arena-backed document built from a [`DocumentSnapshot`].

use std::fs;
use std::path::Path;

use inspector_protocols::{
    Attribute, BoundingBox, ComputedStyle, ElementHandle, HitTestProvider, Point,
};
use tracing::debug;

use crate::element::ElementRef;
use crate::error::SnapshotError;
use crate::snapshot::{DocumentSnapshot, NodeSnapshot};

/// Index of a node in its document, also its pre-order (document) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) text: String,
    pub(crate) rect: BoundingBox,
    pub(crate) hit_rect: Option<BoundingBox>,
    pub(crate) z_index: i32,
    pub(crate) style: Option<ComputedStyle>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// An immutable element tree. The root is always node 0.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    url: Option<String>,
}

impl Document {
    pub fn from_snapshot(snapshot: DocumentSnapshot) -> Result<Self, SnapshotError> {
        let mut nodes = Vec::new();
        Self::push_node(&mut nodes, snapshot.root, None)?;
        debug!("Built document with {} elements", nodes.len());
        Ok(Self {
            nodes,
            url: snapshot.url,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: DocumentSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Load a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        if !path.exists() {
            return Err(SnapshotError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn push_node(
        nodes: &mut Vec<NodeData>,
        snapshot: NodeSnapshot,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SnapshotError> {
        if snapshot.tag.trim().is_empty() {
            return Err(SnapshotError::Invalid(format!(
                "element #{} has an empty tag",
                nodes.len()
            )));
        }

        let id = NodeId(nodes.len());
        nodes.push(NodeData {
            tag: snapshot.tag,
            attributes: snapshot.attributes,
            text: snapshot.text,
            rect: snapshot.rect,
            hit_rect: snapshot.hit_rect,
            z_index: snapshot.z_index,
            style: snapshot.style,
            parent,
            children: Vec::new(),
        });

        for child in snapshot.children {
            let child_id = Self::push_node(nodes, child, Some(id))?;
            nodes[id.0].children.push(child_id);
        }

        Ok(id)
    }

    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    /// Page URL recorded with the snapshot.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> ElementRef<'_> {
        ElementRef::new(self, NodeId(0))
    }

    /// First `body` element in document order.
    pub fn body(&self) -> Option<ElementRef<'_>> {
        self.elements()
            .find(|el| el.tag_name().eq_ignore_ascii_case("body"))
    }

    pub fn get(&self, id: NodeId) -> Option<ElementRef<'_>> {
        (id.0 < self.nodes.len()).then(|| ElementRef::new(self, id))
    }

    /// First element whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.elements().find(|el| el.id() == id)
    }

    /// All elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| ElementRef::new(self, NodeId(i)))
    }

    /// Hit-test stack at `point`: higher `z_index` first, then later-painted
    /// (later in document order) first.
    pub fn hit_test(&self, point: Point) -> Vec<ElementRef<'_>> {
        let mut hits: Vec<(usize, i32)> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.hit_rect.unwrap_or(node.rect).contains(point))
            .map(|(i, node)| (i, node.z_index))
            .collect();

        hits.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        hits.into_iter()
            .map(|(i, _)| ElementRef::new(self, NodeId(i)))
            .collect()
    }
}

impl<'a> HitTestProvider for &'a Document {
    type Element = ElementRef<'a>;

    fn elements_at(&self, point: Point) -> Vec<ElementRef<'a>> {
        let doc: &'a Document = *self;
        doc.hit_test(point)
    }

    fn fallback_element(&self) -> ElementRef<'a> {
        let doc: &'a Document = *self;
        doc.body().unwrap_or_else(|| doc.root())
    }
}
