//! In-memory DOM snapshots for the element inspector.
//!
//! A snapshot is a JSON tree of element nodes carrying the layout and style
//! data a rendering engine would normally provide: bounding boxes, an
//! optional hit-test box, a paint order and the five computed properties.
//!
//! ```text
//! {
//!   "url": "https://example.test/",
//!   "root": {
//!     "tag": "html",
//!     "rect": {"x": 0, "y": 0, "width": 1280, "height": 720},
//!     "children": [ ... ]
//!   }
//! }
//! ```
//!
//! [`Document`] implements [`HitTestProvider`](inspector_protocols::HitTestProvider)
//! (through `&Document`) and its [`ElementRef`] handles implement
//! [`ElementHandle`](inspector_protocols::ElementHandle), so snapshots can be fed
//! straight into the resolver, serializer and composer.

mod document;
mod element;
mod error;
mod snapshot;

pub use document::{Document, NodeId};
pub use element::ElementRef;
pub use error::SnapshotError;
pub use snapshot::{DocumentSnapshot, NodeSnapshot};

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
