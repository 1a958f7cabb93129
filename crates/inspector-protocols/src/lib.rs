//! # Inspector Protocols
//!
//! Protocol definitions for the element inspector.
//! Contains only interface definitions and plain data types - no algorithms.
//!
//! ## Core Traits
//!
//! - [`ElementHandle`] - Read-only view of one element in a host tree
//! - [`HitTestProvider`] - Source of the front-to-back element stack at a point
//!
//! ## Wire Types
//!
//! - [`ElementData`] - Plain-data element summary for cross-document messaging
//! - [`InspectorMessage`] - Messages posted to a parent frame

pub mod element;
pub mod error;
pub mod message;
pub mod types;

pub use element::{ElementHandle, HitTestProvider};
pub use error::{ProtocolError, SelectorError, StyleError};
pub use message::{ElementData, InspectorMessage};
pub use types::*;
