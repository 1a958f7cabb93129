//! # Inspector Core
//!
//! The three pieces of the element inspector that do real work:
//!
//! - [`ElementResolver`] - the most specific element under a pointer
//! - [`ElementSerializer`] - a deterministic context block per element
//! - [`PromptComposer`] - one prompt document from a selection and a goal
//!
//! plus the [`SelectionSet`] that ties them together, exclusion
//! [`Selector`]s and the XPath/offset helpers in [`geometry`].
//!
//! Everything here is host-agnostic: elements come in through
//! [`inspector_protocols::ElementHandle`] and hit tests through
//! [`inspector_protocols::HitTestProvider`].

pub mod composer;
pub mod geometry;
pub mod resolver;
pub mod selection;
pub mod selector;
pub mod serializer;

pub use composer::{
    compose_prompt, ContextSnippet, PluginContext, PromptComposer, PromptRequest, SnippetContent,
    SnippetProducer, NO_SELECTION_NOTICE,
};
pub use geometry::{is_element_at_point, offsets_from_point, xpath_for, PointOffsets};
pub use resolver::{resolve_most_specific, ElementResolver, ExclusionRules};
pub use selection::SelectionSet;
pub use selector::Selector;
pub use serializer::{
    element_attributes, serialize_element, ElementSerializer, SerializerOptions,
    NO_PARENT_NOTICE, STYLES_UNAVAILABLE,
};
