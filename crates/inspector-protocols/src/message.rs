//! Cross-document wire format.
//!
//! When the inspector runs inside an iframe, the host forwards selections and
//! prompts to the parent frame as JSON. The field names are fixed by existing
//! parent-frame integrations; only the data shape lives here, not the transport.

use serde::{Deserialize, Serialize};

use crate::element::ElementHandle;
use crate::error::ProtocolError;
use crate::types::Attribute;

/// Plain-data summary of one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    /// Tag name exactly as the host reports it.
    pub tag_name: String,
    pub id: String,
    /// Raw `class` attribute value.
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ElementData {
    pub fn from_element<E: ElementHandle>(element: &E) -> Self {
        Self {
            tag_name: element.tag_name(),
            id: element.id(),
            class_name: element.attribute("class").unwrap_or_default(),
            text_content: Some(element.text_content().trim().to_string()),
            attributes: element.attributes(),
        }
    }
}

/// Messages posted from the inspector to its parent frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum InspectorMessage {
    /// The selection changed.
    #[serde(rename = "ELEMENT_INSPECTOR_SELECTED")]
    Selected { elements: Vec<ElementData> },

    /// A prompt was generated for the current selection.
    #[serde(rename = "ELEMENT_INSPECTOR_PROMPT")]
    Prompt {
        prompt: String,
        elements: Vec<ElementData>,
    },
}

impl InspectorMessage {
    pub fn selected<'a, E, I>(elements: I) -> Self
    where
        E: ElementHandle + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Self::Selected {
            elements: elements.into_iter().map(ElementData::from_element).collect(),
        }
    }

    pub fn prompt<'a, E, I>(prompt: impl Into<String>, elements: I) -> Self
    where
        E: ElementHandle + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Self::Prompt {
            prompt: prompt.into(),
            elements: elements.into_iter().map(ElementData::from_element).collect(),
        }
    }

    /// Elements carried by this message.
    pub fn elements(&self) -> &[ElementData] {
        match self {
            Self::Selected { elements } | Self::Prompt { elements, .. } => elements,
        }
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
