//! Ordered element selection.

use inspector_protocols::{ElementHandle, InspectorMessage};

/// Selected elements in selection order, without duplicates.
///
/// Identity is the handle's `PartialEq`. Position in the set is the
/// element's ordinal when serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet<E> {
    elements: Vec<E>,
}

impl<E> Default for SelectionSet<E> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<E: ElementHandle> SelectionSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element`. Returns `false` if it was already selected.
    pub fn insert(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Removes `element`. Returns `false` if it was not selected.
    pub fn remove(&mut self, element: &E) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, element: &E) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    /// Adds `element`, or removes it if already selected. Returns whether it
    /// is selected afterwards.
    pub fn toggle(&mut self, element: E) -> bool {
        if self.remove(&element) {
            false
        } else {
            self.elements.push(element);
            true
        }
    }

    /// Click-to-select: a selected element is deselected, any other element
    /// becomes the only selection. Returns whether it is selected afterwards.
    pub fn select_exclusive(&mut self, element: E) -> bool {
        if self.remove(&element) {
            return false;
        }
        self.elements.clear();
        self.elements.push(element);
        true
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<E> {
        self.elements
    }

    /// `ELEMENT_INSPECTOR_SELECTED` message for the current selection.
    pub fn to_selected_message(&self) -> InspectorMessage {
        InspectorMessage::selected(&self.elements)
    }

    /// `ELEMENT_INSPECTOR_PROMPT` message carrying `prompt`.
    pub fn to_prompt_message(&self, prompt: impl Into<String>) -> InspectorMessage {
        InspectorMessage::prompt(prompt, &self.elements)
    }
}

impl<E: ElementHandle> FromIterator<E> for SelectionSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl<E: ElementHandle> Extend<E> for SelectionSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, E> IntoIterator for &'a SelectionSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
