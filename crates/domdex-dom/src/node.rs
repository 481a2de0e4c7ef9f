//! DOM Node - Compact representation
//!
//! Nodes link to each other through `NodeId`s into the owning arena,
//! never through pointers.

use crate::{InternedString, NodeId};

/// Qualified element or attribute name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualName {
    pub ns: InternedString,
    pub local: InternedString,
}

impl QualName {
    pub fn new(ns: InternedString, local: InternedString) -> Self {
        Self { ns, local }
    }
}

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data if this is an element
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: InternedString },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name (qualified)
    pub name: QualName,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
    /// Cached id attribute value
    pub id: Option<String>,
    /// Cached class tokens, source order, duplicates kept
    pub classes: Vec<String>,
}

impl ElementData {
    pub fn new(name: QualName) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Get an attribute value by interned local name
    pub fn get_attr(&self, name: InternedString) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.local == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, refreshing the id/class caches
    pub fn set_attr(&mut self, name: QualName, local: &str, value: String) {
        match local {
            "id" => self.id = Some(value.clone()),
            "class" => {
                self.classes = value.split_whitespace().map(str::to_string).collect();
            }
            _ => {}
        }

        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value;
            return;
        }
        self.attrs.push(Attribute { name, value });
    }

    /// Remove an attribute by interned local name, clearing the id/class caches
    pub fn remove_attr(&mut self, name: InternedString, local: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name.local == name)?;
        match local {
            "id" => self.id = None,
            "class" => self.classes.clear(),
            _ => {}
        }
        Some(self.attrs.remove(pos).value)
    }
}

/// Attribute
#[derive(Debug)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(local: u32) -> QualName {
        QualName::new(InternedString::EMPTY, InternedString(local))
    }

    #[test]
    fn test_class_tokens_keep_order_and_duplicates() {
        let mut elem = ElementData::new(name(1));
        elem.set_attr(name(2), "class", "  b a\tb  ".to_string());
        assert_eq!(elem.classes, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_set_attr_replaces_value() {
        let mut elem = ElementData::new(name(1));
        elem.set_attr(name(3), "id", "first".to_string());
        elem.set_attr(name(3), "id", "second".to_string());
        assert_eq!(elem.attrs.len(), 1);
        assert_eq!(elem.get_attr(InternedString(3)), Some("second"));
        assert_eq!(elem.id.as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = ElementData::new(name(1));
        elem.set_attr(name(3), "id", "main".to_string());
        elem.set_attr(name(4), "title", "t".to_string());

        assert_eq!(elem.remove_attr(InternedString(3), "id"), Some("main".to_string()));
        assert_eq!(elem.remove_attr(InternedString(3), "id"), None);
        assert_eq!(elem.id, None);
        assert_eq!(elem.attrs.len(), 1);
        assert_eq!(elem.get_attr(InternedString(4)), Some("t"));
    }
}
