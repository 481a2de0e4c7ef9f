//! Element - read-only view of one indexed node

use std::fmt;

use domdex_dom::{Document, ElementData, NodeId};

/// One element of a rendered view.
///
/// Borrowed from the [`Lookup`](crate::Lookup) that produced it; two
/// `Element`s are equal when they wrap the same node of the same document.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    document: &'a Document,
    id: NodeId,
    data: &'a ElementData,
}

impl<'a> Element<'a> {
    /// Wrap `id` if it is an element node of `document`
    pub(crate) fn new(document: &'a Document, id: NodeId) -> Option<Self> {
        let data = document.tree().get(id)?.as_element()?;
        Some(Self { document, id, data })
    }

    /// Tag name, e.g. `div`
    pub fn tag(&self) -> &'a str {
        self.document.tree().resolve(self.data.name.local)
    }

    /// Text of this element and all its descendants, in document order
    pub fn text(&self) -> String {
        self.document.tree().text_content(self.id)
    }

    /// Class tokens in source order, duplicates kept
    pub fn classes(&self) -> Vec<&'a str> {
        self.data.classes.iter().map(String::as_str).collect()
    }

    /// `id` attribute, if any
    pub fn id(&self) -> Option<&'a str> {
        self.data.id.as_deref()
    }

    /// Attribute value by name (names are matched lowercased)
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        let interner = self.document.tree().interner();
        let name = interner
            .lookup(name)
            .or_else(|| interner.lookup(&name.to_ascii_lowercase()))?;
        self.data.get_attr(name)
    }

    /// Arena id of the wrapped node
    pub fn node_id(&self) -> NodeId {
        self.id
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.document, other.document)
    }
}

impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag())
            .field("id", &self.id())
            .field("classes", &self.classes())
            .field("node", &self.id)
            .finish()
    }
}
