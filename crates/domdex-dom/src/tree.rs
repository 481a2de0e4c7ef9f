//! DOM Tree (arena-based allocation)

use crate::{ElementData, InternedString, Node, NodeData, NodeId, StringInterner};

/// Arena-based DOM tree.
///
/// Node 0 is always the document node; every other node is reachable from it
/// once appended.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeData::Document)],
            interner: StringInterner::new(),
        }
    }

    /// Root (document) node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, document node included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    /// Resolve an interned name
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::detached(data));
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, data: ElementData) -> NodeId {
        self.push(NodeData::Element(data))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Comment(text.to_string()))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        let name = self.interner.intern(name);
        self.push(NodeData::Doctype { name })
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }

        let prev_last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev_last;
            node.next_sibling = NodeId::NONE;
        }

        if prev_last.is_valid() {
            self.nodes[prev_last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Iterate over direct children in document order
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Pre-order walk of everything below `root`, `root` itself excluded
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if let Some(node) = self.get(root) {
            if node.first_child.is_valid() {
                stack.push(node.first_child);
            }
        }
        Descendants { tree: self, stack }
    }

    /// Concatenated text of every text node below `id`, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|(_, node)| node.as_text())
            .collect()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Sibling iterator returned by [`DomTree::children`]
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator returned by [`DomTree::descendants`]
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        // Sibling goes under the child so the child subtree is walked first
        if node.next_sibling.is_valid() {
            self.stack.push(node.next_sibling);
        }
        if node.first_child.is_valid() {
            self.stack.push(node.first_child);
        }
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QualName;

    fn element(tree: &mut DomTree, tag: &str) -> NodeId {
        let local = tree.interner_mut().intern(tag);
        tree.create_element(ElementData::new(QualName::new(InternedString::EMPTY, local)))
    }

    fn tag_of(tree: &DomTree, id: NodeId) -> &str {
        let elem = tree.get(id).and_then(Node::as_element).unwrap();
        tree.resolve(elem.name.local)
    }

    #[test]
    fn test_descendants_are_document_order() {
        let mut tree = DomTree::new();
        let div = element(&mut tree, "div");
        let p = element(&mut tree, "p");
        let span = element(&mut tree, "span");
        let ul = element(&mut tree, "ul");
        tree.append_child(tree.root(), div);
        tree.append_child(div, p);
        tree.append_child(p, span);
        tree.append_child(div, ul);

        let tags: Vec<_> = tree
            .descendants(tree.root())
            .map(|(id, _)| tag_of(&tree, id))
            .collect();
        assert_eq!(tags, vec!["div", "p", "span", "ul"]);
    }

    #[test]
    fn test_text_content_concatenates() {
        let mut tree = DomTree::new();
        let div = element(&mut tree, "div");
        let b = element(&mut tree, "b");
        tree.append_child(tree.root(), div);
        let hello = tree.create_text("Hello, ");
        tree.append_child(div, hello);
        tree.append_child(div, b);
        let world = tree.create_text("World");
        tree.append_child(b, world);

        assert_eq!(tree.text_content(div), "Hello, World");
        assert_eq!(tree.text_content(b), "World");
    }

    #[test]
    fn test_children_in_order() {
        let mut tree = DomTree::new();
        let a = element(&mut tree, "a");
        let b = element(&mut tree, "b");
        tree.append_child(tree.root(), a);
        tree.append_child(tree.root(), b);

        let ids: Vec<_> = tree.children(tree.root()).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_append_to_self_is_ignored() {
        let mut tree = DomTree::new();
        let a = element(&mut tree, "a");
        tree.append_child(a, a);
        assert!(!tree.get(a).unwrap().first_child.is_valid());
    }
}
