//! Document - High-level document API

use crate::{DomTree, NodeId};

/// View name used for markup that did not come from a view file
pub const INLINE_VIEW: &str = "<inline>";

/// A parsed, rendered view
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    /// View the markup was rendered from
    view: String,
}

impl Document {
    /// Create an empty document (document node only)
    pub fn empty(view: &str) -> Self {
        Self {
            tree: DomTree::new(),
            view: view.to_string(),
        }
    }

    /// Name of the view this document was rendered from
    pub fn view(&self) -> &str {
        &self.view
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Number of element nodes in the document
    pub fn element_count(&self) -> usize {
        self.tree
            .descendants(self.root())
            .filter(|(_, node)| node.is_element())
            .count()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty(INLINE_VIEW)
    }
}
