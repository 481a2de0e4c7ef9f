//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the arena tree.

use domdex_dom::{Document, DomTree, ElementData, NodeId, QualName, INLINE_VIEW};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, parse_fragment, LocalName, Namespace};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// HTML5 parser
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser {
    /// Keep text nodes that contain only whitespace
    keep_whitespace: bool,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self {
            keep_whitespace: false,
        }
    }

    /// Keep whitespace-only text nodes instead of dropping them
    pub fn keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_view(html, INLINE_VIEW)
    }

    /// Parse HTML rendered from `view` into a Document
    pub fn parse_view(&self, html: &str, view: &str) -> Document {
        tracing::debug!("Parsing rendered view: {}", view);

        // html5ever recovers from any malformed input, so this cannot fail
        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut document = Document::empty(view);
        let root = document.root();
        self.convert_node(&dom.document, document.tree_mut(), root);

        tracing::debug!("Parsed {} nodes from {}", document.tree().len(), view);
        document
    }

    /// Parse an HTML fragment and append its nodes under `parent`.
    ///
    /// The fragment is parsed in a `<template>` context, which accepts any
    /// content model (table rows, list items, block content) without moving
    /// nodes around.
    pub fn parse_fragment_into(&self, html: &str, tree: &mut DomTree, parent: NodeId) {
        let context = html5ever::QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from("template"),
        );
        let dom = parse_fragment(RcDom::default(), Default::default(), context, Vec::new(), false)
            .one(html);

        // The fragment parser wraps its output in a single `html` element
        for wrapper in dom.document.children.borrow().iter() {
            for child in wrapper.children.borrow().iter() {
                self.convert_node(child, tree, parent);
            }
        }
        tracing::trace!("Parsed fragment into node {:?}", parent);
    }

    /// Convert an RcDom node into the arena tree
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let id = tree.create_doctype(name);
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if self.keep_whitespace || !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id);
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let ns = tree.interner_mut().intern(&name.ns);
                let local = tree.interner_mut().intern(&name.local);
                let mut elem = ElementData::new(QualName::new(ns, local));

                for attr in attrs.borrow().iter() {
                    let attr_ns = tree.interner_mut().intern(&attr.name.ns);
                    let attr_local = tree.interner_mut().intern(&attr.name.local);
                    elem.set_attr(
                        QualName::new(attr_ns, attr_local),
                        &attr.name.local,
                        attr.value.to_string(),
                    );
                }

                let id = tree.create_element(elem);
                tree.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {
                // Not meaningful in rendered HTML views
            }
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
