//! domdex HTML Parser
//!
//! HTML5 parser built on html5ever.
//! Parses rendered markup and converts it to the arena DOM tree.

mod parser;

pub use domdex_dom::{Document, DomTree, Node, NodeId};
pub use parser::HtmlParser;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Parse markup rendered from the named view
pub fn parse_view(html: &str, view: &str) -> Document {
    HtmlParser::new().parse_view(html, view)
}
