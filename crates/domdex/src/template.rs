//! Template - render a view and index the result

use domdex_dom::{Document, DomTree, Node, NodeId};
use domdex_html::HtmlParser;
use serde::Serialize;

use crate::lookup::PARTIAL_TAG;
use crate::render::{RenderedView, SLOT_ATTRIBUTE};
use crate::{Config, GetAll, GetFirst, GetOnly, Lookup, RenderError, Renderer, ViewRenderer};

/// Entry point for rendering views into queryable documents
pub struct Template;

impl Template {
    /// Render `view` from the configured view folder with `model`, then index it
    pub fn render<M: Serialize + ?Sized>(
        view: &str,
        config: &Config,
        model: &M,
    ) -> Result<RenderedTemplate, RenderError> {
        Self::render_with(&ViewRenderer::new(config), view, config, model)
    }

    /// Same as [`Template::render`] with a caller-supplied renderer
    pub fn render_with<M: Serialize + ?Sized>(
        renderer: &dyn Renderer,
        view: &str,
        config: &Config,
        model: &M,
    ) -> Result<RenderedTemplate, RenderError> {
        let model = serde_json::to_value(model)?;
        let rendered = renderer.render(view, &model)?;
        let document = build_document(&rendered, view);
        Ok(RenderedTemplate {
            lookup: Lookup::with_config(document, config),
            markup: rendered.to_markup(),
        })
    }

    /// Index already-rendered markup
    pub fn from_markup(markup: &str) -> RenderedTemplate {
        Self::from_markup_with(markup, &Config::default())
    }

    pub fn from_markup_with(markup: &str, config: &Config) -> RenderedTemplate {
        RenderedTemplate {
            lookup: Lookup::with_config(domdex_html::parse(markup), config),
            markup: markup.to_string(),
        }
    }
}

/// A rendered, indexed view
#[derive(Debug)]
pub struct RenderedTemplate {
    lookup: Lookup,
    markup: String,
}

impl RenderedTemplate {
    pub fn get_all(&self) -> GetAll<'_> {
        self.lookup.get_all()
    }

    pub fn get_first(&self) -> GetFirst<'_> {
        self.lookup.get_first()
    }

    pub fn get_only(&self) -> GetOnly<'_> {
        self.lookup.get_only()
    }

    /// Markup as rendered, partials inlined, before parsing
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }
}

/// Parse a rendered view, then attach each partial's own parse under its
/// `<partial>` element
fn build_document(view: &RenderedView, name: &str) -> Document {
    let parser = HtmlParser::new();
    let (markup, partials) = view.slotted_markup();
    let mut document = parser.parse_view(&markup, name);
    let root = document.root();
    graft_partials(&parser, document.tree_mut(), root, &partials);
    document
}

fn graft_partials(parser: &HtmlParser, tree: &mut DomTree, under: NodeId, partials: &[&RenderedView]) {
    if partials.is_empty() {
        return;
    }
    let Some(slot_attr) = tree.interner().lookup(SLOT_ATTRIBUTE) else {
        return;
    };
    let partial_tag = tree.interner_mut().intern(PARTIAL_TAG);

    let slots: Vec<(NodeId, usize)> = tree
        .descendants(under)
        .filter_map(|(id, node)| {
            let slot = node.as_element()?.get_attr(slot_attr)?.parse().ok()?;
            Some((id, slot))
        })
        .collect();

    for (id, slot) in slots {
        let Some(elem) = tree.get_mut(id).and_then(Node::as_element_mut) else {
            continue;
        };
        elem.remove_attr(slot_attr, SLOT_ATTRIBUTE);
        elem.name.local = partial_tag;

        let Some(content) = partials.get(slot) else {
            continue;
        };
        let (markup, nested) = content.slotted_markup();
        parser.parse_fragment_into(&markup, tree, id);
        graft_partials(parser, tree, id, &nested);
    }
    tracing::trace!(count = partials.len(), "Attached partials");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Getter;

    #[test]
    fn test_view_without_partials() {
        let view = RenderedView::new("<ul><li>a</li><li>b</li></ul>");
        let document = build_document(&view, "List");
        assert_eq!(document.view(), "List");
        assert!(document.tree().interner().lookup(SLOT_ATTRIBUTE).is_none());

        let lookup = Lookup::new(document);
        assert_eq!(lookup.get_all().by_type("li").len(), 2);
        assert!(lookup.get_all().by_type("partial").is_empty());
    }
}
