//! View rendering
//!
//! Turns a view name plus a model into markup. [`ViewRenderer`] understands
//! the small subset of view syntax test fixtures need:
//!
//! - `@Model.Some.Path` is replaced with the HTML-escaped model value
//! - `@@` is a literal `@`
//! - `<partial name="X" />` includes view `X`
//!
//! Partials are not pasted into the surrounding markup. A [`RenderedView`]
//! keeps each include as its own rendered view, and the document builder
//! parses it as a fragment under the `<partial>` element, so HTML parsing
//! rules in the parent (an open `<p>`, a `<table>`) cannot move its content
//! out of the include point.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde_json::Value;

use crate::lookup::{PARTIAL_NAME_ATTRIBUTE, PARTIAL_TAG};
use crate::{Config, RenderError};

/// Attribute tagging a `<partial>` placeholder with its slot while the
/// document is assembled. Removed before the document is indexed.
pub(crate) const SLOT_ATTRIBUTE: &str = "data-domdex-slot";
const PLACEHOLDER_TAG: &str = "template";

/// Produces markup for a view
pub trait Renderer {
    fn render(&self, view: &str, model: &Value) -> Result<RenderedView, RenderError>;
}

/// Markup of one rendered view with its partial includes kept apart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Markup(String),
    Partial {
        /// Attribute text of the `<partial>` start tag as written
        attributes: String,
        content: RenderedView,
    },
}

impl RenderedView {
    /// A view with no partial includes
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Markup(markup.into())],
        }
    }

    fn push_markup(&mut self, markup: &str) {
        if markup.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Markup(last)) => last.push_str(markup),
            _ => self.segments.push(Segment::Markup(markup.to_string())),
        }
    }

    fn push_partial(&mut self, attributes: &str, content: RenderedView) {
        self.segments.push(Segment::Partial {
            attributes: attributes.to_string(),
            content,
        });
    }

    /// Number of partials included directly by this view
    pub fn partial_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Partial { .. }))
            .count()
    }

    /// Flattened markup with every partial inlined in its `<partial>` element
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Markup(markup) => out.push_str(markup),
                Segment::Partial { attributes, content } => {
                    out.push_str(&format!("<{PARTIAL_TAG}{attributes}>"));
                    out.push_str(&content.to_markup());
                    out.push_str(&format!("</{PARTIAL_TAG}>"));
                }
            }
        }
        out
    }

    /// Markup with an empty, slot-tagged placeholder per partial, plus the
    /// content for each slot in order.
    ///
    /// Placeholders are `<template>` elements carrying the partial's
    /// attributes: the HTML parser inserts a template where it stands in any
    /// content model, including directly inside tables.
    pub(crate) fn slotted_markup(&self) -> (String, Vec<&RenderedView>) {
        let mut out = String::new();
        let mut partials = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Markup(markup) => out.push_str(markup),
                Segment::Partial { attributes, content } => {
                    out.push_str(&format!(
                        "<{PLACEHOLDER_TAG}{attributes} {SLOT_ATTRIBUTE}=\"{}\"></{PLACEHOLDER_TAG}>",
                        partials.len()
                    ));
                    partials.push(content);
                }
            }
        }
        (out, partials)
    }
}

impl From<String> for RenderedView {
    fn from(markup: String) -> Self {
        Self::new(markup)
    }
}

impl From<&str> for RenderedView {
    fn from(markup: &str) -> Self {
        Self::new(markup)
    }
}

/// File-backed renderer resolving views against [`Config::view_folder`]
#[derive(Debug, Clone)]
pub struct ViewRenderer {
    view_folder: PathBuf,
    view_extension: String,
    max_partial_depth: usize,
}

impl ViewRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            view_folder: config.view_folder.clone(),
            view_extension: config.view_extension.clone(),
            max_partial_depth: config.max_partial_depth,
        }
    }

    /// `<folder>/<name>`, falling back to `<folder>/<name>.<ext>`
    fn resolve(&self, name: &str) -> PathBuf {
        let path = self.view_folder.join(name);
        if path.is_file() {
            return path;
        }
        let with_ext = self.view_folder.join(format!("{name}.{}", self.view_extension));
        if with_ext.is_file() { with_ext } else { path }
    }

    fn read(&self, name: &str) -> Result<String, RenderError> {
        let path = self.resolve(name);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => RenderError::ViewNotFound { path },
            _ => RenderError::Io { path, source },
        })
    }

    fn render_at(&self, view: &str, model: &Value, depth: usize) -> Result<RenderedView, RenderError> {
        let source = self.read(view)?;
        let substituted = substitute_model(&source, view, model)?;
        self.split_partials(&substituted, view, model, depth)
    }

    fn split_partials(
        &self,
        source: &str,
        view: &str,
        model: &Value,
        depth: usize,
    ) -> Result<RenderedView, RenderError> {
        let malformed = |reason: &str| RenderError::MalformedPartial {
            view: view.to_string(),
            reason: reason.to_string(),
        };

        let mut rendered = RenderedView::default();
        let mut rest = source;

        while let Some(start) = find_partial_open(rest) {
            rendered.push_markup(&rest[..start]);
            let tag_src = &rest[start..];

            let end = tag_end(tag_src).ok_or_else(|| malformed("unterminated <partial> tag"))?;
            let (body, self_closing) = split_self_closing(&tag_src[1 + PARTIAL_TAG.len()..end]);
            let attrs = parse_attributes(body).ok_or_else(|| malformed("unterminated quoted attribute"))?;

            let mut after = &tag_src[end + 1..];
            if !self_closing {
                let close = format!("</{PARTIAL_TAG}>");
                if let Some(end) = after.find(&close) {
                    after = &after[end + close.len()..];
                }
            }

            let name = attrs
                .iter()
                .find(|(attr, _)| attr.eq_ignore_ascii_case(PARTIAL_NAME_ATTRIBUTE))
                .map(|(_, value)| *value)
                .ok_or_else(|| malformed("<partial> without a name attribute"))?
                .filter(|value| !value.is_empty())
                .ok_or_else(|| malformed("<partial> with an empty name"))?;

            if depth >= self.max_partial_depth {
                return Err(RenderError::PartialDepthExceeded {
                    name: name.to_string(),
                    max: self.max_partial_depth,
                });
            }
            tracing::trace!(partial = name, depth, "Rendering partial");
            let content = self.render_at(name, model, depth + 1)?;
            rendered.push_partial(body.trim_end(), content);

            rest = after;
        }

        rendered.push_markup(rest);
        Ok(rendered)
    }
}

impl Renderer for ViewRenderer {
    fn render(&self, view: &str, model: &Value) -> Result<RenderedView, RenderError> {
        tracing::debug!(view, folder = %self.view_folder.display(), "Rendering view");
        self.render_at(view, model, 0)
    }
}

/// Byte offset of the next `<partial` opening tag
fn find_partial_open(source: &str) -> Option<usize> {
    let needle = format!("<{PARTIAL_TAG}");
    let mut offset = 0;
    while let Some(pos) = source[offset..].find(&needle) {
        let at = offset + pos;
        let next = source[at + needle.len()..].chars().next();
        if matches!(next, Some(c) if c.is_whitespace() || c == '/' || c == '>') {
            return Some(at);
        }
        offset = at + needle.len();
    }
    None
}

/// Offset of the `>` closing the start tag at the beginning of `tag`,
/// skipping any `>` inside quoted attribute values
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in tag.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

/// Attribute text of a start tag and whether it ended in `/`
fn split_self_closing(body: &str) -> (&str, bool) {
    let trimmed = body.trim_end();
    match trimmed.strip_suffix('/') {
        Some(inner) => (inner, true),
        None => (trimmed, false),
    }
}

/// `name`, `name=value`, `name="value"` and `name='value'` pairs in source order.
/// `None` when a quoted value is never closed.
fn parse_attributes(body: &str) -> Option<Vec<(&str, Option<&str>)>> {
    let stop = |c: char| c.is_whitespace() || c == '=' || c == '/' || c == '>';
    let mut attrs = Vec::new();
    let mut rest = body;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() {
            return Some(attrs);
        }

        let name_len = rest.find(stop).unwrap_or(rest.len());
        if name_len == 0 {
            // Stray `=`
            rest = &rest[1..];
            continue;
        }
        let name = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        let Some(after_eq) = rest.strip_prefix('=') else {
            attrs.push((name, None));
            continue;
        };
        rest = after_eq.trim_start();

        let value = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let end = rest[1..].find(q)?;
                let value = &rest[1..1 + end];
                rest = &rest[end + 2..];
                value
            }
            _ => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
                    .unwrap_or(rest.len());
                let value = &rest[..end];
                rest = &rest[end..];
                value
            }
        };
        attrs.push((name, Some(value)));
    }
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace `@Model.*` expressions and `@@` escapes
fn substitute_model(source: &str, view: &str, model: &Value) -> Result<String, RenderError> {
    const PREFIX: &str = "@Model.";

    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];

        if let Some(after) = tail.strip_prefix("@@") {
            out.push('@');
            rest = after;
            continue;
        }

        let path_len = tail
            .strip_prefix(PREFIX)
            .map(model_path_len)
            .unwrap_or(0);
        if path_len == 0 {
            out.push('@');
            rest = &tail[1..];
            continue;
        }

        let path = &tail[PREFIX.len()..PREFIX.len() + path_len];
        let value = resolve_path(model, path).ok_or_else(|| RenderError::UnknownProperty {
            view: view.to_string(),
            property: path.to_string(),
        })?;
        escape_into(&mut out, &display_value(value));
        rest = &tail[PREFIX.len() + path_len..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Length of `Ident(.Ident)*` at the start of `s`; a trailing `.` is not consumed
fn model_path_len(s: &str) -> usize {
    let mut len = 0;
    let mut segment_start = true;
    for (i, c) in s.char_indices() {
        if is_ident(c) {
            len = i + c.len_utf8();
            segment_start = false;
        } else if c == '.' && !segment_start {
            segment_start = true;
        } else {
            break;
        }
    }
    len
}

fn resolve_path<'v>(model: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(model, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
