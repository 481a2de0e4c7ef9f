//! Lookup - the frozen multi-key index over one rendered document
//!
//! Built with a single pre-order walk of the tree. Every element is filed
//! under each [`LookupKind`] it has a key for, so queries never touch the
//! tree again.

use std::collections::HashMap;
use std::fmt;

use domdex_dom::{Document, ElementData, InternedString, NodeId, StringInterner};

use crate::{Config, Element, GetAll, GetFirst, GetOnly};

/// Tag name of the element a partial include renders as
pub const PARTIAL_TAG: &str = "partial";
/// Attribute on [`PARTIAL_TAG`] holding the partial's name
pub const PARTIAL_NAME_ATTRIBUTE: &str = "name";

/// Which key a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// `id` attribute
    Id,
    /// Tag name
    Type,
    /// Test attribute (`data-testid` unless configured otherwise)
    TestId,
    /// `name` of a `<partial>` include
    PartialName,
    /// `asp-for` attribute
    AspFor,
    /// `asp-action` attribute
    AspAction,
    /// `asp-controller` attribute
    AspController,
}

impl LookupKind {
    /// Every kind, in index order
    pub const ALL: [LookupKind; 7] = [
        LookupKind::Id,
        LookupKind::Type,
        LookupKind::TestId,
        LookupKind::PartialName,
        LookupKind::AspFor,
        LookupKind::AspAction,
        LookupKind::AspController,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Attribute this kind is keyed on, if it is keyed on an attribute at all
    fn attribute(self, config: &Config) -> Option<&str> {
        match self {
            LookupKind::Id => Some("id"),
            LookupKind::Type => None,
            LookupKind::TestId => Some(&config.test_id_attribute),
            LookupKind::PartialName => Some(PARTIAL_NAME_ATTRIBUTE),
            LookupKind::AspFor => Some("asp-for"),
            LookupKind::AspAction => Some("asp-action"),
            LookupKind::AspController => Some("asp-controller"),
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupKind::Id => "id",
            LookupKind::Type => "type",
            LookupKind::TestId => "test id",
            LookupKind::PartialName => "partial name",
            LookupKind::AspFor => "asp-for",
            LookupKind::AspAction => "asp-action",
            LookupKind::AspController => "asp-controller",
        };
        f.write_str(name)
    }
}

/// Per-kind attribute names resolved against one document's interner
struct KeySources {
    attributes: [Option<InternedString>; 7],
    partial_tag: Option<InternedString>,
}

impl KeySources {
    fn resolve(interner: &StringInterner, config: &Config) -> Self {
        let mut attributes = [None; 7];
        for kind in LookupKind::ALL {
            // Parsed attribute names are always lowercase
            attributes[kind.index()] = kind
                .attribute(config)
                .and_then(|a| interner.lookup(&a.to_ascii_lowercase()));
        }
        Self {
            attributes,
            partial_tag: interner.lookup(PARTIAL_TAG),
        }
    }

    fn key<'t>(&self, kind: LookupKind, elem: &'t ElementData, interner: &'t StringInterner) -> Option<&'t str> {
        match kind {
            LookupKind::Type => Some(interner.get(elem.name.local)),
            LookupKind::PartialName if Some(elem.name.local) != self.partial_tag => None,
            _ => elem.get_attr(self.attributes[kind.index()]?),
        }
    }
}

/// Frozen index over one rendered document
#[derive(Debug)]
pub struct Lookup {
    document: Document,
    indices: [HashMap<String, Vec<NodeId>>; 7],
}

impl Lookup {
    /// Index a document with the default config
    pub fn new(document: Document) -> Self {
        Self::with_config(document, &Config::default())
    }

    /// Index a document
    pub fn with_config(document: Document, config: &Config) -> Self {
        let mut indices: [HashMap<String, Vec<NodeId>>; 7] = Default::default();

        let tree = document.tree();
        let interner = tree.interner();
        let sources = KeySources::resolve(interner, config);

        for (id, node) in tree.descendants(document.root()) {
            let Some(elem) = node.as_element() else {
                continue;
            };
            for kind in LookupKind::ALL {
                if let Some(key) = sources.key(kind, elem, interner) {
                    indices[kind.index()]
                        .entry(key.to_string())
                        .or_default()
                        .push(id);
                }
            }
        }

        tracing::debug!(
            view = document.view(),
            ids = indices[LookupKind::Id.index()].len(),
            types = indices[LookupKind::Type.index()].len(),
            test_ids = indices[LookupKind::TestId.index()].len(),
            partials = indices[LookupKind::PartialName.index()].len(),
            "Indexed document"
        );

        Self { document, indices }
    }

    /// All elements filed under `(kind, key)`, in document order.
    /// Unknown keys give an empty list.
    pub fn query(&self, kind: LookupKind, key: &str) -> Vec<Element<'_>> {
        self.indices[kind.index()]
            .get(key)
            .map(|ids| {
                ids.iter()
                    .filter_map(|&id| Element::new(&self.document, id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of elements filed under `(kind, key)`
    pub fn count(&self, kind: LookupKind, key: &str) -> usize {
        self.indices[kind.index()].get(key).map_or(0, Vec::len)
    }

    /// Distinct keys present for `kind`, sorted
    pub fn keys(&self, kind: LookupKind) -> Vec<&str> {
        let mut keys: Vec<&str> = self.indices[kind.index()].keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The indexed document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All-matches access
    pub fn get_all(&self) -> GetAll<'_> {
        GetAll::new(self)
    }

    /// First-match access
    pub fn get_first(&self) -> GetFirst<'_> {
        GetFirst::new(self)
    }

    /// Unique-match access
    pub fn get_only(&self) -> GetOnly<'_> {
        GetOnly::new(self)
    }
}
