//! All matches

use crate::{Element, Getter, Lookup, LookupKind};

/// Every matching element, in document order.
///
/// Never fails; an unmatched key gives an empty list.
///
/// ```rust
/// use domdex::{Getter, Template};
///
/// let page = Template::from_markup(
///     r#"<p id="example-id">One</p><p>Skip</p><div id="example-id">Two</div>"#,
/// );
/// let found = page.get_all().by_id("example-id");
/// assert_eq!(found.iter().map(|e| e.tag()).collect::<Vec<_>>(), ["p", "div"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GetAll<'a> {
    lookup: &'a Lookup,
}

impl<'a> GetAll<'a> {
    pub(crate) fn new(lookup: &'a Lookup) -> Self {
        Self { lookup }
    }
}

impl<'a> Getter for GetAll<'a> {
    type Output = Vec<Element<'a>>;

    fn by(&self, kind: LookupKind, key: &str) -> Self::Output {
        self.lookup.query(kind, key)
    }
}
