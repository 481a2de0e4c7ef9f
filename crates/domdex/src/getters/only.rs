//! Unique match

use crate::{Element, Getter, Lookup, LookupError, LookupKind};

/// The one matching element.
///
/// - no match: `Ok(None)`
/// - one match: `Ok(Some(element))`
/// - more: [`LookupError::TooManyElementsFound`]
///
/// ```rust
/// use domdex::{Getter, LookupError, LookupKind, Template};
///
/// let page = Template::from_markup(r#"<div id="div-1">A</div><div id="div-1">B</div>"#);
/// assert_eq!(
///     page.get_only().by_id("div-1"),
///     Err(LookupError::TooManyElementsFound {
///         kind: LookupKind::Id,
///         key: "div-1".to_string(),
///         count: 2,
///     })
/// );
/// assert_eq!(page.get_only().by_id("not-a-real-id"), Ok(None));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GetOnly<'a> {
    lookup: &'a Lookup,
}

impl<'a> GetOnly<'a> {
    pub(crate) fn new(lookup: &'a Lookup) -> Self {
        Self { lookup }
    }
}

impl<'a> Getter for GetOnly<'a> {
    type Output = Result<Option<Element<'a>>, LookupError>;

    fn by(&self, kind: LookupKind, key: &str) -> Self::Output {
        let mut found = self.lookup.query(kind, key);
        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            count => {
                tracing::debug!(%kind, key, count, "Ambiguous unique lookup");
                Err(LookupError::TooManyElementsFound {
                    kind,
                    key: key.to_string(),
                    count,
                })
            }
        }
    }
}
