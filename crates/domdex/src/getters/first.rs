//! First match

use crate::{Element, Getter, Lookup, LookupKind};

/// The first matching element in document order, if any.
/// Further matches are ignored; use [`GetAll`](crate::GetAll) to count them.
#[derive(Debug, Clone, Copy)]
pub struct GetFirst<'a> {
    lookup: &'a Lookup,
}

impl<'a> GetFirst<'a> {
    pub(crate) fn new(lookup: &'a Lookup) -> Self {
        Self { lookup }
    }
}

impl<'a> Getter for GetFirst<'a> {
    type Output = Option<Element<'a>>;

    fn by(&self, kind: LookupKind, key: &str) -> Self::Output {
        self.lookup.query(kind, key).into_iter().next()
    }
}
