//! Query façades over a [`Lookup`](crate::Lookup)
//!
//! All three share one index and differ only in what they make of the
//! matches for a key.

mod all;
mod first;
mod only;

pub use all::GetAll;
pub use first::GetFirst;
pub use only::GetOnly;

use crate::LookupKind;

/// Access mode over the index.
///
/// Implementors supply [`Getter::by`]; the per-kind operations are derived from it.
pub trait Getter {
    /// What a query yields in this access mode
    type Output;

    /// Query the index for `(kind, key)`
    fn by(&self, kind: LookupKind, key: &str) -> Self::Output;

    /// Elements whose `id` is `id`
    fn by_id(&self, id: &str) -> Self::Output {
        self.by(LookupKind::Id, id)
    }

    /// Elements whose tag name is `tag`, e.g. `div`, `main`, `p`
    fn by_type(&self, tag: &str) -> Self::Output {
        self.by(LookupKind::Type, tag)
    }

    /// Elements whose test attribute is `test_id`
    fn by_test_id(&self, test_id: &str) -> Self::Output {
        self.by(LookupKind::TestId, test_id)
    }

    /// `<partial>` includes named `name`
    fn by_partial_name(&self, name: &str) -> Self::Output {
        self.by(LookupKind::PartialName, name)
    }

    /// Elements bound with `asp-for="{model_expression}"`
    fn by_asp_for(&self, model_expression: &str) -> Self::Output {
        self.by(LookupKind::AspFor, model_expression)
    }

    /// Elements bound with `asp-action="{action}"`
    fn by_asp_action(&self, action: &str) -> Self::Output {
        self.by(LookupKind::AspAction, action)
    }

    /// Elements bound with `asp-controller="{controller}"`
    fn by_asp_controller(&self, controller: &str) -> Self::Output {
        self.by(LookupKind::AspController, controller)
    }
}
