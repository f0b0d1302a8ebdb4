//! Sort stages: rules that reorder a collection, staged after all filters.
//!
//! Same shape as the filter side. A sort rule's contract is "produce a
//! reordering", but nothing enforces that — the role distinction lives in
//! where the container stages it, not in the type.

use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

/// Behavior contract for a sort stage. The default implementation leaves the
/// collection untouched.
pub trait SortRule<T> {
    /// Applies this rule to a collection, returning the reordered elements.
    fn apply(&self, collection: Vec<T>) -> Vec<T> {
        collection
    }
}

/// A sort descriptor built from a plain closure.
pub struct QuickSortDescriptor<T> {
    closure: Box<dyn Fn(Vec<T>) -> Vec<T>>,
}

impl<T> QuickSortDescriptor<T> {
    pub fn new(closure: impl Fn(Vec<T>) -> Vec<T> + 'static) -> Self {
        Self {
            closure: Box::new(closure),
        }
    }
}

impl<T> SortRule<T> for QuickSortDescriptor<T> {
    fn apply(&self, collection: Vec<T>) -> Vec<T> {
        (self.closure)(collection)
    }
}

/// A registrable sort descriptor: a [`SortRule`] paired with a stable
/// identity. Identity semantics match [`Filter`](crate::Filter): clones share
/// the instance, new constructions mint new identities.
pub struct SortDescriptor<T> {
    id: Uuid,
    rule: Rc<dyn SortRule<T>>,
}

impl<T> SortDescriptor<T> {
    /// Wraps a rule into a registrable sort descriptor with a fresh identity.
    pub fn new(rule: impl SortRule<T> + 'static) -> Self {
        Self {
            id: Uuid::new_v4(),
            rule: Rc::new(rule),
        }
    }

    /// Builds a sort descriptor from a closure. Every call mints a new
    /// identity.
    pub fn quick(closure: impl Fn(Vec<T>) -> Vec<T> + 'static) -> Self
    where
        T: 'static,
    {
        Self::new(QuickSortDescriptor::new(closure))
    }

    /// The identity used for duplicate detection and removal.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Runs the underlying rule.
    pub fn apply(&self, collection: Vec<T>) -> Vec<T> {
        self.rule.apply(collection)
    }
}

impl<T> Clone for SortDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            rule: Rc::clone(&self.rule),
        }
    }
}

impl<T> PartialEq for SortDescriptor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for SortDescriptor<T> {}

impl<T> fmt::Debug for SortDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortDescriptor")
            .field("id", &self.id)
            .finish()
    }
}
