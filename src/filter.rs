//! Filter stages: rules that narrow (or reorder) a collection, staged before
//! any sorting.
//!
//! Reusable rules get a named type implementing [`FilterRule`]; one-off rules
//! wrap a closure through [`Filter::quick`]. Either way, what a
//! [`ViewList`](crate::ViewList) registers is a [`Filter`] handle, which
//! pairs the rule with the identity used for duplicate detection and removal.

use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

/// Behavior contract for a filter stage.
///
/// `apply` maps a collection to the collection of kept elements. The default
/// implementation passes its input through unchanged, so an implementor that
/// overrides nothing is a harmless no-op and partial implementations of
/// richer rule types stay safe.
///
/// Failures inside an implementation are not caught by the container; a
/// panicking rule propagates to whoever computed the view.
pub trait FilterRule<T> {
    /// Applies this rule to a collection, returning the kept elements.
    fn apply(&self, collection: Vec<T>) -> Vec<T> {
        collection
    }
}

/// A filter built from a plain closure, for rules that don't warrant a named
/// type.
pub struct QuickFilter<T> {
    closure: Box<dyn Fn(Vec<T>) -> Vec<T>>,
}

impl<T> QuickFilter<T> {
    pub fn new(closure: impl Fn(Vec<T>) -> Vec<T> + 'static) -> Self {
        Self {
            closure: Box::new(closure),
        }
    }
}

impl<T> FilterRule<T> for QuickFilter<T> {
    fn apply(&self, collection: Vec<T>) -> Vec<T> {
        (self.closure)(collection)
    }
}

/// A registrable filter: a [`FilterRule`] paired with a stable identity.
///
/// Registries deduplicate by this identity, never by comparing behavior.
/// Cloning copies the handle: both copies share the rule object and the
/// identity, so a clone can remove the original registration or register the
/// same filter in several lists. Wrapping an identical rule in a *new*
/// `Filter` yields a distinct identity.
pub struct Filter<T> {
    id: Uuid,
    rule: Rc<dyn FilterRule<T>>,
}

impl<T> Filter<T> {
    /// Wraps a rule into a registrable filter with a fresh identity.
    pub fn new(rule: impl FilterRule<T> + 'static) -> Self {
        Self {
            id: Uuid::new_v4(),
            rule: Rc::new(rule),
        }
    }

    /// Builds a filter from a closure.
    ///
    /// Every call mints a new identity, even for behaviorally identical
    /// closures; quick filters are never deduplicated against each other.
    pub fn quick(closure: impl Fn(Vec<T>) -> Vec<T> + 'static) -> Self
    where
        T: 'static,
    {
        Self::new(QuickFilter::new(closure))
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

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            rule: Rc::clone(&self.rule),
        }
    }
}

/// Identity equality: two handles are equal when they refer to the same
/// registered instance, regardless of behavior.
impl<T> PartialEq for Filter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Filter<T> {}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("id", &self.id).finish()
    }
}
