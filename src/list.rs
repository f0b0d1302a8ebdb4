//! The container: one canonical backing list, two ordered strategy
//! registries, and the pipeline that composes them on every read.

use crate::error::{Result, ViewListError};
use crate::filter::Filter;
use crate::iter::ViewIter;
use crate::sort::SortDescriptor;

/// A mutable ordered collection with composable read-time views.
///
/// `ViewList` owns its backing storage exclusively. Filters and sort
/// descriptors are registered independently of storage mutation; every call
/// to [`objects`](ViewList::objects) (or [`iter`](ViewList::iter)) recomputes
/// the view from the current storage and the current registries.
///
/// Registration order is significant: filters run first, in the order they
/// were added, each stage feeding the next; sort descriptors run after all
/// filters, likewise in registration order.
///
/// The design is single-threaded. A `ViewList` has one logical owner; if an
/// embedding application shares one across threads, external synchronization
/// is its responsibility.
#[derive(Debug, Clone)]
pub struct ViewList<T> {
    collection: Vec<T>,
    filters: Vec<Filter<T>>,
    sort_descriptors: Vec<SortDescriptor<T>>,
}

impl<T> ViewList<T> {
    /// Creates an empty list with empty registries.
    pub fn new() -> Self {
        Self {
            collection: Vec::new(),
            filters: Vec::new(),
            sort_descriptors: Vec::new(),
        }
    }

    /// Appends objects to the backing storage, preserving the relative order
    /// of both existing and new elements. Elements need not be unique.
    pub fn add_objects(&mut self, objects: impl IntoIterator<Item = T>) {
        self.collection.extend(objects);
    }

    /// Empties the backing storage. Registered filters and sort descriptors
    /// are untouched and will apply to whatever is added next.
    pub fn clear(&mut self) {
        self.collection.clear();
    }

    /// The element at `index` in the **raw** backing storage, or `None` when
    /// out of bounds.
    ///
    /// Note the asymmetry: this indexes the backing storage in append order,
    /// not the computed view that [`objects`](ViewList::objects) returns.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.collection.get(index)
    }

    /// Number of elements in the **raw** backing storage, independent of any
    /// registered filters (same asymmetry as [`get`](ViewList::get)).
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether the **raw** backing storage is empty.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Registers a filter at the end of the filter chain (applied last among
    /// filters).
    ///
    /// Fails with [`ViewListError::DuplicateFilter`] when an identity-equal
    /// filter is already registered; the registry is left unchanged.
    pub fn add_filter(&mut self, filter: &Filter<T>) -> Result<()> {
        if self.filters.contains(filter) {
            return Err(ViewListError::DuplicateFilter(filter.id()));
        }
        self.filters.push(filter.clone());
        Ok(())
    }

    /// Wraps `closure` in a fresh quick filter, registers it, and returns the
    /// handle so the caller can remove it later.
    ///
    /// Always succeeds: every call mints a new identity, so there is nothing
    /// to collide with.
    pub fn add_quick_filter(&mut self, closure: impl Fn(Vec<T>) -> Vec<T> + 'static) -> Filter<T>
    where
        T: 'static,
    {
        let filter = Filter::quick(closure);
        self.filters.push(filter.clone());
        filter
    }

    /// Removes a previously registered filter, preserving the relative order
    /// of the remaining entries.
    ///
    /// Fails with [`ViewListError::FilterNotFound`] when no identity-equal
    /// entry exists; the registry is left unchanged. The filter object itself
    /// is not destroyed — the caller's handle stays usable elsewhere.
    pub fn remove_filter(&mut self, filter: &Filter<T>) -> Result<()> {
        let position = self
            .filters
            .iter()
            .position(|registered| registered == filter)
            .ok_or(ViewListError::FilterNotFound(filter.id()))?;
        self.filters.remove(position);
        Ok(())
    }

    /// Empties the filter registry. Always succeeds.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Registers a sort descriptor at the end of the sort chain.
    ///
    /// Fails with [`ViewListError::DuplicateSortDescriptor`] when an
    /// identity-equal descriptor is already registered; the registry is left
    /// unchanged.
    pub fn add_sort_descriptor(&mut self, descriptor: &SortDescriptor<T>) -> Result<()> {
        if self.sort_descriptors.contains(descriptor) {
            return Err(ViewListError::DuplicateSortDescriptor(descriptor.id()));
        }
        self.sort_descriptors.push(descriptor.clone());
        Ok(())
    }

    /// Wraps `closure` in a fresh quick sort descriptor, registers it, and
    /// returns the handle. Always succeeds.
    pub fn add_quick_sort_descriptor(
        &mut self,
        closure: impl Fn(Vec<T>) -> Vec<T> + 'static,
    ) -> SortDescriptor<T>
    where
        T: 'static,
    {
        let descriptor = SortDescriptor::quick(closure);
        self.sort_descriptors.push(descriptor.clone());
        descriptor
    }

    /// Removes a previously registered sort descriptor.
    ///
    /// Fails with [`ViewListError::SortDescriptorNotFound`] when no
    /// identity-equal entry exists; the registry is left unchanged.
    pub fn remove_sort_descriptor(&mut self, descriptor: &SortDescriptor<T>) -> Result<()> {
        let position = self
            .sort_descriptors
            .iter()
            .position(|registered| registered == descriptor)
            .ok_or(ViewListError::SortDescriptorNotFound(descriptor.id()))?;
        self.sort_descriptors.remove(position);
        Ok(())
    }

    /// Empties the sort descriptor registry. Always succeeds.
    pub fn clear_sort_descriptors(&mut self) {
        self.sort_descriptors.clear();
    }
}

impl<T: Clone> ViewList<T> {
    /// Computes the view: every filter in registration order, then every sort
    /// descriptor in registration order, over a copy of the backing storage.
    ///
    /// The result is a new independent sequence; the backing storage and the
    /// registries are never mutated by a read. Re-invoking with no
    /// intervening mutation yields an identical sequence. Nothing is cached;
    /// each call recomputes the full pipeline.
    pub fn objects(&self) -> Vec<T> {
        let mut view = self.collection.clone();

        for filter in &self.filters {
            view = filter.apply(view);
        }

        for descriptor in &self.sort_descriptors {
            view = descriptor.apply(view);
        }

        view
    }

    /// The backing storage verbatim, as an independent copy. No filters or
    /// sorting are applied at all.
    pub fn wild_objects(&self) -> Vec<T> {
        self.collection.clone()
    }

    /// Iterates the computed view.
    ///
    /// The view is evaluated exactly once, here; the returned iterator walks
    /// that snapshot and is unaffected by later mutation of the list. Build a
    /// new iterator to observe changes.
    pub fn iter(&self) -> ViewIter<T> {
        ViewIter::new(self.objects())
    }
}

impl<T> Default for ViewList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ViewList<T> {
    fn from(objects: Vec<T>) -> Self {
        let mut list = Self::new();
        list.add_objects(objects);
        list
    }
}

impl<T> FromIterator<T> for ViewList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(objects: I) -> Self {
        let mut list = Self::new();
        list.add_objects(objects);
        list
    }
}

impl<T> Extend<T> for ViewList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, objects: I) {
        self.add_objects(objects);
    }
}

impl<'a, T: Clone> IntoIterator for &'a ViewList<T> {
    type Item = T;
    type IntoIter = ViewIter<T>;

    fn into_iter(self) -> ViewIter<T> {
        self.iter()
    }
}
