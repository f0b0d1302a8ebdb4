//! # Viewlist Architecture
//!
//! Viewlist is a **mutable ordered collection with composable read-time
//! views**. One canonical backing list, any number of simultaneous ways of
//! looking at it: filtered-and-sorted for display, raw for persistence.
//!
//! Writers mutate the backing storage directly (append, clear) and
//! independently register or deregister strategies; every read recomputes the
//! view from the current storage and the current registries. There is no
//! cached derived state to invalidate, which keeps the mutation surface dumb
//! and the read surface deterministic.
//!
//! ## The Three-Layer Design
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rules (filter.rs, sort.rs)                                 │
//! │  - FilterRule / SortRule traits, default = pass-through     │
//! │  - Named types for reusable rules, Quick* adapters for      │
//! │    one-off closures                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Handles (Filter<T>, SortDescriptor<T>)                     │
//! │  - Pair a shared rule with a stable Uuid identity           │
//! │  - Clone = same instance; new = new identity                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Container (list.rs, iter.rs)                               │
//! │  - ViewList owns the backing Vec and two ordered registries │
//! │  - objects() runs all filters, then all sort descriptors,   │
//! │    each chain in registration order                         │
//! │  - iter() snapshots the view once and walks it by cursor    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity, Not Equality
//!
//! Registries deduplicate by *instance identity*: every handle is stamped
//! with a fresh `Uuid` when it is created, and registering the same handle
//! (or a clone of it) twice is rejected. Two handles wrapping behaviorally
//! identical rules are different entries. This is what makes removal
//! unambiguous — the caller keeps the handle it registered and presents it
//! again to remove it.
//!
//! ## Quick Start
//!
//! ```rust
//! use viewlist::{Filter, SortDescriptor, ViewList};
//!
//! let mut list = ViewList::from(vec![3, 1, 4, 1, 5, 9]);
//!
//! let no_ones = Filter::quick(|items: Vec<i32>| {
//!     items.into_iter().filter(|n| *n != 1).collect()
//! });
//! let ascending = SortDescriptor::quick(|mut items: Vec<i32>| {
//!     items.sort();
//!     items
//! });
//!
//! list.add_filter(&no_ones).unwrap();
//! list.add_sort_descriptor(&ascending).unwrap();
//!
//! assert_eq!(list.objects(), vec![3, 4, 5, 9]);
//! assert_eq!(list.wild_objects(), vec![3, 1, 4, 1, 5, 9]);
//! assert_eq!(list.len(), 6); // raw count, not the view's
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Rules and handles** (`filter.rs`, `sort.rs`): unit tests for the
//!    pass-through default, closure forwarding, and identity semantics.
//! 2. **Container** (`list.rs`, `iter.rs`): the lion's share — pipeline
//!    order, duplicate rejection, removal, raw/computed asymmetry, snapshot
//!    isolation.
//! 3. **Integration** (`tests/`): end-to-end scenarios through the public
//!    API plus proptest properties over arbitrary element sequences.
//!
//! ## Module Overview
//!
//! - [`list`]: [`ViewList`], the container and pipeline evaluator
//! - [`filter`]: filter rules, quick filters, and filter handles
//! - [`sort`]: sort rules, quick sort descriptors, and their handles
//! - [`iter`]: [`ViewIter`], snapshot iteration over the computed view
//! - [`error`]: error types

pub mod error;
pub mod filter;
pub mod iter;
pub mod list;
pub mod sort;

pub use error::{Result, ViewListError};
pub use filter::{Filter, FilterRule, QuickFilter};
pub use iter::ViewIter;
pub use list::ViewList;
pub use sort::{QuickSortDescriptor, SortDescriptor, SortRule};
