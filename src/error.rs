use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the fallible registry operations on a
/// [`ViewList`](crate::ViewList).
///
/// All variants are local and recoverable; the registry involved is left
/// unchanged when one of these is returned. The attached [`Uuid`] is the
/// identity of the strategy handle the caller presented.
#[derive(Error, Debug)]
pub enum ViewListError {
    #[error("Filter already registered: {0}")]
    DuplicateFilter(Uuid),

    #[error("Filter not registered: {0}")]
    FilterNotFound(Uuid),

    #[error("Sort descriptor already registered: {0}")]
    DuplicateSortDescriptor(Uuid),

    #[error("Sort descriptor not registered: {0}")]
    SortDescriptorNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, ViewListError>;
