//! Storage-specific error type for the in-memory store.

use bucketlist_domain::error::BucketListError;
use bucketlist_domain::id::PlaceId;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A thread panicked while holding the store lock.
    #[error("place store lock poisoned")]
    Poisoned,

    /// Initial places contained the same identifier twice.
    #[error("duplicate place id {0}")]
    DuplicateId(PlaceId),

    /// The highest possible identifier has already been assigned.
    #[error("place ids exhausted")]
    IdsExhausted,
}

impl From<StorageError> for BucketListError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
