//! Storage port: repository trait for places.

use std::future::Future;

use bucketlist_domain::error::BucketListError;
use bucketlist_domain::id::PlaceId;
use bucketlist_domain::place::{NewPlace, Place, PlaceChanges};

/// Repository owning the authoritative, ordered collection of [`Place`]s.
///
/// Implementations assign identifiers: a created place receives an id strictly
/// greater than any id the repository has held, so ids are never reused.
pub trait PlaceRepository {
    /// Store a new place, assigning its identifier. `visited` starts `false`.
    fn create(&self, place: NewPlace) -> impl Future<Output = Result<Place, BucketListError>> + Send;

    /// Get a place by its identifier.
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, BucketListError>> + Send;

    /// Get all places in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, BucketListError>> + Send;

    /// Apply a partial update to an existing place and return the result.
    ///
    /// Fails with [`BucketListError::NotFound`] when `id` is absent.
    fn update(
        &self,
        id: PlaceId,
        changes: PlaceChanges,
    ) -> impl Future<Output = Result<Place, BucketListError>> + Send;

    /// Flip the visited flag of a place in a single step and return the result.
    ///
    /// Fails with [`BucketListError::NotFound`] when `id` is absent.
    fn toggle_visited(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Place, BucketListError>> + Send;

    /// Remove a place and return the removed value.
    ///
    /// Fails with [`BucketListError::NotFound`] when `id` is absent.
    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<Place, BucketListError>> + Send;
}
