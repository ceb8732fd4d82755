//! Place service: use-cases for managing the bucket list.

use bucketlist_domain::error::{BucketListError, NotFoundError};
use bucketlist_domain::id::PlaceId;
use bucketlist_domain::place::{NewPlace, Place, PlaceChanges};

use crate::ports::PlaceRepository;

/// Visited / to-visit counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceSummary {
    pub total: usize,
    pub visited: usize,
    pub to_visit: usize,
}

impl PlaceSummary {
    /// Count visited and pending places.
    #[must_use]
    pub fn from_places(places: &[Place]) -> Self {
        let visited = places.iter().filter(|place| place.visited).count();
        Self {
            total: places.len(),
            visited,
            to_visit: places.len() - visited,
        }
    }
}

/// Application service for place CRUD operations.
pub struct PlaceService<R> {
    repo: R,
}

impl<R: PlaceRepository> PlaceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new place after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BucketListError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, place), fields(place_name = %place.name()))]
    pub async fn create_place(&self, place: NewPlace) -> Result<Place, BucketListError> {
        place.validate()?;
        let created = self.repo.create(place).await?;
        tracing::info!(id = %created.id, "place created");
        Ok(created)
    }

    /// Look up a place by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BucketListError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, BucketListError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Place",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all places in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_places(&self) -> Result<Vec<Place>, BucketListError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing place.
    ///
    /// Fields absent from `changes` keep their previous value.
    ///
    /// # Errors
    ///
    /// Returns [`BucketListError::Validation`] if a present field would break
    /// an invariant, [`BucketListError::NotFound`] when no place with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_place(
        &self,
        id: PlaceId,
        changes: PlaceChanges,
    ) -> Result<Place, BucketListError> {
        changes.validate()?;
        if changes.is_empty() {
            return self.get_place(id).await;
        }
        let updated = self.repo.update(id, changes).await?;
        tracing::info!("place updated");
        Ok(updated)
    }

    /// Flip the visited flag of a place.
    ///
    /// # Errors
    ///
    /// Returns [`BucketListError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_visited(&self, id: PlaceId) -> Result<Place, BucketListError> {
        let toggled = self.repo.toggle_visited(id).await?;
        tracing::info!(visited = toggled.visited, "place toggled");
        Ok(toggled)
    }

    /// Delete a place by id and return the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`BucketListError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId) -> Result<Place, BucketListError> {
        let deleted = self.repo.delete(id).await?;
        tracing::info!("place deleted");
        Ok(deleted)
    }
}
