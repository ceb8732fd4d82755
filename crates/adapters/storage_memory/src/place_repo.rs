//! In-memory implementation of [`PlaceRepository`].

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use bucketlist_app::ports::PlaceRepository;
use bucketlist_domain::error::{BucketListError, NotFoundError};
use bucketlist_domain::id::PlaceId;
use bucketlist_domain::place::{NewPlace, Place, PlaceChanges};

use crate::error::StorageError;
use crate::seed;

/// Ordered place collection plus the highest identifier ever handed out.
#[derive(Debug, Default)]
struct StoreState {
    places: Vec<Place>,
    last_id: Option<PlaceId>,
}

impl StoreState {
    fn new(places: Vec<Place>) -> Self {
        let last_id = places.iter().map(|place| place.id).max();
        Self { places, last_id }
    }

    /// Next identifier: one past every id currently stored or previously
    /// assigned, so a deleted maximum is never handed out again.
    fn next_id(&mut self) -> Result<PlaceId, StorageError> {
        let id = match self.last_id {
            None => PlaceId::FIRST,
            Some(last) => last.next().ok_or(StorageError::IdsExhausted)?,
        };
        self.last_id = Some(id);
        Ok(id)
    }

    fn position(&self, id: PlaceId) -> Option<usize> {
        self.places.iter().position(|place| place.id == id)
    }
}

/// Process-scoped place store.
///
/// All operations run under a single mutex that is never held across an
/// `.await`, which serializes identifier assignment on a multi-threaded runtime.
#[derive(Debug, Default)]
pub struct InMemoryPlaceRepository {
    state: Mutex<StoreState>,
}

impl InMemoryPlaceRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the fixed seed destinations (ids 1 to 5).
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            state: Mutex::new(StoreState::new(seed::places())),
        }
    }

    /// Create a store holding the given places, in order.
    ///
    /// # Errors
    ///
    /// Returns [`BucketListError::Validation`] when a place breaks a domain
    /// invariant, or a storage error when two places share an identifier.
    pub fn with_places(places: Vec<Place>) -> Result<Self, BucketListError> {
        let mut seen = HashSet::with_capacity(places.len());
        for place in &places {
            place.validate()?;
            if !seen.insert(place.id) {
                return Err(StorageError::DuplicateId(place.id).into());
            }
        }
        Ok(Self {
            state: Mutex::new(StoreState::new(places)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StorageError> {
        self.state.lock().map_err(|_| StorageError::Poisoned)
    }

    fn create_sync(&self, place: NewPlace) -> Result<Place, BucketListError> {
        place.validate()?;
        let mut state = self.lock()?;
        let id = state.next_id()?;
        tracing::debug!(%id, "assigned place id");
        let place = Place::from_new(id, place);
        state.places.push(place.clone());
        Ok(place)
    }

    fn update_sync(&self, id: PlaceId, changes: PlaceChanges) -> Result<Place, BucketListError> {
        let mut state = self.lock()?;
        let index = state.position(id).ok_or_else(|| not_found(id))?;
        let place = &mut state.places[index];
        place.apply(changes);
        Ok(place.clone())
    }

    fn toggle_visited_sync(&self, id: PlaceId) -> Result<Place, BucketListError> {
        let mut state = self.lock()?;
        let index = state.position(id).ok_or_else(|| not_found(id))?;
        let place = &mut state.places[index];
        place.visited = !place.visited;
        Ok(place.clone())
    }

    fn delete_sync(&self, id: PlaceId) -> Result<Place, BucketListError> {
        let mut state = self.lock()?;
        let index = state.position(id).ok_or_else(|| not_found(id))?;
        Ok(state.places.remove(index))
    }
}

fn not_found(id: PlaceId) -> BucketListError {
    NotFoundError {
        entity: "Place",
        id: id.to_string(),
    }
    .into()
}

impl PlaceRepository for InMemoryPlaceRepository {
    fn create(&self, place: NewPlace) -> impl Future<Output = Result<Place, BucketListError>> + Send {
        let result = self.create_sync(place);
        async { result }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, BucketListError>> + Send {
        let result = self
            .lock()
            .map(|state| state.position(id).map(|index| state.places[index].clone()))
            .map_err(BucketListError::from);
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, BucketListError>> + Send {
        let result = self
            .lock()
            .map(|state| state.places.clone())
            .map_err(BucketListError::from);
        async { result }
    }

    fn update(
        &self,
        id: PlaceId,
        changes: PlaceChanges,
    ) -> impl Future<Output = Result<Place, BucketListError>> + Send {
        let result = self.update_sync(id, changes);
        async { result }
    }

    fn toggle_visited(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Place, BucketListError>> + Send {
        let result = self.toggle_visited_sync(id);
        async { result }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<Place, BucketListError>> + Send {
        let result = self.delete_sync(id);
        async { result }
    }
}
