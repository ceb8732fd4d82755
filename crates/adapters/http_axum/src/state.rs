//! Shared application state for axum handlers.

use std::sync::Arc;

use bucketlist_app::ports::PlaceRepository;
use bucketlist_app::services::place_service::PlaceService;

/// Application state shared across all axum handlers.
///
/// Generic over the place repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<PR> {
    /// Place CRUD service.
    pub place_service: Arc<PlaceService<PR>>,
}

impl<PR> Clone for AppState<PR> {
    fn clone(&self) -> Self {
        Self {
            place_service: Arc::clone(&self.place_service),
        }
    }
}

impl<PR> AppState<PR>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(place_service: PlaceService<PR>) -> Self {
        Self {
            place_service: Arc::new(place_service),
        }
    }
}
