//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod places;

use axum::Router;
use axum::routing::get;

use bucketlist_app::ports::PlaceRepository;

use crate::state::AppState;

/// Build the places API sub-router.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/places",
            get(places::list::<PR>).post(places::create::<PR>),
        )
        .route(
            "/places/{id}",
            get(places::get::<PR>)
                .put(places::update::<PR>)
                .delete(places::delete::<PR>),
        )
}
