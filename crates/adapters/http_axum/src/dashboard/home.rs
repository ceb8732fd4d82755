//! Dashboard home page: counters and one card per place.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bucketlist_app::ports::PlaceRepository;
use bucketlist_app::services::place_service::PlaceSummary;
use bucketlist_domain::place::Place;

use super::{DashboardError, render};
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    refresh_seconds: u32,
    summary: PlaceSummary,
    places: Vec<Place>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        render(StatusCode::OK, &self)
    }
}

/// `GET /`: travel bucket list overview.
pub async fn index<PR>(State(state): State<AppState<PR>>) -> Result<HomeTemplate, DashboardError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let places = state.place_service.list_places().await?;

    Ok(HomeTemplate {
        refresh_seconds: 30,
        summary: PlaceSummary::from_places(&places),
        places,
    })
}
