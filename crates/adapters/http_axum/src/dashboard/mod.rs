//! Server-side rendered HTML dashboard (no JavaScript).

pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod places;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use bucketlist_app::ports::PlaceRepository;
use bucketlist_domain::error::BucketListError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<PR>))
        .route("/dashboard/places", post(places::create::<PR>))
        .route("/dashboard/places/{id}/edit", post(places::edit::<PR>))
        .route(
            "/dashboard/places/{id}/toggle",
            post(places::toggle::<PR>),
        )
        .route(
            "/dashboard/places/{id}/delete",
            post(places::delete::<PR>),
        )
}

/// Render a template, falling back to a bare 500 when rendering fails.
pub(crate) fn render(status: StatusCode, template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render template");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    title: &'static str,
    message: String,
}

/// Maps [`BucketListError`] to an HTML error page.
#[derive(Debug)]
pub struct DashboardError(BucketListError);

impl From<BucketListError> for DashboardError {
    fn from(err: BucketListError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self.0 {
            BucketListError::Validation(err) => {
                (StatusCode::BAD_REQUEST, "Invalid input", err.to_string())
            }
            BucketListError::NotFound(err) => {
                tracing::debug!(entity = err.entity, id = %err.id, "record not found");
                (StatusCode::NOT_FOUND, "Not found", err.to_string())
            }
            BucketListError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error",
                    "internal server error".to_string(),
                )
            }
        };
        render(status, &ErrorTemplate { title, message })
    }
}
