//! Dashboard form handlers for places (PRG pattern).

use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use bucketlist_app::ports::PlaceRepository;
use bucketlist_domain::place::{NewPlace, PlaceChanges};

use super::DashboardError;
use crate::parse_place_id;
use crate::state::AppState;

/// Response from the form handlers.
pub enum FormResponse {
    /// Redirect back to the dashboard home page.
    Redirect(Redirect),
}

impl FormResponse {
    fn home() -> Self {
        Self::Redirect(Redirect::to("/"))
    }
}

impl IntoResponse for FormResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// Form data for adding or editing a place. Missing inputs arrive as empty
/// strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceForm {
    pub name: String,
    pub country: String,
    pub description: String,
}

impl From<PlaceForm> for PlaceChanges {
    fn from(form: PlaceForm) -> Self {
        Self {
            name: Some(form.name),
            country: Some(form.country),
            description: Some(form.description),
            visited: None,
        }
    }
}

/// `POST /dashboard/places`: add a place.
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    Form(form): Form<PlaceForm>,
) -> Result<FormResponse, DashboardError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place = NewPlace::new(form.name, form.country, form.description)?;
    state.place_service.create_place(place).await?;
    Ok(FormResponse::home())
}

/// `POST /dashboard/places/:id/edit`: replace the text fields of a place.
pub async fn edit<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
    Form(form): Form<PlaceForm>,
) -> Result<FormResponse, DashboardError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = parse_place_id(&id)?;
    state.place_service.update_place(place_id, form.into()).await?;
    Ok(FormResponse::home())
}

/// `POST /dashboard/places/:id/toggle`: flip the visited flag.
pub async fn toggle<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<FormResponse, DashboardError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = parse_place_id(&id)?;
    state.place_service.toggle_visited(place_id).await?;
    Ok(FormResponse::home())
}

/// `POST /dashboard/places/:id/delete`: remove a place.
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<FormResponse, DashboardError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = parse_place_id(&id)?;
    state.place_service.delete_place(place_id).await?;
    Ok(FormResponse::home())
}
