//! JSON REST handlers for places.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;

use bucketlist_app::ports::PlaceRepository;
use bucketlist_domain::error::{BucketListError, ValidationError};
use bucketlist_domain::place::{NewPlace, Place, PlaceChanges};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::parse_place_id;
use crate::state::AppState;

const ADDED: &str = "Place added successfully!";
const UPDATED: &str = "Place updated successfully!";
const DELETED: &str = "Place deleted successfully!";
const INVALID_BODY: &str = "Invalid request body";

/// Request body for creating a place.
///
/// Every field is optional at the wire level so that a missing field is
/// reported with the same message as an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePlaceRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreatePlaceRequest {
    fn into_new_place(self) -> Result<NewPlace, ApiError> {
        let present = |field: Option<String>| field.filter(|value| !value.is_empty());
        match (
            present(self.name),
            present(self.country),
            present(self.description),
        ) {
            (Some(name), Some(country), Some(description)) => {
                Ok(NewPlace::new(name, country, description)?)
            }
            _ => Err(BucketListError::from(ValidationError::MissingPlaceFields).into()),
        }
    }
}

/// `GET /places`
pub async fn list<PR>(
    State(state): State<AppState<PR>>,
) -> Result<Envelope<Vec<Place>>, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let places = state.place_service.list_places().await?;
    let count = places.len();
    Ok(Envelope::data(places).with_count(count))
}

/// `GET /places/:id`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<Envelope<Place>, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = parse_place_id(&id)?;
    let place = state.place_service.get_place(place_id).await?;
    Ok(Envelope::data(place))
}

/// `POST /places`
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    payload: Result<Json<CreatePlaceRequest>, JsonRejection>,
) -> Result<Envelope<Place>, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected create body");
        ApiError::BadRequest(ValidationError::MissingPlaceFields.to_string())
    })?;
    let place = req.into_new_place()?;
    let created = state.place_service.create_place(place).await?;
    Ok(Envelope::data(created).with_message(ADDED))
}

/// `PUT /places/:id`
///
/// The place is looked up before the body is inspected, so an unknown id is
/// a 404 whatever the payload. Only the fields present in the body are
/// forwarded; absent fields keep their previous value.
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
    payload: Result<Json<PlaceChanges>, JsonRejection>,
) -> Result<Envelope<Place>, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = parse_place_id(&id)?;
    state.place_service.get_place(place_id).await?;
    let Json(changes) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected update body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    })?;
    let updated = state.place_service.update_place(place_id, changes).await?;
    Ok(Envelope::data(updated).with_message(UPDATED))
}

/// `DELETE /places/:id`
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<Envelope<Place>, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = parse_place_id(&id)?;
    let deleted = state.place_service.delete_place(place_id).await?;
    Ok(Envelope::data(deleted).with_message(DELETED))
}
