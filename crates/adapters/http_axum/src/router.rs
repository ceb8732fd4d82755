//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use bucketlist_app::ports::PlaceRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the places API (`/places`) with the dashboard routes (`/`).
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR>(state: AppState<PR>) -> Router
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use bucketlist_adapter_storage_memory::InMemoryPlaceRepository;
    use bucketlist_app::services::place_service::PlaceService;
    use bucketlist_domain::error::BucketListError;
    use bucketlist_domain::id::PlaceId;
    use bucketlist_domain::place::{NewPlace, Place, PlaceChanges};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct BrokenRepo;

    fn broken() -> BucketListError {
        BucketListError::Storage("disk on fire".into())
    }

    impl PlaceRepository for BrokenRepo {
        async fn create(&self, _place: NewPlace) -> Result<Place, BucketListError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: PlaceId) -> Result<Option<Place>, BucketListError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<Place>, BucketListError> {
            Err(broken())
        }
        async fn update(
            &self,
            _id: PlaceId,
            _changes: PlaceChanges,
        ) -> Result<Place, BucketListError> {
            Err(broken())
        }
        async fn toggle_visited(&self, _id: PlaceId) -> Result<Place, BucketListError> {
            Err(broken())
        }
        async fn delete(&self, _id: PlaceId) -> Result<Place, BucketListError> {
            Err(broken())
        }
    }

    fn seeded_app() -> Router {
        build(AppState::new(PlaceService::new(
            InMemoryPlaceRepository::seeded(),
        )))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_single_place_when_id_exists() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .uri("/places/4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Northern Lights");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_envelope_for_malformed_id() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/places/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": "Place not found"})
        );
    }

    #[tokio::test]
    async fn should_return_create_message_when_body_is_not_json() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/places")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Please provide name, country and description"
        );
    }

    #[tokio::test]
    async fn should_reject_update_with_wrongly_typed_field() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/places/2")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"visited":"yes"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["message"], "Invalid request body");
    }

    #[tokio::test]
    async fn should_reject_update_that_blanks_name() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/places/2")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["message"], "name must not be empty");
    }

    #[tokio::test]
    async fn should_return_not_found_before_inspecting_update_body() {
        let cases = [
            ("/places/99", Some(r#"{"name":""}"#)),
            ("/places/99", None),
            ("/places/abc", Some("x")),
        ];

        for (uri, body) in cases {
            let builder = Request::builder().method("PUT").uri(uri);
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = seeded_app().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "PUT {uri}");
            let body: serde_json::Value =
                serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(
                body,
                serde_json::json!({"success": false, "message": "Place not found"})
            );
        }
    }

    #[tokio::test]
    async fn should_hide_storage_errors_behind_internal_server_error() {
        let app = build(AppState::new(PlaceService::new(BrokenRepo)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/places")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": "internal server error"})
        );
    }

    #[tokio::test]
    async fn should_render_dashboard_counters() {
        let response = seeded_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Travel Bucket List"));
        assert!(body.contains("<strong>2</strong> Visited"));
        assert!(body.contains("<strong>3</strong> To Visit"));
        assert!(body.contains("<strong>5</strong> Total"));
        assert!(body.contains("Machu Picchu"));
    }

    #[tokio::test]
    async fn should_redirect_after_dashboard_toggle() {
        let app = seeded_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/dashboard/places/2/toggle")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/places/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["data"]["visited"], true);
    }

    #[tokio::test]
    async fn should_create_place_from_dashboard_form() {
        let app = seeded_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/dashboard/places")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=Bali&country=Indonesia&description="))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/places/6")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["data"]["name"], "Bali");
        assert_eq!(body["data"]["description"], "");
    }

    #[tokio::test]
    async fn should_edit_place_from_dashboard_form() {
        let app = seeded_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/dashboard/places/1/edit")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=Oia&country=Greece&description=Cliffside+village"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/places/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            body["data"],
            serde_json::json!({
                "id": 1,
                "name": "Oia",
                "country": "Greece",
                "description": "Cliffside village",
                "visited": true,
            })
        );
    }

    #[tokio::test]
    async fn should_render_error_page_when_dashboard_edit_blanks_name() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/dashboard/places/1/edit")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=&country=Greece&description="))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("name must not be empty"));
    }

    #[tokio::test]
    async fn should_render_error_page_when_dashboard_form_misses_country() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/dashboard/places")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=Bali"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("country must not be empty"));
    }

    #[tokio::test]
    async fn should_render_not_found_page_when_deleting_unknown_place() {
        let response = seeded_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/dashboard/places/99/delete")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Place not found"));
    }
}
