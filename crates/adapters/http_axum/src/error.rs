//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bucketlist_domain::error::BucketListError;

use crate::envelope::Envelope;

/// Maps [`BucketListError`] and request-shape failures to an HTTP response
/// with the appropriate status code and a `success: false` envelope.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by the domain or a service.
    Domain(BucketListError),
    /// The request body could not be decoded.
    BadRequest(String),
}

impl From<BucketListError> for ApiError {
    fn from(err: BucketListError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(BucketListError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(BucketListError::NotFound(err)) => {
                tracing::debug!(entity = err.entity, id = %err.id, "record not found");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Domain(BucketListError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Envelope::failure(message)).into_response()
    }
}
