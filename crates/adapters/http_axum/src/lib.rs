//! # bucketlist-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **places JSON API** (`/places`, `/places/{id}`), wrapping every
//!   result in the uniform `{ success, data, count, message }` envelope
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: pure HTML forms + `<meta http-equiv="refresh">`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - Create, edit, toggle and delete controls are `<form>` elements that POST back
//!   to the server and redirect (PRG pattern).
//!
//! ## Dependency rule
//! Depends on `bucketlist-app` (for port traits and services) and
//! `bucketlist-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod router;
pub mod state;

use std::str::FromStr;

use bucketlist_domain::error::{BucketListError, NotFoundError};
use bucketlist_domain::id::PlaceId;

/// Parse a path segment into a [`PlaceId`].
///
/// Anything that is not a positive integer cannot name a place, so it is
/// reported as not found rather than as a parse error.
pub(crate) fn parse_place_id(raw: &str) -> Result<PlaceId, BucketListError> {
    PlaceId::from_str(raw).map_err(|_| {
        NotFoundError {
            entity: "Place",
            id: raw.to_string(),
        }
        .into()
    })
}
