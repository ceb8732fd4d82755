//! # bucketlist-domain
//!
//! Pure domain model for the bucketlist travel tracker.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`PlaceId`](id::PlaceId) and error conventions
//! - Define **Places** (travel destinations with a visited flag)
//! - Define the validated inputs used to create and partially update a place
//! - Contain all invariant enforcement (non-empty name and country)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod place;
