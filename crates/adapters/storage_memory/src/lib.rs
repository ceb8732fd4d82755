//! # bucketlist-adapter-storage-memory
//!
//! In-memory persistence adapter for places.
//!
//! ## Responsibilities
//! - Implement the [`PlaceRepository`](bucketlist_app::ports::PlaceRepository)
//!   port defined in `bucketlist-app`
//! - Own the ordered place collection and the identifier-assignment policy
//! - Provide the fixed seed set loaded at startup
//!
//! Nothing survives a process restart.
//!
//! ## Dependency rule
//! Depends on `bucketlist-app` (for port traits) and `bucketlist-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod place_repo;
pub mod seed;

pub use error::StorageError;
pub use place_repo::InMemoryPlaceRepository;
