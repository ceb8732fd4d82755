//! # bucketlist-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PlaceRepository`: CRUD for places, including identifier assignment
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PlaceService`: list, get, create, partially update, delete, summarize
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `bucketlist-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
