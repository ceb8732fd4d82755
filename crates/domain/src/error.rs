//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BucketListError`] via `#[from]` or a dedicated `From` impl.

/// Top-level error shared by the domain, the services and the adapters.
#[derive(Debug, thiserror::Error)]
pub enum BucketListError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by caller-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One of the fields required to create a place is absent or empty.
    #[error("Please provide name, country and description")]
    MissingPlaceFields,

    #[error("name must not be empty")]
    EmptyName,

    #[error("country must not be empty")]
    EmptyCountry,
}

/// The requested record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Place"`).
    pub entity: &'static str,
    /// Identifier as received, kept verbatim for logging.
    pub id: String,
}
