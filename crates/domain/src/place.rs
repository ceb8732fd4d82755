//! Place: a travel destination on the bucket list.

use serde::{Deserialize, Serialize};

use crate::error::{BucketListError, ValidationError};
use crate::id::PlaceId;

/// A travel destination and whether it has been visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub country: String,
    pub description: String,
    pub visited: bool,
}

impl Place {
    /// Materialize a validated [`NewPlace`] under the given identifier.
    ///
    /// Freshly created places are never visited.
    #[must_use]
    pub fn from_new(id: PlaceId, new: NewPlace) -> Self {
        Self {
            id,
            name: new.name,
            country: new.country,
            description: new.description,
            visited: false,
        }
    }

    /// Overwrite the fields present in `changes`, leaving the others untouched.
    pub fn apply(&mut self, changes: PlaceChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(country) = changes.country {
            self.country = country;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(visited) = changes.visited {
            self.visited = visited;
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BucketListError::Validation`] when `name` or `country` is empty.
    pub fn validate(&self) -> Result<(), BucketListError> {
        check_required(&self.name, &self.country)
    }
}

/// Input for creating a place. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlace {
    name: String,
    country: String,
    description: String,
}

impl NewPlace {
    /// Build creation input, enforcing non-empty `name` and `country`.
    ///
    /// `description` may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or [`ValidationError::EmptyCountry`].
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, BucketListError> {
        let new = Self {
            name: name.into(),
            country: country.into(),
            description: description.into(),
        };
        new.validate()?;
        Ok(new)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BucketListError::Validation`] when `name` or `country` is empty.
    pub fn validate(&self) -> Result<(), BucketListError> {
        check_required(&self.name, &self.country)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Partial update of a place.
///
/// `None` means "keep the previous value", never "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaceChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visited: Option<bool>,
}

impl PlaceChanges {
    /// Changes that only flip the visited flag.
    #[must_use]
    pub fn visited(visited: bool) -> Self {
        Self {
            visited: Some(visited),
            ..Self::default()
        }
    }

    /// Whether no field would be touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.country.is_none()
            && self.description.is_none()
            && self.visited.is_none()
    }

    /// Reject changes that would blank a required field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or [`ValidationError::EmptyCountry`]
    /// when the corresponding field is present but empty.
    pub fn validate(&self) -> Result<(), BucketListError> {
        if self.name.as_deref().is_some_and(str::is_empty) {
            return Err(ValidationError::EmptyName.into());
        }
        if self.country.as_deref().is_some_and(str::is_empty) {
            return Err(ValidationError::EmptyCountry.into());
        }
        Ok(())
    }
}

fn check_required(name: &str, country: &str) -> Result<(), BucketListError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if country.is_empty() {
        return Err(ValidationError::EmptyCountry.into());
    }
    Ok(())
}
