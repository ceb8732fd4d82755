//! Typed identifier for places.
//!
//! Identifiers are positive integers assigned by the store. They serialize
//! as bare JSON numbers.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Place`](crate::place::Place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(NonZeroU64);

impl PlaceId {
    /// The first identifier handed out by an empty store.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Wrap a raw value, returning `None` for zero.
    #[must_use]
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The identifier immediately following this one, or `None` once the
    /// integer range is exhausted.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PlaceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NonZeroU64>().map(Self)
    }
}
