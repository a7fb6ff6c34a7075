//! # Club Entity
//!
//! A tenant of the market. Clubs own players and are administered by exactly
//! one actor.

use crate::domain::value_objects::ClubId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A football club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    id: ClubId,
    name: String,
    country: String,
}

impl Club {
    /// Creates a new club with a generated ID.
    #[must_use]
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self::from_parts(ClubId::new_v4(), name, country)
    }

    /// Creates a club with a specific ID (for reconstruction from storage).
    #[must_use]
    pub fn from_parts(id: ClubId, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
        }
    }

    /// Returns the club ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ClubId {
        self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the country.
    #[inline]
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_club_has_fresh_id() {
        let a = Club::new("Arsenal", "England");
        let b = Club::new("Arsenal", "England");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), "Arsenal");
        assert_eq!(a.country(), "England");
        assert_eq!(a.to_string(), "Arsenal");
    }
}
