//! # Actor
//!
//! The authenticated identity performing a market operation.
//!
//! Authentication happens outside this crate; the session layer hands over an
//! identity whose only relevant claim is the club it administers. An identity
//! without that claim never becomes an [`Actor`].

use crate::domain::value_objects::ClubId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An identity acting on behalf of exactly one club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    managed_club: ClubId,
}

impl Actor {
    /// Creates an actor administering the given club.
    #[must_use]
    pub const fn new(managed_club: ClubId) -> Self {
        Self { managed_club }
    }

    /// Builds an actor from an optional managed-club claim.
    ///
    /// Returns `None` for identities that administer no club (fans, staff
    /// accounts without a profile).
    #[must_use]
    pub fn from_claim(managed_club: Option<ClubId>) -> Option<Self> {
        managed_club.map(Self::new)
    }

    /// Returns the club this actor administers.
    #[inline]
    #[must_use]
    pub const fn managed_club(&self) -> ClubId {
        self.managed_club
    }

    /// Returns true if the actor administers the given club.
    #[inline]
    #[must_use]
    pub fn manages(&self, club: &ClubId) -> bool {
        &self.managed_club == club
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "admin of club {}", self.managed_club)
    }
}
