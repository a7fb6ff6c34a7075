//! # Player Entity
//!
//! A tradable entity owned by exactly one club at any instant.
//!
//! Only two fields are mutable after creation: the owning club and the
//! for-sale flag. Both change through the methods below so that the ownership
//! rules live in one place.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use transfer_market::domain::entities::Player;
//! use transfer_market::domain::value_objects::{ClubId, Price};
//!
//! let chelsea = ClubId::new_v4();
//! let arsenal = ClubId::new_v4();
//!
//! let mut player = Player::new(
//!     "Enzo Fernandez",
//!     "CM",
//!     chelsea,
//!     Price::new(Decimal::from(70_000_000)).unwrap(),
//! );
//! player.list_for_sale();
//!
//! let seller = player.transfer_to(arsenal).unwrap();
//! assert_eq!(seller, chelsea);
//! assert!(player.is_owned_by(&arsenal));
//! assert!(!player.is_listed_for_sale());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ClubId, PlayerId, Price};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A football player registered with a club.
///
/// # Invariants
///
/// - Owned by exactly one club (`current_club`)
/// - Ownership changes always clear the for-sale flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: String,
    age: Option<u8>,
    nationality: Option<String>,
    market_value: Price,
    current_club: ClubId,
    listed_for_sale: bool,
}

impl Player {
    /// Creates a new, unlisted player owned by `current_club`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        current_club: ClubId,
        market_value: Price,
    ) -> Self {
        Self {
            id: PlayerId::new_v4(),
            name: name.into(),
            position: position.into(),
            age: None,
            nationality: None,
            market_value,
            current_club,
            listed_for_sale: false,
        }
    }

    /// Sets the player's age.
    #[must_use]
    pub fn with_age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the player's nationality.
    #[must_use]
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    /// Creates a player with a specific ID (for reconstruction from storage).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: PlayerId,
        name: String,
        position: String,
        age: Option<u8>,
        nationality: Option<String>,
        market_value: Price,
        current_club: ClubId,
        listed_for_sale: bool,
    ) -> Self {
        Self {
            id,
            name,
            position,
            age,
            nationality,
            market_value,
            current_club,
            listed_for_sale,
        }
    }

    // ========== Accessors ==========

    /// Returns the player ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the playing position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the age, if known.
    #[inline]
    #[must_use]
    pub fn age(&self) -> Option<u8> {
        self.age
    }

    /// Returns the nationality, if known.
    #[inline]
    #[must_use]
    pub fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    /// Returns the market value.
    #[inline]
    #[must_use]
    pub fn market_value(&self) -> Price {
        self.market_value
    }

    /// Returns the owning club.
    #[inline]
    #[must_use]
    pub fn current_club(&self) -> ClubId {
        self.current_club
    }

    /// Returns true if the player is listed for sale.
    #[inline]
    #[must_use]
    pub fn is_listed_for_sale(&self) -> bool {
        self.listed_for_sale
    }

    /// Returns true if `club` currently owns the player.
    #[inline]
    #[must_use]
    pub fn is_owned_by(&self, club: &ClubId) -> bool {
        &self.current_club == club
    }

    // ========== Listing ==========

    /// Lists the player for sale.
    ///
    /// Idempotent. Returns true if the flag changed.
    pub fn list_for_sale(&mut self) -> bool {
        let changed = !self.listed_for_sale;
        self.listed_for_sale = true;
        changed
    }

    /// Removes the player from sale.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotListed` if the player is not listed.
    pub fn unlist(&mut self) -> DomainResult<()> {
        if !self.listed_for_sale {
            return Err(DomainError::NotListed(self.id));
        }
        self.listed_for_sale = false;
        Ok(())
    }

    // ========== Ownership ==========

    /// Checks that `buyer` may purchase this player outright.
    ///
    /// # Errors
    ///
    /// - `DomainError::NotForSale` if the player is not listed
    /// - `DomainError::SelfTrade` if `buyer` already owns the player
    pub fn ensure_purchasable_by(&self, buyer: &ClubId) -> DomainResult<()> {
        if !self.listed_for_sale {
            return Err(DomainError::NotForSale(self.id));
        }
        if self.is_owned_by(buyer) {
            return Err(DomainError::SelfTrade { club: *buyer });
        }
        Ok(())
    }

    /// Moves the player to `buyer` and takes it off the market.
    ///
    /// Returns the previous owner.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfTrade` if `buyer` already owns the player.
    pub fn transfer_to(&mut self, buyer: ClubId) -> DomainResult<ClubId> {
        if self.is_owned_by(&buyer) {
            return Err(DomainError::SelfTrade { club: buyer });
        }
        let seller = self.current_club;
        self.current_club = buyer;
        self.listed_for_sale = false;
        Ok(seller)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player[{}] {} ({}) club={} listed={}",
            self.id, self.name, self.position, self.current_club, self.listed_for_sale
        )
    }
}
