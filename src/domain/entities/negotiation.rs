//! # Negotiation Aggregate
//!
//! A transfer offer from one club to another for a specific player.
//!
//! This module provides the [`Negotiation`] aggregate root. An offer is
//! created `Pending` and resolves exactly once; resolved offers are kept as an
//! audit trail and never deleted.
//!
//! # State Machine
//!
//! ```text
//! Pending → Accepted   (seller takes the offer)
//!    ├────→ Rejected   (seller declines)
//!    └────→ Cancelled  (player changed owner through another path)
//! ```
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use transfer_market::domain::entities::Negotiation;
//! use transfer_market::domain::value_objects::{ClubId, NegotiationStatus, PlayerId};
//!
//! let arsenal = ClubId::new_v4();
//! let chelsea = ClubId::new_v4();
//!
//! let mut offer = Negotiation::new(
//!     arsenal,
//!     chelsea,
//!     PlayerId::new_v4(),
//!     Decimal::from(1_000_000),
//! )
//! .unwrap();
//!
//! assert_eq!(offer.status(), NegotiationStatus::Pending);
//! offer.accept().unwrap();
//! assert!(offer.reject().is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    ClubId, NegotiationId, NegotiationStatus, PlayerId, Price, Timestamp,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Negotiation aggregate root.
///
/// # Invariants
///
/// - `from_club` (buyer) differs from `to_club` (seller)
/// - `offered_price` is strictly positive
/// - Transitions only out of `Pending`, each exactly once
/// - `created_at` never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Negotiation {
    /// Unique identifier for this negotiation.
    id: NegotiationId,
    /// The offering (buying) club.
    from_club: ClubId,
    /// The selling club, owner of the player when the offer was made.
    to_club: ClubId,
    /// The player the offer is for.
    player_id: PlayerId,
    /// The proposed fee.
    offered_price: Price,
    /// Current status.
    status: NegotiationStatus,
    /// When the offer was made.
    created_at: Timestamp,
    /// When the offer left `Pending`.
    resolved_at: Option<Timestamp>,
}

impl Negotiation {
    /// Creates a new pending offer.
    ///
    /// # Arguments
    ///
    /// * `from_club` - The club making the offer
    /// * `to_club` - The club currently owning the player
    /// * `player_id` - The player being bid for
    /// * `offered_price` - The proposed fee
    ///
    /// # Errors
    ///
    /// - `DomainError::SelfTrade` if `from_club == to_club`
    /// - `DomainError::InvalidPrice` if `offered_price <= 0`
    pub fn new(
        from_club: ClubId,
        to_club: ClubId,
        player_id: PlayerId,
        offered_price: Decimal,
    ) -> DomainResult<Self> {
        if from_club == to_club {
            return Err(DomainError::SelfTrade { club: from_club });
        }
        if offered_price <= Decimal::ZERO {
            return Err(DomainError::InvalidPrice(offered_price));
        }

        Ok(Self {
            id: NegotiationId::new_v4(),
            from_club,
            to_club,
            player_id,
            offered_price: Price::new(offered_price)?,
            status: NegotiationStatus::Pending,
            created_at: Timestamp::now(),
            resolved_at: None,
        })
    }

    /// Creates a negotiation with a specific ID (for reconstruction from storage).
    ///
    /// Bypasses validation; only use with trusted storage.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: NegotiationId,
        from_club: ClubId,
        to_club: ClubId,
        player_id: PlayerId,
        offered_price: Price,
        status: NegotiationStatus,
        created_at: Timestamp,
        resolved_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            from_club,
            to_club,
            player_id,
            offered_price,
            status,
            created_at,
            resolved_at,
        }
    }

    fn transition_to(&mut self, target: NegotiationStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::AlreadyResolved {
                id: self.id,
                status: self.status,
            });
        }
        self.status = target;
        self.resolved_at = Some(Timestamp::now());
        Ok(())
    }

    // ========== Accessors ==========

    /// Returns the negotiation ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> NegotiationId {
        self.id
    }

    /// Returns the offering (buying) club.
    #[inline]
    #[must_use]
    pub fn from_club(&self) -> ClubId {
        self.from_club
    }

    /// Returns the selling club.
    #[inline]
    #[must_use]
    pub fn to_club(&self) -> ClubId {
        self.to_club
    }

    /// Returns the player the offer is for.
    #[inline]
    #[must_use]
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Returns the offered price.
    #[inline]
    #[must_use]
    pub fn offered_price(&self) -> Price {
        self.offered_price
    }

    /// Returns the current status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> NegotiationStatus {
        self.status
    }

    /// Returns when the offer was made.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the offer was resolved, if it has been.
    #[inline]
    #[must_use]
    pub fn resolved_at(&self) -> Option<Timestamp> {
        self.resolved_at
    }

    /// Returns true if the offer still awaits a decision.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Returns true if `club` is the seller and may answer the offer.
    #[inline]
    #[must_use]
    pub fn is_addressed_to(&self, club: &ClubId) -> bool {
        &self.to_club == club
    }

    // ========== State Transitions ==========

    /// Accepts the offer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyResolved` if not pending.
    pub fn accept(&mut self) -> DomainResult<()> {
        self.transition_to(NegotiationStatus::Accepted)
    }

    /// Rejects the offer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyResolved` if not pending.
    pub fn reject(&mut self) -> DomainResult<()> {
        self.transition_to(NegotiationStatus::Rejected)
    }

    /// Cancels the offer because the player changed owner elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AlreadyResolved` if not pending.
    pub fn cancel(&mut self) -> DomainResult<()> {
        self.transition_to(NegotiationStatus::Cancelled)
    }
}

impl fmt::Display for Negotiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Negotiation[{}] {} -> {} player={} price={} status={}",
            self.id, self.from_club, self.to_club, self.player_id, self.offered_price, self.status
        )
    }
}
