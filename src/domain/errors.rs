//! # Domain Errors
//!
//! Business rule violations raised by the market entities.
//!
//! These are expected, user-facing outcomes: a club trying to buy its own
//! player, an offer answered twice, a price that is not positive. They are
//! returned to the caller, never logged as failures of the system.

use crate::domain::value_objects::{ClubId, NegotiationId, NegotiationStatus, PlayerId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error raised when a domain rule is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The operation would make a club trade with itself.
    #[error("club {club} cannot trade with itself")]
    SelfTrade {
        /// The club on both sides of the trade.
        club: ClubId,
    },

    /// Purchase attempted on a player that is not listed.
    #[error("player {0} is not for sale")]
    NotForSale(PlayerId),

    /// Unlist attempted on a player that is not listed.
    #[error("player {0} is not listed for sale")]
    NotListed(PlayerId),

    /// Offered price is zero or negative.
    #[error("offered price must be positive, got {0}")]
    InvalidPrice(Decimal),

    /// A monetary amount is negative.
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// Transition attempted on a negotiation that is no longer pending.
    #[error("negotiation {id} is already {status}")]
    AlreadyResolved {
        /// The negotiation.
        id: NegotiationId,
        /// Its current, terminal status.
        status: NegotiationStatus,
    },

    /// The offer is addressed to a club that no longer owns the player.
    #[error("negotiation {id} targets club {expected} but player is owned by {actual}")]
    OwnershipMismatch {
        /// The negotiation.
        id: NegotiationId,
        /// The club the offer was sent to.
        expected: ClubId,
        /// The club that currently owns the player.
        actual: ClubId,
    },
}

impl DomainError {
    /// Returns true if the error reports a negotiation that lost a race.
    #[must_use]
    pub fn is_already_resolved(&self) -> bool {
        matches!(
            self,
            Self::AlreadyResolved { .. } | Self::OwnershipMismatch { .. }
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
