//! # Negotiation Status
//!
//! Lifecycle state machine of a transfer offer.
//!
//! # State Machine
//!
//! ```text
//! Pending ──accept──→ Accepted   (terminal)
//!    │
//!    ├──reject──────→ Rejected   (terminal)
//!    │
//!    └──cascade─────→ Cancelled  (terminal)
//! ```
//!
//! `Cancelled` is never requested directly: it is applied automatically to
//! competing offers when a player changes owner.
//!
//! # Examples
//!
//! ```
//! use transfer_market::domain::value_objects::NegotiationStatus;
//!
//! let status = NegotiationStatus::Pending;
//! assert!(status.can_transition_to(NegotiationStatus::Accepted));
//! assert!(!NegotiationStatus::Accepted.can_transition_to(NegotiationStatus::Rejected));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a [`Negotiation`](crate::domain::entities::Negotiation).
///
/// # Terminal States
///
/// - [`Accepted`](NegotiationStatus::Accepted): the selling club took the offer
/// - [`Rejected`](NegotiationStatus::Rejected): the selling club declined it
/// - [`Cancelled`](NegotiationStatus::Cancelled): the player changed owner through another path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegotiationStatus {
    /// Awaiting a decision by the selling club.
    #[default]
    Pending,

    /// The selling club accepted the offer (terminal).
    Accepted,

    /// The selling club rejected the offer (terminal).
    Rejected,

    /// Superseded by another ownership change of the same player (terminal).
    Cancelled,
}

impl NegotiationStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Accepted,
        Self::Rejected,
        Self::Cancelled,
    ];

    /// Returns true if this is a terminal state.
    ///
    /// Terminal states have no outgoing transitions.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns true if the offer is still awaiting a decision.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if this state can transition to the target state.
    ///
    /// Only `Pending` has outgoing transitions, each to a terminal state.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Rejected)
                | (Self::Pending, Self::Cancelled)
        )
    }

    /// Returns the valid next states from this state.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::Pending => vec![Self::Accepted, Self::Rejected, Self::Cancelled],
            Self::Accepted | Self::Rejected | Self::Cancelled => vec![],
        }
    }

    /// Returns the storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for NegotiationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown negotiation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNegotiationStatusError(
    /// The rejected input.
    pub String,
);

impl fmt::Display for InvalidNegotiationStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid negotiation status: {}", self.0)
    }
}

impl std::error::Error for InvalidNegotiationStatusError {}

impl FromStr for NegotiationStatus {
    type Err = InvalidNegotiationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(InvalidNegotiationStatusError(other.to_string())),
        }
    }
}
