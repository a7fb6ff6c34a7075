//! # Transfer Record
//!
//! Immutable ledger entry written whenever a player changes owner.

use crate::domain::entities::negotiation::Negotiation;
use crate::domain::value_objects::{ClubId, NegotiationId, PlayerId, Price, Timestamp, TransferId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the ownership change came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    /// Bought outright from the for-sale list.
    DirectPurchase,
    /// Settled by an accepted negotiation.
    Negotiated,
}

impl TransferKind {
    /// Returns the storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DirectPurchase => "direct_purchase",
            Self::Negotiated => "negotiated",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct_purchase" => Ok(Self::DirectPurchase),
            "negotiated" => Ok(Self::Negotiated),
            other => Err(format!("invalid transfer kind: {other}")),
        }
    }
}

/// A completed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    id: TransferId,
    player_id: PlayerId,
    seller: ClubId,
    buyer: ClubId,
    price: Price,
    kind: TransferKind,
    negotiation_id: Option<NegotiationId>,
    occurred_at: Timestamp,
}

impl TransferRecord {
    /// Records a direct purchase at the given price.
    #[must_use]
    pub fn direct_purchase(player_id: PlayerId, seller: ClubId, buyer: ClubId, price: Price) -> Self {
        Self {
            id: TransferId::new_v4(),
            player_id,
            seller,
            buyer,
            price,
            kind: TransferKind::DirectPurchase,
            negotiation_id: None,
            occurred_at: Timestamp::now(),
        }
    }

    /// Records the transfer settled by an accepted negotiation.
    #[must_use]
    pub fn negotiated(negotiation: &Negotiation) -> Self {
        Self {
            id: TransferId::new_v4(),
            player_id: negotiation.player_id(),
            seller: negotiation.to_club(),
            buyer: negotiation.from_club(),
            price: negotiation.offered_price(),
            kind: TransferKind::Negotiated,
            negotiation_id: Some(negotiation.id()),
            occurred_at: negotiation.resolved_at().unwrap_or_else(Timestamp::now),
        }
    }

    /// Creates a record with a specific ID (for reconstruction from storage).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: TransferId,
        player_id: PlayerId,
        seller: ClubId,
        buyer: ClubId,
        price: Price,
        kind: TransferKind,
        negotiation_id: Option<NegotiationId>,
        occurred_at: Timestamp,
    ) -> Self {
        Self {
            id,
            player_id,
            seller,
            buyer,
            price,
            kind,
            negotiation_id,
            occurred_at,
        }
    }

    /// Returns the record ID.
    #[must_use]
    pub fn id(&self) -> TransferId {
        self.id
    }

    /// Returns the transferred player.
    #[must_use]
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Returns the previous owner.
    #[must_use]
    pub fn seller(&self) -> ClubId {
        self.seller
    }

    /// Returns the new owner.
    #[must_use]
    pub fn buyer(&self) -> ClubId {
        self.buyer
    }

    /// Returns the fee.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns how the transfer happened.
    #[must_use]
    pub fn kind(&self) -> TransferKind {
        self.kind
    }

    /// Returns the settling negotiation, for negotiated transfers.
    #[must_use]
    pub fn negotiation_id(&self) -> Option<NegotiationId> {
        self.negotiation_id
    }

    /// Returns when the transfer happened.
    #[must_use]
    pub fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }
}
