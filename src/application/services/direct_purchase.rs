//! # Direct Purchase Handler
//!
//! Buys a listed player outright, without a negotiation.
//!
//! The ownership move, the cascade over pending offers and the ledger entry
//! are written in one transaction that holds the player lock throughout.

use crate::application::error::ApplicationResult;
use crate::application::services::guards::{cancel_pending, found};
use crate::domain::entities::{Player, TransferRecord};
use crate::domain::value_objects::{Actor, NegotiationId, PlayerId};
use crate::infrastructure::persistence::MarketStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a completed direct purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    /// The player after the move.
    pub player: Player,
    /// Ledger entry for the purchase.
    pub transfer: TransferRecord,
    /// Offers closed because the player changed owner.
    pub cancelled: Vec<NegotiationId>,
}

/// Executes direct purchases.
#[derive(Debug, Clone)]
pub struct DirectPurchaseHandler {
    store: Arc<dyn MarketStore>,
}

impl DirectPurchaseHandler {
    /// Creates a handler over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self { store }
    }

    /// Moves a listed player to the actor's club at its market value.
    ///
    /// Every pending negotiation for the player is cancelled in the same
    /// transaction.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the player does not exist
    /// - `NotForSale` if the player is not listed
    /// - `SelfTrade` if the actor's club already owns the player
    pub async fn purchase(
        &self,
        actor: &Actor,
        player_id: PlayerId,
    ) -> ApplicationResult<PurchaseOutcome> {
        let buyer = actor.managed_club();
        let mut tx = self.store.begin().await?;
        let mut player = found(tx.lock_player(&player_id).await?, "Player", player_id)?;

        if let Err(e) = player.ensure_purchasable_by(&buyer) {
            debug!(player_id = %player_id, buyer = %buyer, error = %e, "purchase refused");
            return Err(e.into());
        }

        let seller = player.transfer_to(buyer)?;
        tx.update_player(&player).await?;
        let cancelled = cancel_pending(tx.as_mut(), player_id, None).await?;

        let transfer =
            TransferRecord::direct_purchase(player_id, seller, buyer, player.market_value());
        tx.insert_transfer(&transfer).await?;
        tx.commit().await?;

        info!(
            player_id = %player_id,
            seller = %seller,
            buyer = %buyer,
            price = %transfer.price(),
            "player purchased"
        );
        Ok(PurchaseOutcome {
            player,
            transfer,
            cancelled,
        })
    }
}
