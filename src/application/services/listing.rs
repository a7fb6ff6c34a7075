//! # Listing Manager
//!
//! Toggles a player's for-sale flag on behalf of the owning club.
//!
//! Listing never touches negotiations: an unlisted player keeps its pending
//! offers, and those offers stay resolvable.

use crate::application::error::ApplicationResult;
use crate::application::services::guards::{ensure_owner, found};
use crate::domain::entities::Player;
use crate::domain::value_objects::{Actor, PlayerId};
use crate::infrastructure::persistence::MarketStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Lists and unlists players.
#[derive(Debug, Clone)]
pub struct ListingManager {
    store: Arc<dyn MarketStore>,
}

impl ListingManager {
    /// Creates a listing manager over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self { store }
    }

    /// Puts a player on the market.
    ///
    /// Re-listing an already listed player succeeds without writing.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the player does not exist
    /// - `Forbidden` if the actor's club does not own the player
    pub async fn list_for_sale(&self, actor: &Actor, player_id: PlayerId) -> ApplicationResult<Player> {
        let mut tx = self.store.begin().await?;
        let mut player = found(tx.lock_player(&player_id).await?, "Player", player_id)?;
        ensure_owner(actor, &player)?;

        if !player.list_for_sale() {
            tx.rollback().await?;
            debug!(player_id = %player_id, "player already listed");
            return Ok(player);
        }

        tx.update_player(&player).await?;
        tx.commit().await?;

        info!(player_id = %player_id, club_id = %actor.managed_club(), "player listed for sale");
        Ok(player)
    }

    /// Takes a player off the market.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the player does not exist
    /// - `Forbidden` if the actor's club does not own the player
    /// - `NotListed` if the player is not listed
    pub async fn unlist(&self, actor: &Actor, player_id: PlayerId) -> ApplicationResult<Player> {
        let mut tx = self.store.begin().await?;
        let mut player = found(tx.lock_player(&player_id).await?, "Player", player_id)?;
        ensure_owner(actor, &player)?;
        player.unlist()?;

        tx.update_player(&player).await?;
        tx.commit().await?;

        info!(player_id = %player_id, club_id = %actor.managed_club(), "player unlisted");
        Ok(player)
    }
}
