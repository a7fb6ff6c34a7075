//! # Squad Query Service
//!
//! Read-only views of who owns whom: a club's squad, the players on the
//! market and a player's transfer history.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{Player, TransferRecord};
use crate::domain::value_objects::{Actor, PlayerId};
use crate::infrastructure::persistence::MarketStore;
use std::sync::Arc;
use tracing::debug;

/// Answers squad and market queries.
#[derive(Debug, Clone)]
pub struct SquadQueryService {
    store: Arc<dyn MarketStore>,
}

impl SquadQueryService {
    /// Creates a query service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self { store }
    }

    /// Players owned by the actor's club, by name.
    ///
    /// # Errors
    ///
    /// Returns `Infrastructure` on storage failure.
    pub async fn my_players(&self, actor: &Actor) -> ApplicationResult<Vec<Player>> {
        let players = self.store.find_players_by_club(&actor.managed_club()).await?;
        debug!(club_id = %actor.managed_club(), count = players.len(), "loaded squad");
        Ok(players)
    }

    /// Every listed player, by name.
    ///
    /// # Errors
    ///
    /// Returns `Infrastructure` on storage failure.
    pub async fn players_for_sale(&self) -> ApplicationResult<Vec<Player>> {
        let players = self.store.find_players_for_sale().await?;
        debug!(count = players.len(), "loaded players for sale");
        Ok(players)
    }

    /// Ownership changes of a player, oldest first.
    ///
    /// An unknown player has an empty history.
    ///
    /// # Errors
    ///
    /// Returns `Infrastructure` on storage failure.
    pub async fn transfer_history(&self, player_id: PlayerId) -> ApplicationResult<Vec<TransferRecord>> {
        let history = self.store.find_transfers_by_player(&player_id).await?;
        debug!(player_id = %player_id, count = history.len(), "loaded transfer history");
        Ok(history)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ClubId, Price};
    use crate::infrastructure::persistence::InMemoryMarketStore;

    #[tokio::test]
    async fn squad_and_market_views() {
        let store = Arc::new(InMemoryMarketStore::new());
        let club = ClubId::new_v4();
        let mut listed = Player::new("Trossard", "LW", club, Price::ZERO);
        listed.list_for_sale();
        let kept = Player::new("Raya", "GK", club, Price::ZERO);
        let elsewhere = Player::new("Isak", "ST", ClubId::new_v4(), Price::ZERO);
        for p in [&listed, &kept, &elsewhere] {
            store.save_player(p).await.unwrap();
        }

        let service = SquadQueryService::new(store.clone());
        let squad = service.my_players(&Actor::new(club)).await.unwrap();
        assert_eq!(squad, vec![kept, listed.clone()]);

        let market = service.players_for_sale().await.unwrap();
        assert_eq!(market, vec![listed]);
    }

    #[tokio::test]
    async fn unknown_player_has_no_history() {
        let service = SquadQueryService::new(Arc::new(InMemoryMarketStore::new()));
        let history = service.transfer_history(PlayerId::new_v4()).await.unwrap();
        assert!(history.is_empty());
    }
}
