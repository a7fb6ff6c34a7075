//! # In-Memory Market Store
//!
//! In-memory implementation of [`MarketStore`] for testing and local runs.
//!
//! The whole market lives behind one `tokio::sync::RwLock`. A transaction
//! takes the write half for its entire lifetime and writes in place, recording
//! an undo step for every change. Rollback (or drop) replays the undo log in
//! reverse before the lock is released; commit simply discards it. Readers
//! never see uncommitted writes, and transactions are fully serialised.

use crate::domain::entities::{Club, Negotiation, Player, TransferRecord};
use crate::domain::value_objects::{ClubId, NegotiationId, PlayerId};
use crate::infrastructure::persistence::traits::{
    MarketStore, MarketTransaction, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};

#[derive(Debug, Default)]
struct MarketState {
    clubs: HashMap<ClubId, Club>,
    players: HashMap<PlayerId, Player>,
    negotiations: HashMap<NegotiationId, Negotiation>,
    /// Negotiation IDs in insertion order, used to break `created_at` ties.
    negotiation_order: Vec<NegotiationId>,
    transfers: Vec<TransferRecord>,
}

impl MarketState {
    fn negotiations_newest_first(&self, keep: impl Fn(&Negotiation) -> bool) -> Vec<Negotiation> {
        let mut found: Vec<Negotiation> = self
            .negotiation_order
            .iter()
            .rev()
            .filter_map(|id| self.negotiations.get(id))
            .filter(|n| keep(n))
            .cloned()
            .collect();
        // Stable sort keeps reverse insertion order among equal timestamps.
        found.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        found
    }

    fn players_by_name(&self, keep: impl Fn(&Player) -> bool) -> Vec<Player> {
        let mut found: Vec<Player> = self.players.values().filter(|p| keep(p)).cloned().collect();
        found.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
        found
    }
}

/// In-memory implementation of [`MarketStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketStore {
    state: Arc<RwLock<MarketState>>,
}

impl InMemoryMarketStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored negotiations.
    pub async fn negotiation_count(&self) -> usize {
        self.state.read().await.negotiations.len()
    }

    /// Returns the number of stored transfer records.
    pub async fn transfer_count(&self) -> usize {
        self.state.read().await.transfers.len()
    }

    /// Clears every record.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        *state = MarketState::default();
    }
}

#[async_trait]
impl MarketStore for InMemoryMarketStore {
    async fn begin(&self) -> RepositoryResult<Box<dyn MarketTransaction>> {
        let state = Arc::clone(&self.state).write_owned().await;
        Ok(Box::new(InMemoryTransaction {
            state,
            undo: Vec::new(),
        }))
    }

    async fn save_club(&self, club: &Club) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        state.clubs.insert(club.id(), club.clone());
        Ok(())
    }

    async fn save_player(&self, player: &Player) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        state.players.insert(player.id(), player.clone());
        Ok(())
    }

    async fn get_club(&self, id: &ClubId) -> RepositoryResult<Option<Club>> {
        Ok(self.state.read().await.clubs.get(id).cloned())
    }

    async fn get_player(&self, id: &PlayerId) -> RepositoryResult<Option<Player>> {
        Ok(self.state.read().await.players.get(id).cloned())
    }

    async fn get_negotiation(&self, id: &NegotiationId) -> RepositoryResult<Option<Negotiation>> {
        Ok(self.state.read().await.negotiations.get(id).cloned())
    }

    async fn find_players_by_club(&self, club: &ClubId) -> RepositoryResult<Vec<Player>> {
        let state = self.state.read().await;
        Ok(state.players_by_name(|p| p.is_owned_by(club)))
    }

    async fn find_players_for_sale(&self) -> RepositoryResult<Vec<Player>> {
        let state = self.state.read().await;
        Ok(state.players_by_name(Player::is_listed_for_sale))
    }

    async fn find_negotiations_received(
        &self,
        club: &ClubId,
    ) -> RepositoryResult<Vec<Negotiation>> {
        let state = self.state.read().await;
        Ok(state.negotiations_newest_first(|n| n.to_club() == *club))
    }

    async fn find_negotiations_sent(&self, club: &ClubId) -> RepositoryResult<Vec<Negotiation>> {
        let state = self.state.read().await;
        Ok(state.negotiations_newest_first(|n| n.from_club() == *club))
    }

    async fn find_negotiations_by_player(
        &self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<Negotiation>> {
        let state = self.state.read().await;
        Ok(state.negotiations_newest_first(|n| n.player_id() == *player))
    }

    async fn find_transfers_by_player(
        &self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<TransferRecord>> {
        let state = self.state.read().await;
        Ok(state
            .transfers
            .iter()
            .filter(|t| t.player_id() == *player)
            .cloned()
            .collect())
    }
}

/// Inverse of one write made inside a transaction.
#[derive(Debug)]
enum Undo {
    RestorePlayer(Player),
    RestoreNegotiation(Negotiation),
    RemoveNegotiation(NegotiationId),
    PopTransfer,
}

/// Transaction over an [`InMemoryMarketStore`].
///
/// Holds the store's write lock until it is committed, rolled back or dropped.
struct InMemoryTransaction {
    state: OwnedRwLockWriteGuard<MarketState>,
    undo: Vec<Undo>,
}

impl InMemoryTransaction {
    fn revert(&mut self) {
        while let Some(step) = self.undo.pop() {
            match step {
                Undo::RestorePlayer(player) => {
                    self.state.players.insert(player.id(), player);
                }
                Undo::RestoreNegotiation(negotiation) => {
                    self.state.negotiations.insert(negotiation.id(), negotiation);
                }
                Undo::RemoveNegotiation(id) => {
                    self.state.negotiations.remove(&id);
                    // Undo runs newest first, so the inserted ID is last.
                    self.state.negotiation_order.pop();
                }
                Undo::PopTransfer => {
                    self.state.transfers.pop();
                }
            }
        }
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        self.revert();
    }
}

#[async_trait]
impl MarketTransaction for InMemoryTransaction {
    async fn lock_player(&mut self, id: &PlayerId) -> RepositoryResult<Option<Player>> {
        Ok(self.state.players.get(id).cloned())
    }

    async fn get_negotiation(
        &mut self,
        id: &NegotiationId,
    ) -> RepositoryResult<Option<Negotiation>> {
        Ok(self.state.negotiations.get(id).cloned())
    }

    async fn lock_negotiation(
        &mut self,
        id: &NegotiationId,
    ) -> RepositoryResult<Option<Negotiation>> {
        Ok(self.state.negotiations.get(id).cloned())
    }

    async fn lock_pending_for_player(
        &mut self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<Negotiation>> {
        Ok(self
            .state
            .negotiations_newest_first(|n| n.player_id() == *player && n.is_pending()))
    }

    async fn update_player(&mut self, player: &Player) -> RepositoryResult<()> {
        match self.state.players.get_mut(&player.id()) {
            Some(stored) => {
                let previous = std::mem::replace(stored, player.clone());
                self.undo.push(Undo::RestorePlayer(previous));
                Ok(())
            }
            None => Err(RepositoryError::not_found("Player", player.id().to_string())),
        }
    }

    async fn insert_negotiation(&mut self, negotiation: &Negotiation) -> RepositoryResult<()> {
        let id = negotiation.id();
        if self.state.negotiations.contains_key(&id) {
            return Err(RepositoryError::duplicate("Negotiation", id.to_string()));
        }
        self.state.negotiations.insert(id, negotiation.clone());
        self.state.negotiation_order.push(id);
        self.undo.push(Undo::RemoveNegotiation(id));
        Ok(())
    }

    async fn update_negotiation(&mut self, negotiation: &Negotiation) -> RepositoryResult<()> {
        match self.state.negotiations.get_mut(&negotiation.id()) {
            Some(stored) => {
                let previous = std::mem::replace(stored, negotiation.clone());
                self.undo.push(Undo::RestoreNegotiation(previous));
                Ok(())
            }
            None => Err(RepositoryError::not_found(
                "Negotiation",
                negotiation.id().to_string(),
            )),
        }
    }

    async fn insert_transfer(&mut self, record: &TransferRecord) -> RepositoryResult<()> {
        self.state.transfers.push(record.clone());
        self.undo.push(Undo::PopTransfer);
        Ok(())
    }

    async fn commit(self: Box<Self>) -> RepositoryResult<()> {
        let mut tx = self;
        tx.undo.clear();
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> RepositoryResult<()> {
        Ok(())
    }
}
