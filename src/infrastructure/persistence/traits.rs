//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The market persists four kinds of records (clubs, players, negotiations
//! and transfer records) behind a single [`MarketStore`]. Reads on the store
//! observe committed state only. Every write that touches more than one
//! record goes through a [`MarketTransaction`], which is the unit of
//! atomicity: either `commit` publishes all of its writes or none of them
//! become visible.
//!
//! # Locking Discipline
//!
//! Implementations must give [`MarketTransaction::lock_player`] exclusive
//! row-lock semantics held until commit or rollback. Callers lock the player
//! first and only then re-read the negotiations that reference it, so any two
//! transactions touching the same player serialise on that lock.
//!
//! # Examples
//!
//! ```ignore
//! use transfer_market::infrastructure::persistence::traits::MarketStore;
//!
//! async fn relist(store: &dyn MarketStore, id: PlayerId) -> RepositoryResult<()> {
//!     let mut tx = store.begin().await?;
//!     if let Some(mut player) = tx.lock_player(&id).await? {
//!         player.list_for_sale();
//!         tx.update_player(&player).await?;
//!     }
//!     tx.commit().await
//! }
//! ```

use crate::domain::entities::{Club, Negotiation, Player, TransferRecord};
use crate::domain::value_objects::{ClubId, NegotiationId, PlayerId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found where one was required.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Stored data could not be mapped back to a domain value.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Durable store for the market's records.
///
/// Methods on the store itself are single-statement reads or registry
/// writes; they never see the uncommitted writes of an open transaction.
#[async_trait]
pub trait MarketStore: Send + Sync + fmt::Debug {
    /// Opens a transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the backend is unreachable.
    async fn begin(&self) -> RepositoryResult<Box<dyn MarketTransaction>>;

    /// Saves a club (registry write, outside the transfer core).
    async fn save_club(&self, club: &Club) -> RepositoryResult<()>;

    /// Saves a player (registry write, outside the transfer core).
    async fn save_player(&self, player: &Player) -> RepositoryResult<()>;

    /// Gets a club by ID.
    async fn get_club(&self, id: &ClubId) -> RepositoryResult<Option<Club>>;

    /// Gets a player by ID.
    async fn get_player(&self, id: &PlayerId) -> RepositoryResult<Option<Player>>;

    /// Gets a negotiation by ID.
    async fn get_negotiation(&self, id: &NegotiationId) -> RepositoryResult<Option<Negotiation>>;

    /// Finds the players currently owned by a club, ordered by name.
    async fn find_players_by_club(&self, club: &ClubId) -> RepositoryResult<Vec<Player>>;

    /// Finds all players listed for sale, ordered by name.
    async fn find_players_for_sale(&self) -> RepositoryResult<Vec<Player>>;

    /// Finds negotiations addressed to a club, newest first.
    async fn find_negotiations_received(&self, club: &ClubId)
    -> RepositoryResult<Vec<Negotiation>>;

    /// Finds negotiations sent by a club, newest first.
    async fn find_negotiations_sent(&self, club: &ClubId) -> RepositoryResult<Vec<Negotiation>>;

    /// Finds every negotiation for a player, newest first.
    async fn find_negotiations_by_player(
        &self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<Negotiation>>;

    /// Finds the transfer records of a player, oldest first.
    async fn find_transfers_by_player(
        &self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<TransferRecord>>;
}

/// An open unit of work on a [`MarketStore`].
///
/// Dropping a transaction without calling [`commit`](Self::commit) discards
/// all of its writes.
#[async_trait]
pub trait MarketTransaction: Send {
    /// Reads a player and locks it until the transaction ends.
    async fn lock_player(&mut self, id: &PlayerId) -> RepositoryResult<Option<Player>>;

    /// Reads a negotiation without locking it.
    ///
    /// Used to discover which player to lock; the status must be re-checked
    /// with [`lock_negotiation`](Self::lock_negotiation) afterwards.
    async fn get_negotiation(&mut self, id: &NegotiationId)
    -> RepositoryResult<Option<Negotiation>>;

    /// Reads a negotiation and locks it until the transaction ends.
    async fn lock_negotiation(
        &mut self,
        id: &NegotiationId,
    ) -> RepositoryResult<Option<Negotiation>>;

    /// Reads and locks every pending negotiation for a player.
    async fn lock_pending_for_player(
        &mut self,
        player: &PlayerId,
    ) -> RepositoryResult<Vec<Negotiation>>;

    /// Writes the mutable fields of an existing player.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the player does not exist.
    async fn update_player(&mut self, player: &Player) -> RepositoryResult<()>;

    /// Inserts a new negotiation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the ID is already used.
    async fn insert_negotiation(&mut self, negotiation: &Negotiation) -> RepositoryResult<()>;

    /// Writes the status of an existing negotiation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the negotiation does not exist.
    async fn update_negotiation(&mut self, negotiation: &Negotiation) -> RepositoryResult<()>;

    /// Appends a transfer record.
    async fn insert_transfer(&mut self, record: &TransferRecord) -> RepositoryResult<()>;

    /// Publishes every write of this transaction atomically.
    async fn commit(self: Box<Self>) -> RepositoryResult<()>;

    /// Discards every write of this transaction.
    async fn rollback(self: Box<Self>) -> RepositoryResult<()>;
}
