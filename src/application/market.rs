//! # Transfer Market
//!
//! Facade bundling every market service over one shared store.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use transfer_market::application::TransferMarket;
//! use transfer_market::domain::entities::{Club, Player};
//! use transfer_market::domain::value_objects::{Actor, Price};
//!
//! # tokio_test::block_on(async {
//! let market = TransferMarket::in_memory();
//! let arsenal = market.register_club(Club::new("Arsenal", "England")).await.unwrap();
//! let chelsea = market.register_club(Club::new("Chelsea", "England")).await.unwrap();
//! let player = market
//!     .register_player(Player::new("Cole Palmer", "AM", chelsea.id(), Price::ZERO))
//!     .await
//!     .unwrap();
//!
//! let offer = market
//!     .create_negotiation(&Actor::new(arsenal.id()), player.id(), Decimal::from(1_000_000))
//!     .await
//!     .unwrap();
//! let outcome = market.accept(&Actor::new(chelsea.id()), offer.id()).await.unwrap();
//! assert!(outcome.player.is_owned_by(&arsenal.id()));
//! # });
//! ```

use crate::application::error::ApplicationResult;
use crate::application::services::{
    AcceptOutcome, DirectPurchaseHandler, Inbox, InboxQueryService, ListingManager,
    NegotiationLifecycleManager, OfferView, PurchaseOutcome, SquadQueryService,
};
use crate::domain::entities::{Club, Negotiation, Player, TransferRecord};
use crate::domain::value_objects::{Actor, NegotiationId, PlayerId};
use crate::infrastructure::persistence::{InMemoryMarketStore, MarketStore};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// Entry point for every market operation.
///
/// Cheap to clone; clones share the same store.
#[derive(Debug, Clone)]
pub struct TransferMarket {
    store: Arc<dyn MarketStore>,
    listings: ListingManager,
    purchases: DirectPurchaseHandler,
    negotiations: NegotiationLifecycleManager,
    inbox: InboxQueryService,
    squads: SquadQueryService,
}

impl TransferMarket {
    /// Creates a market over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self {
            listings: ListingManager::new(Arc::clone(&store)),
            purchases: DirectPurchaseHandler::new(Arc::clone(&store)),
            negotiations: NegotiationLifecycleManager::new(Arc::clone(&store)),
            inbox: InboxQueryService::new(Arc::clone(&store)),
            squads: SquadQueryService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Creates a market over a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryMarketStore::new()))
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn MarketStore> {
        &self.store
    }

    // ========== Registry ==========

    /// Stores a club record on behalf of the registry.
    ///
    /// # Errors
    ///
    /// Returns `Infrastructure` on storage failure.
    pub async fn register_club(&self, club: Club) -> ApplicationResult<Club> {
        self.store.save_club(&club).await?;
        debug!(club_id = %club.id(), name = club.name(), "club registered");
        Ok(club)
    }

    /// Stores a player record on behalf of the registry.
    ///
    /// # Errors
    ///
    /// Returns `Infrastructure` on storage failure.
    pub async fn register_player(&self, player: Player) -> ApplicationResult<Player> {
        self.store.save_player(&player).await?;
        debug!(player_id = %player.id(), name = player.name(), "player registered");
        Ok(player)
    }

    // ========== Listing ==========

    /// See [`ListingManager::list_for_sale`].
    ///
    /// # Errors
    ///
    /// `NotFound` or `Forbidden`.
    pub async fn list_for_sale(&self, actor: &Actor, player_id: PlayerId) -> ApplicationResult<Player> {
        self.listings.list_for_sale(actor, player_id).await
    }

    /// See [`ListingManager::unlist`].
    ///
    /// # Errors
    ///
    /// `NotFound`, `Forbidden` or `NotListed`.
    pub async fn unlist(&self, actor: &Actor, player_id: PlayerId) -> ApplicationResult<Player> {
        self.listings.unlist(actor, player_id).await
    }

    // ========== Transfers ==========

    /// See [`DirectPurchaseHandler::purchase`].
    ///
    /// # Errors
    ///
    /// `NotFound`, `NotForSale` or `SelfTrade`.
    pub async fn purchase(&self, actor: &Actor, player_id: PlayerId) -> ApplicationResult<PurchaseOutcome> {
        self.purchases.purchase(actor, player_id).await
    }

    /// See [`NegotiationLifecycleManager::create`].
    ///
    /// # Errors
    ///
    /// `NotFound`, `SelfTrade` or `InvalidPrice`.
    pub async fn create_negotiation(
        &self,
        actor: &Actor,
        player_id: PlayerId,
        offered_price: Decimal,
    ) -> ApplicationResult<Negotiation> {
        self.negotiations.create(actor, player_id, offered_price).await
    }

    /// See [`NegotiationLifecycleManager::accept`].
    ///
    /// # Errors
    ///
    /// `NotFound`, `Forbidden` or `AlreadyResolved`.
    pub async fn accept(&self, actor: &Actor, negotiation_id: NegotiationId) -> ApplicationResult<AcceptOutcome> {
        self.negotiations.accept(actor, negotiation_id).await
    }

    /// See [`NegotiationLifecycleManager::reject`].
    ///
    /// # Errors
    ///
    /// `NotFound`, `Forbidden` or `AlreadyResolved`.
    pub async fn reject(&self, actor: &Actor, negotiation_id: NegotiationId) -> ApplicationResult<Negotiation> {
        self.negotiations.reject(actor, negotiation_id).await
    }

    // ========== Queries ==========

    /// See [`InboxQueryService::received_offers`].
    ///
    /// # Errors
    ///
    /// `Infrastructure` on storage failure.
    pub async fn received_offers(&self, actor: &Actor) -> ApplicationResult<Vec<OfferView>> {
        self.inbox.received_offers(actor).await
    }

    /// See [`InboxQueryService::sent_offers`].
    ///
    /// # Errors
    ///
    /// `Infrastructure` on storage failure.
    pub async fn sent_offers(&self, actor: &Actor) -> ApplicationResult<Vec<OfferView>> {
        self.inbox.sent_offers(actor).await
    }

    /// See [`InboxQueryService::inbox`].
    ///
    /// # Errors
    ///
    /// `Infrastructure` on storage failure.
    pub async fn inbox(&self, actor: &Actor) -> ApplicationResult<Inbox> {
        self.inbox.inbox(actor).await
    }

    /// See [`SquadQueryService::my_players`].
    ///
    /// # Errors
    ///
    /// `Infrastructure` on storage failure.
    pub async fn my_players(&self, actor: &Actor) -> ApplicationResult<Vec<Player>> {
        self.squads.my_players(actor).await
    }

    /// See [`SquadQueryService::players_for_sale`].
    ///
    /// # Errors
    ///
    /// `Infrastructure` on storage failure.
    pub async fn players_for_sale(&self) -> ApplicationResult<Vec<Player>> {
        self.squads.players_for_sale().await
    }

    /// See [`SquadQueryService::transfer_history`].
    ///
    /// # Errors
    ///
    /// `Infrastructure` on storage failure.
    pub async fn transfer_history(&self, player_id: PlayerId) -> ApplicationResult<Vec<TransferRecord>> {
        self.squads.transfer_history(player_id).await
    }
}
