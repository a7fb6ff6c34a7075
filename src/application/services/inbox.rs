//! # Inbox Query Service
//!
//! Read-only projections of a club's incoming and outgoing offers.
//!
//! Reads go straight to the store and observe committed state only.

use crate::application::error::ApplicationResult;
use crate::domain::entities::Negotiation;
use crate::domain::value_objects::{
    Actor, ClubId, NegotiationId, NegotiationStatus, PlayerId, Price, Timestamp,
};
use crate::infrastructure::persistence::MarketStore;
use futures::future::try_join;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A negotiation as shown in a club's inbox.
///
/// Names are resolved from the registry at read time and are `None` when the
/// registry has no record for the referenced player or club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferView {
    /// Negotiation ID.
    pub id: NegotiationId,
    /// Player the offer is for.
    pub player_id: PlayerId,
    /// Player display name.
    pub player_name: Option<String>,
    /// Offering club.
    pub from_club: ClubId,
    /// Offering club display name.
    pub from_club_name: Option<String>,
    /// Selling club.
    pub to_club: ClubId,
    /// Selling club display name.
    pub to_club_name: Option<String>,
    /// Proposed fee.
    pub offered_price: Price,
    /// Current status.
    pub status: NegotiationStatus,
    /// When the offer was made.
    pub created_at: Timestamp,
    /// When the offer left `pending`.
    pub resolved_at: Option<Timestamp>,
}

/// Both sides of a club's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inbox {
    /// Offers addressed to the club, newest first.
    pub received_offers: Vec<OfferView>,
    /// Offers made by the club, newest first.
    pub sent_offers: Vec<OfferView>,
}

/// Answers inbox queries.
#[derive(Debug, Clone)]
pub struct InboxQueryService {
    store: Arc<dyn MarketStore>,
}

impl InboxQueryService {
    /// Creates an inbox service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self { store }
    }

    /// Offers addressed to the actor's club, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Infrastructure` on storage failure.
    pub async fn received_offers(&self, actor: &Actor) -> ApplicationResult<Vec<OfferView>> {
        let club = actor.managed_club();
        let negotiations = self.store.find_negotiations_received(&club).await?;
        debug!(club_id = %club, count = negotiations.len(), "loaded received offers");
        self.project(negotiations).await
    }

    /// Offers made by the actor's club, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Infrastructure` on storage failure.
    pub async fn sent_offers(&self, actor: &Actor) -> ApplicationResult<Vec<OfferView>> {
        let club = actor.managed_club();
        let negotiations = self.store.find_negotiations_sent(&club).await?;
        debug!(club_id = %club, count = negotiations.len(), "loaded sent offers");
        self.project(negotiations).await
    }

    /// Both inbox lists.
    ///
    /// # Errors
    ///
    /// Returns `Infrastructure` on storage failure.
    pub async fn inbox(&self, actor: &Actor) -> ApplicationResult<Inbox> {
        let (received_offers, sent_offers) =
            try_join(self.received_offers(actor), self.sent_offers(actor)).await?;
        Ok(Inbox {
            received_offers,
            sent_offers,
        })
    }

    async fn project(&self, negotiations: Vec<Negotiation>) -> ApplicationResult<Vec<OfferView>> {
        let mut player_names: HashMap<PlayerId, Option<String>> = HashMap::new();
        let mut club_names: HashMap<ClubId, Option<String>> = HashMap::new();

        for n in &negotiations {
            if !player_names.contains_key(&n.player_id()) {
                let name = self
                    .store
                    .get_player(&n.player_id())
                    .await?
                    .map(|p| p.name().to_string());
                player_names.insert(n.player_id(), name);
            }
            for club in [n.from_club(), n.to_club()] {
                if !club_names.contains_key(&club) {
                    let name = self
                        .store
                        .get_club(&club)
                        .await?
                        .map(|c| c.name().to_string());
                    club_names.insert(club, name);
                }
            }
        }

        Ok(negotiations
            .into_iter()
            .map(|n| OfferView {
                id: n.id(),
                player_id: n.player_id(),
                player_name: player_names.get(&n.player_id()).cloned().flatten(),
                from_club: n.from_club(),
                from_club_name: club_names.get(&n.from_club()).cloned().flatten(),
                to_club: n.to_club(),
                to_club_name: club_names.get(&n.to_club()).cloned().flatten(),
                offered_price: n.offered_price(),
                status: n.status(),
                created_at: n.created_at(),
                resolved_at: n.resolved_at(),
            })
            .collect())
    }
}
