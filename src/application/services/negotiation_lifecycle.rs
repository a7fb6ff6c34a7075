//! # Negotiation Lifecycle Manager
//!
//! Creates transfer offers and resolves them on behalf of the selling club.
//!
//! # Locking
//!
//! Accepting an offer moves the player, so it follows the player-first
//! locking order shared with direct purchases:
//!
//! ```text
//! read offer (unlocked) → authorise → lock player → lock offer
//!   → re-check pending → accept → move player → cancel rivals → ledger → commit
//! ```
//!
//! The status re-check under lock is what makes the loser of two racing
//! accepts (or an accept racing a purchase) observe `AlreadyResolved`
//! instead of a second ownership change.

use crate::application::error::ApplicationResult;
use crate::application::services::guards::{
    cancel_pending, ensure_addressed_to, found, rejected_under_lock,
};
use crate::domain::entities::{Negotiation, Player, TransferRecord};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Actor, NegotiationId, PlayerId};
use crate::infrastructure::persistence::MarketStore;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Result of an accepted offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptOutcome {
    /// The accepted negotiation.
    pub negotiation: Negotiation,
    /// The player after the move.
    pub player: Player,
    /// Ledger entry for the transfer.
    pub transfer: TransferRecord,
    /// Competing offers closed by the accept.
    pub cancelled: Vec<NegotiationId>,
}

/// Creates, accepts and rejects negotiations.
#[derive(Debug, Clone)]
pub struct NegotiationLifecycleManager {
    store: Arc<dyn MarketStore>,
}

impl NegotiationLifecycleManager {
    /// Creates a lifecycle manager over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self { store }
    }

    /// Sends an offer from the actor's club to the player's current owner.
    ///
    /// Any number of pending offers may exist for the same player.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the player does not exist
    /// - `SelfTrade` if the actor's club owns the player
    /// - `InvalidPrice` if `offered_price` is not positive
    pub async fn create(
        &self,
        actor: &Actor,
        player_id: PlayerId,
        offered_price: Decimal,
    ) -> ApplicationResult<Negotiation> {
        let mut tx = self.store.begin().await?;
        let player = found(tx.lock_player(&player_id).await?, "Player", player_id)?;

        let negotiation = Negotiation::new(
            actor.managed_club(),
            player.current_club(),
            player_id,
            offered_price,
        )?;
        tx.insert_negotiation(&negotiation).await?;
        tx.commit().await?;

        info!(
            negotiation_id = %negotiation.id(),
            player_id = %player_id,
            from_club = %negotiation.from_club(),
            to_club = %negotiation.to_club(),
            price = %negotiation.offered_price(),
            "offer created"
        );
        Ok(negotiation)
    }

    /// Accepts an offer: the player moves to the offering club and every
    /// other pending offer for the player is cancelled.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the negotiation does not exist
    /// - `Forbidden` if the actor's club is not the seller
    /// - `AlreadyResolved` if the negotiation is no longer pending, or the
    ///   seller no longer owns the player
    pub async fn accept(
        &self,
        actor: &Actor,
        negotiation_id: NegotiationId,
    ) -> ApplicationResult<AcceptOutcome> {
        let mut tx = self.store.begin().await?;
        let snapshot = found(
            tx.get_negotiation(&negotiation_id).await?,
            "Negotiation",
            negotiation_id,
        )?;
        ensure_addressed_to(actor, &snapshot)?;

        let player_id = snapshot.player_id();
        let mut player = found(tx.lock_player(&player_id).await?, "Player", player_id)?;
        let mut negotiation = found(
            tx.lock_negotiation(&negotiation_id).await?,
            "Negotiation",
            negotiation_id,
        )?;

        negotiation
            .accept()
            .map_err(|e| rejected_under_lock(negotiation_id, e))?;
        if !player.is_owned_by(&negotiation.to_club()) {
            let mismatch = DomainError::OwnershipMismatch {
                id: negotiation_id,
                expected: negotiation.to_club(),
                actual: player.current_club(),
            };
            return Err(rejected_under_lock(negotiation_id, mismatch));
        }

        let seller = player.transfer_to(negotiation.from_club())?;
        tx.update_negotiation(&negotiation).await?;
        tx.update_player(&player).await?;
        let cancelled = cancel_pending(tx.as_mut(), player_id, Some(negotiation_id)).await?;

        let transfer = TransferRecord::negotiated(&negotiation);
        tx.insert_transfer(&transfer).await?;
        tx.commit().await?;

        info!(
            negotiation_id = %negotiation_id,
            player_id = %player_id,
            seller = %seller,
            buyer = %negotiation.from_club(),
            price = %negotiation.offered_price(),
            cancelled = cancelled.len(),
            "offer accepted"
        );
        Ok(AcceptOutcome {
            negotiation,
            player,
            transfer,
            cancelled,
        })
    }

    /// Rejects an offer. Nothing else changes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the negotiation does not exist
    /// - `Forbidden` if the actor's club is not the seller
    /// - `AlreadyResolved` if the negotiation is no longer pending
    pub async fn reject(
        &self,
        actor: &Actor,
        negotiation_id: NegotiationId,
    ) -> ApplicationResult<Negotiation> {
        let mut tx = self.store.begin().await?;
        let snapshot = found(
            tx.get_negotiation(&negotiation_id).await?,
            "Negotiation",
            negotiation_id,
        )?;
        ensure_addressed_to(actor, &snapshot)?;

        let mut negotiation = found(
            tx.lock_negotiation(&negotiation_id).await?,
            "Negotiation",
            negotiation_id,
        )?;
        negotiation
            .reject()
            .map_err(|e| rejected_under_lock(negotiation_id, e))?;

        tx.update_negotiation(&negotiation).await?;
        tx.commit().await?;

        info!(
            negotiation_id = %negotiation_id,
            player_id = %negotiation.player_id(),
            "offer rejected"
        );
        Ok(negotiation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::error::ErrorKind;
    use crate::domain::entities::TransferKind;
    use crate::domain::value_objects::{ClubId, NegotiationStatus, Price};
    use crate::infrastructure::persistence::InMemoryMarketStore;

    struct Fixture {
        store: Arc<InMemoryMarketStore>,
        manager: NegotiationLifecycleManager,
        seller: Actor,
        player: Player,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(InMemoryMarketStore::new());
        let seller = Actor::new(ClubId::new_v4());
        let player = Player::new(
            "Kai Havertz",
            "ST",
            seller.managed_club(),
            Price::new(Decimal::from(65_000_000)).unwrap(),
        );
        store.save_player(&player).await.unwrap();
        Fixture {
            manager: NegotiationLifecycleManager::new(store.clone()),
            store,
            seller,
            player,
        }
    }

    fn buyer() -> Actor {
        Actor::new(ClubId::new_v4())
    }

    mod create {
        use super::*;

        #[tokio::test]
        async fn offer_targets_current_owner() {
            let f = fixture().await;
            let buyer = buyer();

            let offer = f
                .manager
                .create(&buyer, f.player.id(), Decimal::from(1_000_000))
                .await
                .unwrap();

            assert_eq!(offer.status(), NegotiationStatus::Pending);
            assert_eq!(offer.from_club(), buyer.managed_club());
            assert_eq!(offer.to_club(), f.seller.managed_club());
            assert_eq!(f.store.negotiation_count().await, 1);
        }

        #[tokio::test]
        async fn owner_cannot_bid_for_own_player() {
            let f = fixture().await;
            let err = f
                .manager
                .create(&f.seller, f.player.id(), Decimal::from(10))
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::SelfTrade);
            assert_eq!(f.store.negotiation_count().await, 0);
        }

        #[tokio::test]
        async fn non_positive_price_rejected() {
            let f = fixture().await;
            for price in [Decimal::ZERO, Decimal::from(-5)] {
                let err = f
                    .manager
                    .create(&buyer(), f.player.id(), price)
                    .await
                    .unwrap_err();
                assert_eq!(err.kind(), ErrorKind::InvalidPrice);
            }
            assert_eq!(f.store.negotiation_count().await, 0);
        }

        #[tokio::test]
        async fn unknown_player_is_not_found() {
            let f = fixture().await;
            let err = f
                .manager
                .create(&buyer(), PlayerId::new_v4(), Decimal::ONE)
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }
    }

    mod accept {
        use super::*;

        #[tokio::test]
        async fn accept_moves_player_and_cancels_rivals() {
            let f = fixture().await;
            let winner = buyer();
            let rival = buyer();
            let offer = f
                .manager
                .create(&winner, f.player.id(), Decimal::from(70_000_000))
                .await
                .unwrap();
            let rival_offer = f
                .manager
                .create(&rival, f.player.id(), Decimal::from(68_000_000))
                .await
                .unwrap();

            let outcome = f.manager.accept(&f.seller, offer.id()).await.unwrap();

            assert_eq!(outcome.negotiation.status(), NegotiationStatus::Accepted);
            assert!(outcome.player.is_owned_by(&winner.managed_club()));
            assert!(!outcome.player.is_listed_for_sale());
            assert_eq!(outcome.cancelled, vec![rival_offer.id()]);
            assert_eq!(outcome.transfer.kind(), TransferKind::Negotiated);
            assert_eq!(outcome.transfer.price(), offer.offered_price());

            let rival_stored = f
                .store
                .get_negotiation(&rival_offer.id())
                .await
                .unwrap()
                .unwrap();
            assert_eq!(rival_stored.status(), NegotiationStatus::Cancelled);
        }

        #[tokio::test]
        async fn only_seller_may_accept() {
            let f = fixture().await;
            let buyer = buyer();
            let offer = f
                .manager
                .create(&buyer, f.player.id(), Decimal::ONE)
                .await
                .unwrap();

            for actor in [buyer, Actor::new(ClubId::new_v4())] {
                let err = f.manager.accept(&actor, offer.id()).await.unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Forbidden);
            }
        }

        #[tokio::test]
        async fn accept_after_reject_is_already_resolved() {
            let f = fixture().await;
            let offer = f
                .manager
                .create(&buyer(), f.player.id(), Decimal::ONE)
                .await
                .unwrap();

            f.manager.reject(&f.seller, offer.id()).await.unwrap();
            let err = f.manager.accept(&f.seller, offer.id()).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::AlreadyResolved);

            let player = f.store.get_player(&f.player.id()).await.unwrap().unwrap();
            assert!(player.is_owned_by(&f.seller.managed_club()));
        }

        #[tokio::test]
        async fn cancelled_offer_cannot_be_accepted() {
            let f = fixture().await;
            let first = f
                .manager
                .create(&buyer(), f.player.id(), Decimal::ONE)
                .await
                .unwrap();
            let second = f
                .manager
                .create(&buyer(), f.player.id(), Decimal::TWO)
                .await
                .unwrap();

            f.manager.accept(&f.seller, first.id()).await.unwrap();
            let err = f.manager.accept(&f.seller, second.id()).await.unwrap_err();
            assert!(err.is_already_resolved());
            assert_eq!(f.store.transfer_count().await, 1);
        }

        #[tokio::test]
        async fn stale_owner_is_reported_as_already_resolved() {
            let f = fixture().await;
            let offer = f
                .manager
                .create(&buyer(), f.player.id(), Decimal::ONE)
                .await
                .unwrap();

            // Registry moves the player without going through the market.
            let mut moved = f.player.clone();
            moved.transfer_to(ClubId::new_v4()).unwrap();
            f.store.save_player(&moved).await.unwrap();

            let err = f.manager.accept(&f.seller, offer.id()).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::AlreadyResolved);
            let stored = f.store.get_negotiation(&offer.id()).await.unwrap().unwrap();
            assert!(stored.is_pending());
        }

        #[tokio::test]
        async fn unknown_negotiation_is_not_found() {
            let f = fixture().await;
            let err = f
                .manager
                .accept(&f.seller, NegotiationId::new_v4())
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }
    }

    mod reject {
        use super::*;

        #[tokio::test]
        async fn reject_leaves_player_and_rivals_untouched() {
            let f = fixture().await;
            let offer = f
                .manager
                .create(&buyer(), f.player.id(), Decimal::ONE)
                .await
                .unwrap();
            let rival = f
                .manager
                .create(&buyer(), f.player.id(), Decimal::TWO)
                .await
                .unwrap();

            let rejected = f.manager.reject(&f.seller, offer.id()).await.unwrap();
            assert_eq!(rejected.status(), NegotiationStatus::Rejected);
            assert!(rejected.resolved_at().is_some());

            let rival_stored = f.store.get_negotiation(&rival.id()).await.unwrap().unwrap();
            assert!(rival_stored.is_pending());
            let player = f.store.get_player(&f.player.id()).await.unwrap().unwrap();
            assert_eq!(player, f.player);
        }

        #[tokio::test]
        async fn buyer_cannot_reject() {
            let f = fixture().await;
            let buyer = buyer();
            let offer = f
                .manager
                .create(&buyer, f.player.id(), Decimal::ONE)
                .await
                .unwrap();

            let err = f.manager.reject(&buyer, offer.id()).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Forbidden);
        }

        #[tokio::test]
        async fn second_reject_is_already_resolved() {
            let f = fixture().await;
            let offer = f
                .manager
                .create(&buyer(), f.player.id(), Decimal::ONE)
                .await
                .unwrap();

            f.manager.reject(&f.seller, offer.id()).await.unwrap();
            let err = f.manager.reject(&f.seller, offer.id()).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::AlreadyResolved);
        }
    }
}
