//! # Shared Guards
//!
//! Existence and authorization checks used by every market service, plus
//! the cascade that closes competing offers when a player changes owner.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{Negotiation, Player};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Actor, NegotiationId, PlayerId};
use crate::infrastructure::persistence::MarketTransaction;
use std::fmt;
use tracing::{info, warn};

/// Unwraps a lookup result or reports the record as missing.
pub(crate) fn found<T>(
    record: Option<T>,
    resource_type: &'static str,
    id: impl fmt::Display,
) -> ApplicationResult<T> {
    record.ok_or_else(|| ApplicationError::not_found(resource_type, id))
}

/// Requires the actor's club to own the player.
pub(crate) fn ensure_owner(actor: &Actor, player: &Player) -> ApplicationResult<()> {
    if player.is_owned_by(&actor.managed_club()) {
        return Ok(());
    }
    Err(ApplicationError::forbidden(format!(
        "club {} does not own player {}",
        actor.managed_club(),
        player.id()
    )))
}

/// Requires the actor's club to be the seller addressed by the offer.
pub(crate) fn ensure_addressed_to(actor: &Actor, negotiation: &Negotiation) -> ApplicationResult<()> {
    if negotiation.is_addressed_to(&actor.managed_club()) {
        return Ok(());
    }
    Err(ApplicationError::forbidden(format!(
        "club {} cannot answer negotiation {}",
        actor.managed_club(),
        negotiation.id()
    )))
}

/// Converts a domain error raised under lock, logging it when the caller
/// lost a race for the negotiation.
pub(crate) fn rejected_under_lock(id: NegotiationId, err: DomainError) -> ApplicationError {
    if err.is_already_resolved() {
        warn!(negotiation_id = %id, error = %err, "negotiation resolved by a concurrent operation");
    }
    err.into()
}

/// Cancels every pending negotiation for `player` except `keep`.
///
/// Must run in the same transaction that moved the player, after the player
/// row is locked. Returns the IDs that were cancelled.
pub(crate) async fn cancel_pending(
    tx: &mut dyn MarketTransaction,
    player: PlayerId,
    keep: Option<NegotiationId>,
) -> ApplicationResult<Vec<NegotiationId>> {
    let pending = tx.lock_pending_for_player(&player).await?;
    let mut cancelled = Vec::with_capacity(pending.len());

    for mut negotiation in pending {
        if Some(negotiation.id()) == keep {
            continue;
        }
        negotiation.cancel()?;
        tx.update_negotiation(&negotiation).await?;
        cancelled.push(negotiation.id());
    }

    if !cancelled.is_empty() {
        info!(player_id = %player, count = cancelled.len(), "cancelled competing offers");
    }
    Ok(cancelled)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ClubId, Price};
    use crate::infrastructure::persistence::{InMemoryMarketStore, MarketStore};
    use rust_decimal::Decimal;

    fn player_of(club: ClubId) -> Player {
        Player::new("Declan Rice", "DM", club, Price::new(Decimal::from(100)).unwrap())
    }

    #[test]
    fn owner_passes_and_stranger_is_forbidden() {
        let owner = ClubId::new_v4();
        let player = player_of(owner);
        assert!(ensure_owner(&Actor::new(owner), &player).is_ok());

        let err = ensure_owner(&Actor::new(ClubId::new_v4()), &player).unwrap_err();
        assert!(err.is_forbidden());
    }

    #[test]
    fn only_seller_may_answer() {
        let buyer = ClubId::new_v4();
        let seller = ClubId::new_v4();
        let offer = Negotiation::new(buyer, seller, PlayerId::new_v4(), Decimal::ONE).unwrap();

        assert!(ensure_addressed_to(&Actor::new(seller), &offer).is_ok());
        assert!(ensure_addressed_to(&Actor::new(buyer), &offer).unwrap_err().is_forbidden());
    }

    #[test]
    fn missing_record_is_not_found() {
        let err = found::<Player>(None, "Player", "p-1").unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn cascade_skips_kept_offer() {
        let store = InMemoryMarketStore::new();
        let seller = ClubId::new_v4();
        let player = player_of(seller);
        let kept = Negotiation::new(ClubId::new_v4(), seller, player.id(), Decimal::ONE).unwrap();
        let other = Negotiation::new(ClubId::new_v4(), seller, player.id(), Decimal::TWO).unwrap();

        let mut tx = store.begin().await.unwrap();
        tx.insert_negotiation(&kept).await.unwrap();
        tx.insert_negotiation(&other).await.unwrap();

        let cancelled = cancel_pending(tx.as_mut(), player.id(), Some(kept.id()))
            .await
            .unwrap();
        assert_eq!(cancelled, vec![other.id()]);
        tx.commit().await.unwrap();

        let stored = store.get_negotiation(&kept.id()).await.unwrap().unwrap();
        assert!(stored.is_pending());
    }
}
