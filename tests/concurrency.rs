//! Races on the same player under a multi-threaded runtime.
//!
//! Each test starts the contenders behind a barrier so they hit the store
//! as close together as the scheduler allows, then checks that exactly one
//! ownership change happened.

#![allow(clippy::unwrap_used)]

mod common;

use common::market;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Barrier;
use transfer_market::application::{ApplicationResult, ErrorKind};
use transfer_market::domain::value_objects::{Actor, ClubId, NegotiationStatus};

const ROUNDS: usize = 25;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn two_accepts_on_same_player_have_one_winner() {
    for _ in 0..ROUNDS {
        let m = market().await;
        let from_a = m
            .market
            .create_negotiation(&m.admin_a(), m.player.id(), Decimal::from(100))
            .await
            .unwrap();
        let from_c = m
            .market
            .create_negotiation(&m.admin_c(), m.player.id(), Decimal::from(200))
            .await
            .unwrap();

        let barrier = Arc::new(Barrier::new(2));
        let seller = m.admin_b();
        let tasks: Vec<_> = [from_a.id(), from_c.id()]
            .into_iter()
            .map(|id| {
                let market = m.market.clone();
                let barrier = Arc::clone(&barrier);
                tokio::spawn(async move {
                    barrier.wait().await;
                    market.accept(&seller, id).await.map(|o| o.negotiation.from_club())
                })
            })
            .collect();

        let results: Vec<ApplicationResult<ClubId>> = futures::future::join_all(tasks)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();

        let winners: Vec<ClubId> = results.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
        assert_eq!(winners.len(), 1, "exactly one accept must succeed");
        let loser = results.iter().find_map(|r| r.as_ref().err()).unwrap();
        assert_eq!(loser.kind(), ErrorKind::AlreadyResolved);

        let player = m.owner_of_player().await;
        assert_eq!(player.current_club(), *winners.first().unwrap());

        let statuses: Vec<NegotiationStatus> = m
            .market
            .received_offers(&m.admin_b())
            .await
            .unwrap()
            .iter()
            .map(|v| v.status)
            .collect();
        assert_eq!(
            statuses.iter().filter(|s| **s == NegotiationStatus::Accepted).count(),
            1
        );
        assert_eq!(
            statuses.iter().filter(|s| **s == NegotiationStatus::Cancelled).count(),
            1
        );
        assert_eq!(m.market.transfer_history(m.player.id()).await.unwrap().len(), 1);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn accept_racing_purchase_moves_player_once() {
    for _ in 0..ROUNDS {
        let m = market().await;
        m.market
            .list_for_sale(&m.admin_b(), m.player.id())
            .await
            .unwrap();
        let offer = m
            .market
            .create_negotiation(&m.admin_a(), m.player.id(), Decimal::from(100))
            .await
            .unwrap();

        let barrier = Arc::new(Barrier::new(2));

        let accept = {
            let market = m.market.clone();
            let barrier = Arc::clone(&barrier);
            let seller = m.admin_b();
            tokio::spawn(async move {
                barrier.wait().await;
                market.accept(&seller, offer.id()).await.map(|_| ())
            })
        };
        let purchase = {
            let market = m.market.clone();
            let barrier = Arc::clone(&barrier);
            let buyer = m.admin_c();
            let player_id = m.player.id();
            tokio::spawn(async move {
                barrier.wait().await;
                market.purchase(&buyer, player_id).await.map(|_| ())
            })
        };

        let accept = accept.await.unwrap();
        let purchase = purchase.await.unwrap();
        let player = m.owner_of_player().await;

        match (&accept, &purchase) {
            (Ok(()), Err(e)) => {
                assert_eq!(e.kind(), ErrorKind::NotForSale);
                assert!(player.is_owned_by(&m.a.id()));
            }
            (Err(e), Ok(())) => {
                assert_eq!(e.kind(), ErrorKind::AlreadyResolved);
                assert!(player.is_owned_by(&m.c.id()));
            }
            other => unreachable!("expected exactly one winner, got {other:?}"),
        }
        assert!(!player.is_listed_for_sale());
        assert_eq!(m.market.transfer_history(m.player.id()).await.unwrap().len(), 1);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_offers_are_all_recorded() {
    let m = market().await;
    let bidders: Vec<Actor> = (0..16).map(|_| Actor::new(ClubId::new_v4())).collect();

    let tasks: Vec<_> = bidders
        .iter()
        .map(|bidder| {
            let market = m.market.clone();
            let bidder = *bidder;
            let player_id = m.player.id();
            tokio::spawn(async move {
                market
                    .create_negotiation(&bidder, player_id, Decimal::from(1_000))
                    .await
            })
        })
        .collect();

    for joined in futures::future::join_all(tasks).await {
        joined.unwrap().unwrap();
    }

    let received = m.market.received_offers(&m.admin_b()).await.unwrap();
    assert_eq!(received.len(), bidders.len());
    assert!(received.iter().all(|v| v.status == NegotiationStatus::Pending));
}
