//! # Transfer Market
//!
//! Multi-club football transfer market: clubs list players for sale, buy
//! listed players outright, and trade offers that settle with an atomic
//! ownership change.
//!
//! # Architecture
//!
//! The crate follows a layered, domain-driven layout:
//!
//! - [`domain`] - Entities (`Player`, `Negotiation`, `TransferRecord`) and the
//!   rules they enforce on themselves
//! - [`application`] - Market services and the [`TransferMarket`](application::TransferMarket)
//!   facade; every multi-record change runs in one store transaction
//! - [`infrastructure`] - In-memory and PostgreSQL stores, settings and logging
//! - [`api`] - axum REST adapter
//!
//! # Invariants
//!
//! - A player is owned by exactly one club at any instant
//! - A negotiation leaves `pending` exactly once
//! - When a player changes owner, every other pending offer for it is
//!   cancelled in the same transaction
//!
//! # Example
//!
//! ```
//! use transfer_market::application::TransferMarket;
//! use transfer_market::domain::entities::{Club, Player};
//! use transfer_market::domain::value_objects::{Actor, Price};
//!
//! # tokio_test::block_on(async {
//! let market = TransferMarket::in_memory();
//! let chelsea = market.register_club(Club::new("Chelsea", "England")).await.unwrap();
//! let arsenal = market.register_club(Club::new("Arsenal", "England")).await.unwrap();
//! let player = market
//!     .register_player(Player::new("Enzo Fernandez", "CM", chelsea.id(), Price::ZERO))
//!     .await
//!     .unwrap();
//!
//! market.list_for_sale(&Actor::new(chelsea.id()), player.id()).await.unwrap();
//! let outcome = market.purchase(&Actor::new(arsenal.id()), player.id()).await.unwrap();
//! assert!(outcome.player.is_owned_by(&arsenal.id()));
//! # });
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
