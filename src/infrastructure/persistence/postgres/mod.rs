//! # PostgreSQL Persistence
//!
//! sqlx-backed implementation of the market store.

pub mod market_store;

pub use market_store::PostgresMarketStore;
