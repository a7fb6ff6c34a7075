//! # In-Memory Persistence
//!
//! In-memory implementation of the market store for tests and local runs
//! without a database.
//!
//! - [`InMemoryMarketStore`]: clubs, players, negotiations and transfer records
//!
//! ## Thread Safety
//!
//! The store is an `Arc<RwLock<_>>` and can be cloned freely across tasks.

pub mod market_store;

pub use market_store::InMemoryMarketStore;
