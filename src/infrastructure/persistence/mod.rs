//! # Persistence Layer
//!
//! Storage ports and their implementations.
//!
//! ## Ports
//!
//! - [`MarketStore`]: committed reads and transaction factory
//! - [`MarketTransaction`]: locked reads and atomic writes
//!
//! ## Implementations
//!
//! - `in_memory`: single-process store for tests and local runs
//! - `postgres`: PostgreSQL store using sqlx

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use in_memory::InMemoryMarketStore;
pub use postgres::PostgresMarketStore;
pub use traits::{MarketStore, MarketTransaction, RepositoryError, RepositoryResult};
