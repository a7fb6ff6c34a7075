//! # Application Layer
//!
//! Market use cases over the persistence ports.
//!
//! - [`error`]: application error taxonomy
//! - [`services`]: one service per market concern
//! - [`TransferMarket`]: facade over all services

pub mod error;
pub mod market;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, ErrorKind, InfrastructureError};
pub use market::TransferMarket;
