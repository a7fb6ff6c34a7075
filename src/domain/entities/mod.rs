//! # Domain Entities
//!
//! Aggregate roots and entities representing core business concepts.
//!
//! ## Aggregates
//!
//! - [`Negotiation`]: transfer offer with its lifecycle state machine
//! - [`Player`]: tradable entity owned by exactly one club
//!
//! ## Entities
//!
//! - [`Club`]: market tenant
//! - [`TransferRecord`]: ledger entry for a completed ownership change

pub mod club;
pub mod negotiation;
pub mod player;
pub mod transfer;

pub use club::Club;
pub use negotiation::Negotiation;
pub use player::Player;
pub use transfer::{TransferKind, TransferRecord};
