//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ClubId`], [`PlayerId`], [`NegotiationId`], [`TransferId`]: UUID-based identifiers
//! - [`Actor`]: the club administrator performing an operation
//!
//! ## Numeric Types
//!
//! - [`Price`]: non-negative decimal amount
//!
//! ## Lifecycle
//!
//! - [`NegotiationStatus`]: offer state machine
//! - [`Timestamp`]: UTC point in time

pub mod actor;
pub mod ids;
pub mod negotiation_status;
pub mod price;
pub mod timestamp;

pub use actor::Actor;
pub use ids::{ClubId, NegotiationId, PlayerId, TransferId};
pub use negotiation_status::{InvalidNegotiationStatusError, NegotiationStatus};
pub use price::Price;
pub use timestamp::Timestamp;
