//! # Application Services
//!
//! Use cases of the transfer market, one service per concern:
//!
//! - [`ListingManager`]: list and unlist players
//! - [`DirectPurchaseHandler`]: buy a listed player outright
//! - [`NegotiationLifecycleManager`]: create, accept and reject offers
//! - [`InboxQueryService`]: incoming and outgoing offer projections
//! - [`SquadQueryService`]: squad, market and transfer history reads

pub mod direct_purchase;
mod guards;
pub mod inbox;
pub mod listing;
pub mod negotiation_lifecycle;
pub mod squad;

pub use direct_purchase::{DirectPurchaseHandler, PurchaseOutcome};
pub use inbox::{Inbox, InboxQueryService, OfferView};
pub use listing::ListingManager;
pub use negotiation_lifecycle::{AcceptOutcome, NegotiationLifecycleManager};
pub use squad::SquadQueryService;
