//! # REST API
//!
//! JSON endpoints over the [`TransferMarket`](crate::application::TransferMarket)
//! using axum.
//!
//! The acting club comes from the `x-managed-club` header (a club UUID set by
//! the authentication gateway). Requests without it are rejected with `403`.
//!
//! # Endpoints
//!
//! ## Players
//! - `GET /api/v1/players/mine` - Players owned by the acting club
//! - `GET /api/v1/players/for-sale` - Every listed player
//! - `POST /api/v1/players/{id}/listing` - List for sale
//! - `DELETE /api/v1/players/{id}/listing` - Unlist
//! - `POST /api/v1/players/{id}/purchase` - Buy a listed player
//! - `GET /api/v1/players/{id}/transfers` - Transfer history
//! - `POST /api/v1/players/{id}/negotiations` - Make an offer
//!
//! ## Negotiations
//! - `GET /api/v1/negotiations/inbox` - Received and sent offers
//! - `POST /api/v1/negotiations/{id}/accept` - Accept an offer
//! - `POST /api/v1/negotiations/{id}/reject` - Reject an offer
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Errors
//!
//! Failures return `{"error": "<kind>", "message": "..."}` with `404` for
//! missing records, `403` for authorization failures, `422` for rule
//! violations, `409` for offers that are no longer pending and `500` for
//! storage failures. A malformed ID or body is reported with kind
//! `invalid_request` and the status axum's extractor chose (`400`, `415` or
//! `422`).
//!
//! # Usage
//!
//! ```ignore
//! use transfer_market::api::rest::{create_router, AppState};
//! use transfer_market::application::TransferMarket;
//!
//! let router = create_router(AppState::new(TransferMarket::in_memory()));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult, ErrorResponse, INVALID_REQUEST};
pub use handlers::{
    ApiJson, ApiPath, AppState, CreateNegotiationRequest, CurrentActor, HealthResponse,
    MANAGED_CLUB_HEADER,
};
pub use routes::create_router;
