//! REST request handlers.
//!
//! Handlers are thin: they extract the acting club and path IDs, call the
//! [`TransferMarket`] and serialise the result.

use crate::api::rest::error::{ApiError, ApiResult};
use crate::application::TransferMarket;
use crate::application::services::{AcceptOutcome, Inbox, PurchaseOutcome};
use crate::domain::entities::{Negotiation, Player, TransferRecord};
use crate::domain::value_objects::{Actor, ClubId, NegotiationId, PlayerId};
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Header carrying the acting club's ID, set by the auth gateway.
pub const MANAGED_CLUB_HEADER: &str = "x-managed-club";

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The market every handler operates on.
    pub market: TransferMarket,
}

impl AppState {
    /// Creates handler state over a market.
    #[must_use]
    pub fn new(market: TransferMarket) -> Self {
        Self { market }
    }
}

/// The club administrator making the request.
///
/// Rejects with `403` when the managed-club header is missing or is not a
/// UUID.
#[derive(Debug, Clone, Copy)]
pub struct CurrentActor(pub Actor);

impl<S: Send + Sync> FromRequestParts<S> for CurrentActor {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claim = parts
            .headers
            .get(MANAGED_CLUB_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<ClubId>().ok());

        Actor::from_claim(claim)
            .map(CurrentActor)
            .ok_or(ApiError::MissingActor)
    }
}

/// Path extractor whose rejection is rendered as an [`ApiError`] body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// JSON body extractor whose rejection is rendered as an [`ApiError`] body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Body of an offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNegotiationRequest {
    /// Proposed fee; a JSON string or number.
    pub offered_price: Decimal,
}

/// `GET /api/v1/health`
#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/v1/players/mine`
pub async fn my_players(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> ApiResult<Json<Vec<Player>>> {
    Ok(Json(state.market.my_players(&actor).await?))
}

/// `GET /api/v1/players/for-sale`
pub async fn players_for_sale(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
) -> ApiResult<Json<Vec<Player>>> {
    Ok(Json(state.market.players_for_sale().await?))
}

/// `POST /api/v1/players/{id}/listing`
pub async fn list_for_sale(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(player_id): ApiPath<PlayerId>,
) -> ApiResult<Json<Player>> {
    Ok(Json(state.market.list_for_sale(&actor, player_id).await?))
}

/// `DELETE /api/v1/players/{id}/listing`
pub async fn unlist(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(player_id): ApiPath<PlayerId>,
) -> ApiResult<Json<Player>> {
    Ok(Json(state.market.unlist(&actor, player_id).await?))
}

/// `POST /api/v1/players/{id}/purchase`
pub async fn purchase(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(player_id): ApiPath<PlayerId>,
) -> ApiResult<Json<PurchaseOutcome>> {
    Ok(Json(state.market.purchase(&actor, player_id).await?))
}

/// `GET /api/v1/players/{id}/transfers`
pub async fn transfer_history(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    ApiPath(player_id): ApiPath<PlayerId>,
) -> ApiResult<Json<Vec<TransferRecord>>> {
    Ok(Json(state.market.transfer_history(player_id).await?))
}

/// `POST /api/v1/players/{id}/negotiations`
pub async fn create_negotiation(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(player_id): ApiPath<PlayerId>,
    ApiJson(request): ApiJson<CreateNegotiationRequest>,
) -> ApiResult<(StatusCode, Json<Negotiation>)> {
    let negotiation = state
        .market
        .create_negotiation(&actor, player_id, request.offered_price)
        .await?;
    Ok((StatusCode::CREATED, Json(negotiation)))
}

/// `POST /api/v1/negotiations/{id}/accept`
pub async fn accept(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(negotiation_id): ApiPath<NegotiationId>,
) -> ApiResult<Json<AcceptOutcome>> {
    Ok(Json(state.market.accept(&actor, negotiation_id).await?))
}

/// `POST /api/v1/negotiations/{id}/reject`
pub async fn reject(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(negotiation_id): ApiPath<NegotiationId>,
) -> ApiResult<Json<Negotiation>> {
    Ok(Json(state.market.reject(&actor, negotiation_id).await?))
}

/// `GET /api/v1/negotiations/inbox`
pub async fn inbox(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> ApiResult<Json<Inbox>> {
    Ok(Json(state.market.inbox(&actor).await?))
}
