//! REST route table.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builds the `/api/v1` router over the given state.
pub fn create_router(state: AppState) -> Router {
    let players = Router::new()
        .route("/mine", get(handlers::my_players))
        .route("/for-sale", get(handlers::players_for_sale))
        .route(
            "/{id}/listing",
            post(handlers::list_for_sale).delete(handlers::unlist),
        )
        .route("/{id}/purchase", post(handlers::purchase))
        .route("/{id}/transfers", get(handlers::transfer_history))
        .route("/{id}/negotiations", post(handlers::create_negotiation));

    let negotiations = Router::new()
        .route("/inbox", get(handlers::inbox))
        .route("/{id}/accept", post(handlers::accept))
        .route("/{id}/reject", post(handlers::reject));

    let api = Router::new()
        .route("/health", get(handlers::health))
        .nest("/players", players)
        .nest("/negotiations", negotiations);

    Router::new()
        .nest("/api/v1", api)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
