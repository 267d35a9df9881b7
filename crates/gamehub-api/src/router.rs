//! Route definitions for the GameHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(game_routes()).merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Game catalog CRUD and query endpoints.
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(handlers::game::list_games))
        .route("/games", post(handlers::game::create_game))
        .route("/games/game/{id}", get(handlers::game::get_game))
        .route("/games/genre/{genre}", get(handlers::game::list_by_genre))
        .route("/games/{id}", put(handlers::game::update_game))
        .route("/games/{id}", delete(handlers::game::delete_game))
}

/// Health check endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
