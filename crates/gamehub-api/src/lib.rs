//! # gamehub-api
//!
//! HTTP API layer for GameHub built on Axum.
//!
//! Provides the REST endpoints for the game catalog, request/response
//! DTOs, query extractors, and the mapping from domain errors to HTTP
//! status codes.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
