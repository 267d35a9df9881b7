//! Application state shared across all handlers.

use std::sync::Arc;

use gamehub_core::config::AppConfig;
use gamehub_service::GameService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Game catalog service
    pub game_service: Arc<GameService>,
}
