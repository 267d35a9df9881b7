//! Response DTOs.
//!
//! Catalog endpoints serialize the [`gamehub_entity::game::Game`] entity
//! directly; only responses without a domain entity get a DTO here.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, `"ok"` when reachable.
    pub status: String,
    /// Server version.
    pub version: String,
}
