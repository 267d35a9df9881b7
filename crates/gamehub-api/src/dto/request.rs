//! Request DTOs.
//!
//! Field constraints are checked by the service layer against the draft,
//! so malformed values come back as one validation error regardless of
//! which endpoint carried them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gamehub_entity::game::GameDraft;

/// Create game request body.
///
/// Carries no identifier: the service assigns a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Game title.
    pub title: String,
    /// Genre label.
    pub genre: String,
    /// Optional long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Retail price.
    pub price: f64,
    /// Original release date.
    pub release_date: DateTime<Utc>,
    /// Units in stock.
    #[serde(default)]
    pub stock_quantity: i32,
}

impl CreateGameRequest {
    /// Converts into a draft for the service layer.
    pub fn into_draft(self) -> GameDraft {
        GameDraft {
            title: self.title,
            genre: self.genre,
            description: self.description,
            price: self.price,
            release_date: self.release_date,
            stock_quantity: self.stock_quantity,
        }
    }
}

/// Update game request body.
///
/// The id is carried in the body as well as the path; a mismatch is a
/// client error. The stored id itself never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGameRequest {
    /// Identifier of the game being replaced.
    pub id: Uuid,
    /// Game title.
    pub title: String,
    /// Genre label.
    pub genre: String,
    /// Optional long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Retail price.
    pub price: f64,
    /// Original release date.
    pub release_date: DateTime<Utc>,
    /// Units in stock.
    #[serde(default)]
    pub stock_quantity: i32,
}

impl UpdateGameRequest {
    /// Converts into a draft for the service layer, dropping the id.
    pub fn into_draft(self) -> GameDraft {
        GameDraft {
            title: self.title,
            genre: self.genre,
            description: self.description,
            price: self.price,
            release_date: self.release_date,
            stock_quantity: self.stock_quantity,
        }
    }
}
