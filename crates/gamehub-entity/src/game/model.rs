//! Game entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Game {
    /// Unique game identifier.
    pub id: Uuid,
    /// Game title, unique across the catalog.
    pub title: String,
    /// Genre label used for catalog browsing.
    pub genre: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Retail price.
    pub price: f64,
    /// Original release date.
    pub release_date: DateTime<Utc>,
    /// Units currently in stock.
    pub stock_quantity: i32,
}

impl Game {
    /// Materialize a draft into a full entity under the given identifier.
    ///
    /// Creation passes a freshly generated id; updates pass the id of the
    /// row being replaced, so the identifier never changes across updates.
    pub fn from_draft(id: Uuid, draft: GameDraft) -> Self {
        Self {
            id,
            title: draft.title,
            genre: draft.genre,
            description: draft.description,
            price: draft.price,
            release_date: draft.release_date,
            stock_quantity: draft.stock_quantity,
        }
    }
}

/// Data required to create or replace a game.
///
/// The identifier is never part of a draft: it is assigned by the service
/// on creation and preserved on update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GameDraft {
    /// Game title.
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub title: String,
    /// Genre label.
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub genre: String,
    /// Optional long-form description.
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    /// Retail price.
    #[validate(range(min = 0.01, max = 10000.0, message = "must be between 0.01 and 10000.00"))]
    pub price: f64,
    /// Original release date.
    pub release_date: DateTime<Utc>,
    /// Units in stock.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub stock_quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> GameDraft {
        GameDraft {
            title: "Starfield Drift".to_string(),
            genre: "Racing".to_string(),
            description: Some("Anti-gravity racing across procedurally generated tracks.".to_string()),
            price: 49.99,
            release_date: Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
            stock_quantity: 120,
        }
    }

    #[test]
    fn valid_draft_passes_validation() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut d = draft();
        d.title = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut d = draft();
        d.title = "x".repeat(101);
        assert!(d.validate().is_err());

        d.title = "x".repeat(100);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut d = draft();

        d.price = 0.01;
        assert!(d.validate().is_ok());
        d.price = 10000.0;
        assert!(d.validate().is_ok());

        d.price = 0.0;
        assert!(d.validate().is_err());
        d.price = -1.0;
        assert!(d.validate().is_err());
        d.price = 10000.01;
        assert!(d.validate().is_err());
    }

    #[test]
    fn negative_stock_is_rejected() {
        let mut d = draft();
        d.stock_quantity = -1;
        assert!(d.validate().is_err());

        d.stock_quantity = 0;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn missing_description_is_allowed() {
        let mut d = draft();
        d.description = None;
        assert!(d.validate().is_ok());

        d.description = Some("x".repeat(501));
        assert!(d.validate().is_err());
    }

    #[test]
    fn from_draft_keeps_the_given_id() {
        let id = Uuid::new_v4();
        let game = Game::from_draft(id, draft());
        assert_eq!(game.id, id);
        assert_eq!(game.title, "Starfield Drift");
        assert_eq!(game.stock_quantity, 120);
    }
}
