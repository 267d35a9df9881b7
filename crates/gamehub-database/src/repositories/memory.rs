//! In-memory game repository.
//!
//! Backs the `memory` database provider and most service-level tests.
//! Observable behavior matches the SQLite implementation: title-ordered
//! reads, case-sensitive title uniqueness, and ASCII case folding for
//! genre matches (SQLite's `LOWER()` folds ASCII only).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use gamehub_core::error::AppError;
use gamehub_core::result::AppResult;
use gamehub_core::traits::Repository;
use gamehub_core::types::pagination::PageRequest;
use gamehub_entity::game::Game;

use super::GameRepository;

/// Repository keeping the whole catalog in a process-local map.
///
/// Uniqueness checks and the mutation they guard happen under a single
/// write lock, so concurrent writers cannot both pass the check.
#[derive(Debug, Default)]
pub struct MemoryGameRepository {
    games: RwLock<HashMap<Uuid, Game>>,
}

impl MemoryGameRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_title(mut games: Vec<Game>) -> Vec<Game> {
    games.sort_by(|a, b| a.title.cmp(&b.title));
    games
}

#[async_trait]
impl Repository<Game, Uuid> for MemoryGameRepository {
    async fn find_all(&self) -> AppResult<Vec<Game>> {
        let games = self.games.read().await;
        Ok(sorted_by_title(games.values().cloned().collect()))
    }

    async fn find_paged(&self, page: &PageRequest) -> AppResult<Vec<Game>> {
        let all = self.find_all().await?;
        Ok(all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Game>> {
        let games = self.games.read().await;
        Ok(games.get(id).cloned())
    }

    async fn insert(&self, game: &Game) -> AppResult<Game> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.id) {
            return Err(AppError::conflict(format!("Game {} already exists", game.id)));
        }
        if games.values().any(|g| g.title == game.title) {
            return Err(AppError::conflict(format!(
                "Title '{}' already exists",
                game.title
            )));
        }
        games.insert(game.id, game.clone());
        Ok(game.clone())
    }

    async fn update(&self, game: &Game) -> AppResult<bool> {
        let mut games = self.games.write().await;
        if !games.contains_key(&game.id) {
            return Ok(false);
        }
        if games
            .values()
            .any(|g| g.id != game.id && g.title == game.title)
        {
            return Err(AppError::conflict(format!(
                "Title '{}' already exists",
                game.title
            )));
        }
        games.insert(game.id, game.clone());
        Ok(true)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let mut games = self.games.write().await;
        Ok(games.remove(id).is_some())
    }
}

#[async_trait]
impl GameRepository for MemoryGameRepository {
    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Game>> {
        let games = self.games.read().await;
        let matched = games
            .values()
            .filter(|g| g.genre.eq_ignore_ascii_case(genre))
            .cloned()
            .collect();
        Ok(sorted_by_title(matched))
    }

    async fn title_exists(&self, title: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let games = self.games.read().await;
        Ok(games
            .values()
            .any(|g| g.title == title && Some(g.id) != exclude_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gamehub_core::error::ErrorKind;

    fn game(title: &str, genre: &str) -> Game {
        Game {
            id: Uuid::new_v4(),
            title: title.to_string(),
            genre: genre.to_string(),
            description: Some("test entry".to_string()),
            price: 19.99,
            release_date: Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap(),
            stock_quantity: 5,
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_titles() {
        let repo = MemoryGameRepository::new();
        repo.insert(&game("Nova", "Shooter")).await.unwrap();

        let err = repo.insert(&game("Nova", "Puzzle")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        // Case differs, so this is a distinct title.
        repo.insert(&game("nova", "Puzzle")).await.unwrap();
    }

    #[tokio::test]
    async fn update_rejects_stealing_another_title() {
        let repo = MemoryGameRepository::new();
        repo.insert(&game("First", "RPG")).await.unwrap();
        let mut second = game("Second", "RPG");
        repo.insert(&second).await.unwrap();

        second.title = "First".to_string();
        let err = repo.update(&second).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        // Re-saving under its own title is not a conflict.
        second.title = "Second".to_string();
        assert!(repo.update(&second).await.unwrap());
    }

    #[tokio::test]
    async fn update_missing_row_reports_false() {
        let repo = MemoryGameRepository::new();
        assert!(!repo.update(&game("Ghost", "Horror")).await.unwrap());
    }

    #[tokio::test]
    async fn reads_are_title_ordered() {
        let repo = MemoryGameRepository::new();
        repo.insert(&game("Citadel", "Strategy")).await.unwrap();
        repo.insert(&game("Aurora", "Strategy")).await.unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, ["Aurora", "Citadel"]);

        let page = repo.find_paged(&PageRequest::new(2, 1)).await.unwrap();
        assert_eq!(page[0].title, "Citadel");
    }

    #[tokio::test]
    async fn pages_far_past_the_catalog_are_empty() {
        let repo = MemoryGameRepository::new();
        repo.insert(&game("Celeste", "Platformer")).await.unwrap();

        let far = repo
            .find_paged(&PageRequest::new(u64::MAX, 100))
            .await
            .unwrap();
        assert!(far.is_empty());
    }

    #[tokio::test]
    async fn genre_filter_ignores_case() {
        let repo = MemoryGameRepository::new();
        repo.insert(&game("Apex Drift", "racing")).await.unwrap();
        repo.insert(&game("Gravel Kings", "Racing")).await.unwrap();
        repo.insert(&game("Siegecraft", "Strategy")).await.unwrap();

        let racing = repo.find_by_genre("RACING").await.unwrap();
        assert_eq!(racing.len(), 2);
        assert_eq!(racing[0].title, "Apex Drift");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_matched() {
        let repo = MemoryGameRepository::new();
        let game = game("Tidewater", "Adventure");
        repo.insert(&game).await.unwrap();

        assert!(repo.delete(&game.id).await.unwrap());
        assert!(!repo.delete(&game.id).await.unwrap());
    }

    #[tokio::test]
    async fn title_exists_can_exclude_one_game() {
        let repo = MemoryGameRepository::new();
        let game = game("Riverline", "Simulation");
        repo.insert(&game).await.unwrap();

        assert!(repo.title_exists("Riverline", None).await.unwrap());
        assert!(!repo.title_exists("Riverline", Some(game.id)).await.unwrap());
    }
}
