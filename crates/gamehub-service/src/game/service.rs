//! Game catalog use cases: listings, lookups, and write flows.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use gamehub_core::result::AppResult;
use gamehub_core::types::pagination::PageRequest;
use gamehub_database::repositories::GameRepository;
use gamehub_entity::game::{Game, GameDraft};

/// Handles game catalog operations on top of a repository backend.
///
/// The service validates drafts and decides identifiers; uniqueness is
/// left to the repository write itself, so there is no window between a
/// pre-check and the mutation for a concurrent writer to slip through.
#[derive(Clone)]
pub struct GameService {
    /// Game repository.
    repo: Arc<dyn GameRepository>,
}

impl std::fmt::Debug for GameService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameService").finish()
    }
}

impl GameService {
    /// Creates a new game service.
    pub fn new(repo: Arc<dyn GameRepository>) -> Self {
        Self { repo }
    }

    /// Lists one page of the catalog in stable title order.
    pub async fn list_games(&self, page: &PageRequest) -> AppResult<Vec<Game>> {
        self.repo.find_paged(page).await
    }

    /// Gets a single game; `None` when the id is unknown.
    pub async fn get_game(&self, id: Uuid) -> AppResult<Option<Game>> {
        self.repo.find_by_id(&id).await
    }

    /// Lists all games in a genre, matched case-insensitively.
    pub async fn list_by_genre(&self, genre: &str) -> AppResult<Vec<Game>> {
        self.repo.find_by_genre(genre).await
    }

    /// Creates a new game under a freshly assigned id.
    ///
    /// Fails with a validation error for an invalid draft and a conflict
    /// error when the title is already taken; in both cases the catalog
    /// is left unchanged.
    pub async fn create_game(&self, draft: GameDraft) -> AppResult<Game> {
        draft.validate()?;

        let game = Game::from_draft(Uuid::new_v4(), draft);
        let stored = self.repo.insert(&game).await?;

        info!(game_id = %stored.id, title = %stored.title, "Game created");
        Ok(stored)
    }

    /// Replaces the stored fields of an existing game.
    ///
    /// Returns `false` when no game with the id exists; a missing id is
    /// reported before any uniqueness conflict. The id itself never
    /// changes.
    pub async fn update_game(&self, id: Uuid, draft: GameDraft) -> AppResult<bool> {
        draft.validate()?;

        let updated = self.repo.update(&Game::from_draft(id, draft)).await?;
        if updated {
            info!(game_id = %id, "Game updated");
        }
        Ok(updated)
    }

    /// Deletes a game. Returns `false` when no game with the id exists.
    pub async fn delete_game(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.repo.delete(&id).await?;
        if deleted {
            info!(game_id = %id, "Game deleted");
        }
        Ok(deleted)
    }
}
