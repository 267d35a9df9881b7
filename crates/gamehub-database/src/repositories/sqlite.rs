//! SQLite game repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use gamehub_core::error::{AppError, ErrorKind};
use gamehub_core::result::AppResult;
use gamehub_core::traits::Repository;
use gamehub_core::types::pagination::PageRequest;
use gamehub_entity::game::Game;

use super::GameRepository;

/// Repository for game rows backed by SQLite.
///
/// Reads are ordered by title, which is unique and therefore a total
/// order: the same catalog always lists in the same sequence, and page
/// slices concatenate back into the full listing.
#[derive(Debug, Clone)]
pub struct SqliteGameRepository {
    pool: SqlitePool,
}

impl SqliteGameRepository {
    /// Create a new game repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Game, Uuid> for SqliteGameRepository {
    async fn find_all(&self) -> AppResult<Vec<Game>> {
        sqlx::query_as::<_, Game>("SELECT * FROM games ORDER BY title")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list games", e))
    }

    async fn find_paged(&self, page: &PageRequest) -> AppResult<Vec<Game>> {
        // An offset past i64 cannot match any row; a wrapping cast would
        // bind a negative OFFSET, which SQLite reads as page one again.
        let limit = i64::try_from(page.limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        sqlx::query_as::<_, Game>("SELECT * FROM games ORDER BY title LIMIT ?1 OFFSET ?2")
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list games page", e)
            })
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Game>> {
        sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find game by id", e))
    }

    async fn insert(&self, game: &Game) -> AppResult<Game> {
        sqlx::query_as::<_, Game>(
            "INSERT INTO games (id, title, genre, description, price, release_date, stock_quantity) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             RETURNING *",
        )
        .bind(game.id)
        .bind(&game.title)
        .bind(&game.genre)
        .bind(&game.description)
        .bind(game.price)
        .bind(game.release_date)
        .bind(game.stock_quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if is_title_conflict(db_err.as_ref()) => {
                AppError::conflict(format!("Title '{}' already exists", game.title))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert game", e),
        })
    }

    async fn update(&self, game: &Game) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE games SET title = ?2, genre = ?3, description = ?4, price = ?5, \
                              release_date = ?6, stock_quantity = ?7 \
             WHERE id = ?1",
        )
        .bind(game.id)
        .bind(&game.title)
        .bind(&game.genre)
        .bind(&game.description)
        .bind(game.price)
        .bind(game.release_date)
        .bind(game.stock_quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if is_title_conflict(db_err.as_ref()) => {
                AppError::conflict(format!("Title '{}' already exists", game.title))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update game", e),
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete game", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// True when a database error is the unique-title constraint firing.
///
/// SQLite does not expose constraint names, so the violated column set
/// is read from the error message ("UNIQUE constraint failed:
/// games.title"). Any other constraint falls through as a storage error.
fn is_title_conflict(err: &dyn sqlx::error::DatabaseError) -> bool {
    matches!(err.kind(), sqlx::error::ErrorKind::UniqueViolation)
        && err.message().contains("games.title")
}

#[async_trait]
impl GameRepository for SqliteGameRepository {
    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Game>> {
        sqlx::query_as::<_, Game>(
            "SELECT * FROM games WHERE LOWER(genre) = LOWER(?1) ORDER BY title",
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list games by genre", e)
        })
    }

    async fn title_exists(&self, title: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM games WHERE title = ?1 AND (?2 IS NULL OR id <> ?2))",
        )
        .bind(title)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check title", e))
    }
}
