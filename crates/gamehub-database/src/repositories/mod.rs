//! Repository implementations for catalog storage.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryGameRepository;
pub use sqlite::SqliteGameRepository;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use gamehub_core::config::database::{DatabaseConfig, DatabaseProvider};
use gamehub_core::result::AppResult;
use gamehub_core::traits::Repository;
use gamehub_entity::game::Game;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;

/// Catalog-specific queries on top of the generic CRUD contract.
///
/// Both backends enforce title uniqueness inside the write itself, so a
/// duplicate insert or update fails with a conflict error even under
/// concurrent callers. `title_exists` is a point-in-time query and must
/// not be used as a guard before writing.
#[async_trait]
pub trait GameRepository: Repository<Game, Uuid> {
    /// Fetch all games in a genre, matched case-insensitively, in stable
    /// read order.
    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Game>>;

    /// Check whether a title is already taken (case-sensitive).
    ///
    /// `exclude_id` makes the check usable for updates: the row being
    /// updated does not count as a duplicate of itself.
    async fn title_exists(&self, title: &str, exclude_id: Option<Uuid>) -> AppResult<bool>;
}

/// Build the repository backend selected by the configuration.
///
/// The `sqlite` provider opens the connection pool and applies pending
/// migrations; the `memory` provider starts from an empty catalog.
pub async fn build_game_repository(
    config: &DatabaseConfig,
) -> AppResult<Arc<dyn GameRepository>> {
    match config.provider {
        DatabaseProvider::Sqlite => {
            let pool = DatabasePool::connect(config).await?;
            run_migrations(pool.pool()).await?;
            Ok(Arc::new(SqliteGameRepository::new(pool.into_pool())))
        }
        DatabaseProvider::Memory => {
            info!("Using in-memory catalog storage");
            Ok(Arc::new(MemoryGameRepository::new()))
        }
    }
}
