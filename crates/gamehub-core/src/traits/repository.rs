//! Generic repository trait for catalog storage.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::PageRequest;

/// Generic CRUD repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific
/// query methods live on specialized sub-traits.
///
/// Lookups signal absence through `Option` and mutations report their
/// outcome through return values; `Err` is reserved for storage
/// failures and constraint violations.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Fetch every entity in stable read order.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Fetch one page of entities in stable read order.
    ///
    /// A page beyond the end of the collection yields an empty vector.
    async fn find_paged(&self, page: &PageRequest) -> AppResult<Vec<Entity>>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Persist a new entity and return the stored row.
    async fn insert(&self, entity: &Entity) -> AppResult<Entity>;

    /// Overwrite an existing entity. Returns `false` when no row matched.
    async fn update(&self, entity: &Entity) -> AppResult<bool>;

    /// Delete an entity by its primary key. Returns `false` when no row matched.
    async fn delete(&self, id: &Id) -> AppResult<bool>;
}
