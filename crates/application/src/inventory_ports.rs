use async_trait::async_trait;
use atrium_core::AppResult;
use atrium_domain::{EntityId, EntityKind, TrackedEntity};

/// Repository port for tracked inventory entities.
///
/// Enumeration failures surface as `AppError::StorageUnavailable`; write
/// failures as `AppError::PersistenceFailure`.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Fetches every stored entity, optionally restricted to one kind.
    async fn fetch_all(&self, kind: Option<EntityKind>) -> AppResult<Vec<TrackedEntity>>;

    /// Inserts an unsaved entity and returns it with its assigned identity.
    async fn insert(&self, entity: TrackedEntity) -> AppResult<TrackedEntity>;

    /// Replaces a stored entity and returns the stored state.
    async fn update(&self, entity: TrackedEntity) -> AppResult<TrackedEntity>;

    /// Removes a stored entity and returns the removed snapshot.
    async fn delete(&self, kind: EntityKind, id: EntityId) -> AppResult<TrackedEntity>;
}
