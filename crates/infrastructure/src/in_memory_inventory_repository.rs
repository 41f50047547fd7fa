use std::collections::HashMap;

use async_trait::async_trait;
use atrium_application::InventoryRepository;
use atrium_core::{AppError, AppResult};
use atrium_domain::{EntityId, EntityKind, TrackedEntity};
use tokio::sync::RwLock;

/// In-memory inventory repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    entities: RwLock<HashMap<(EntityKind, i64), TrackedEntity>>,
    next_id: RwLock<i64>,
}

impl InMemoryInventoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
            next_id: RwLock::new(0),
        }
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn fetch_all(&self, kind: Option<EntityKind>) -> AppResult<Vec<TrackedEntity>> {
        let entities = self.entities.read().await;

        let mut listed: Vec<TrackedEntity> = entities
            .iter()
            .filter_map(|((stored_kind, _), entity)| {
                kind.is_none_or(|wanted| wanted == *stored_kind)
                    .then_some(entity.clone())
            })
            .collect();

        // Deterministic enumeration order regardless of map iteration.
        listed.sort_by_key(|entity| {
            (
                entity.kind().as_str(),
                entity.id().map(|id| id.as_i64()).unwrap_or_default(),
            )
        });

        Ok(listed)
    }

    async fn insert(&self, entity: TrackedEntity) -> AppResult<TrackedEntity> {
        if let Some(id) = entity.id() {
            return Err(AppError::Validation(format!(
                "cannot insert {} '{id}': identities are assigned by the store",
                entity.kind().as_str()
            )));
        }

        let mut next_id = self.next_id.write().await;
        *next_id += 1;

        let saved = entity.with_id(EntityId::new(*next_id)?);
        self.entities
            .write()
            .await
            .insert((saved.kind(), *next_id), saved.clone());

        Ok(saved)
    }

    async fn update(&self, entity: TrackedEntity) -> AppResult<TrackedEntity> {
        let Some(id) = entity.id() else {
            return Err(AppError::Validation(format!(
                "cannot update {} without a store-assigned id",
                entity.kind().as_str()
            )));
        };

        let key = (entity.kind(), id.as_i64());
        let mut entities = self.entities.write().await;

        if !entities.contains_key(&key) {
            return Err(AppError::NotFound(format!(
                "{} '{id}' does not exist",
                entity.kind().as_str()
            )));
        }

        entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, kind: EntityKind, id: EntityId) -> AppResult<TrackedEntity> {
        self.entities
            .write()
            .await
            .remove(&(kind, id.as_i64()))
            .ok_or_else(|| AppError::NotFound(format!("{} '{id}' does not exist", kind.as_str())))
    }
}
