use std::sync::Arc;

use atrium_core::{AppError, AppResult, Page, PageRequest};
use atrium_domain::{AuditAction, EntityId, EntityKind, TrackedEntity, search};

use crate::audit_recorder::AuditRecorder;
use crate::inventory_ports::InventoryRepository;
use crate::paged_query;

/// Application service wiring inventory mutations to the audit trail.
///
/// Every mutation appends exactly one audit row as part of the operation: if
/// the append fails the operation fails, even when the primary write
/// succeeded. Keeping both writes in one transaction is the store adapter's
/// concern.
#[derive(Clone)]
pub struct InventoryService {
    repository: Arc<dyn InventoryRepository>,
    audit_recorder: AuditRecorder,
}

impl InventoryService {
    /// Creates an inventory service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn InventoryRepository>, audit_recorder: AuditRecorder) -> Self {
        Self {
            repository,
            audit_recorder,
        }
    }

    /// Inserts an unsaved entity and records a `Created` snapshot.
    pub async fn create(&self, entity: TrackedEntity) -> AppResult<TrackedEntity> {
        if let Some(id) = entity.id() {
            return Err(AppError::Validation(format!(
                "entity already carries id '{id}'; identities are store-assigned"
            )));
        }

        let saved = self.repository.insert(entity).await?;
        self.audit_recorder
            .record(&saved, AuditAction::Created)
            .await?;

        Ok(saved)
    }

    /// Replaces a stored entity and records an `Updated` snapshot.
    pub async fn update(&self, entity: TrackedEntity) -> AppResult<TrackedEntity> {
        if entity.id().is_none() {
            return Err(AppError::Validation(
                "entity must carry a store-assigned id to be updated".to_owned(),
            ));
        }

        let saved = self.repository.update(entity).await?;
        self.audit_recorder
            .record(&saved, AuditAction::Updated)
            .await?;

        Ok(saved)
    }

    /// Removes a stored entity and records a `Deleted` snapshot of the
    /// removed state.
    pub async fn delete(&self, kind: EntityKind, id: EntityId) -> AppResult<()> {
        let removed = self.repository.delete(kind, id).await?;
        self.audit_recorder
            .record(&removed, AuditAction::Deleted)
            .await?;

        Ok(())
    }

    /// Lists one page of entities matching a free-text token, ordered by
    /// name ascending.
    ///
    /// A missing or empty token lists everything; `kind` optionally narrows
    /// the fetch to one variant before the predicate runs.
    pub async fn search(
        &self,
        token: Option<&str>,
        kind: Option<EntityKind>,
        request: &PageRequest,
    ) -> AppResult<Page<TrackedEntity>> {
        let entities = self.repository.fetch_all(kind).await?;
        let token = token.unwrap_or_default();

        paged_query::query(
            entities,
            |entity| search::matches(entity, token),
            |entity| entity.name().as_str().to_lowercase(),
            false,
            request,
        )
    }
}
