use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value, json};

use atrium_core::AppResult;
use atrium_domain::{AuditAction, AuditRecord, TrackedEntity};

use crate::audit_ports::AuditStore;

/// Records immutable snapshots of tracked entities after each mutation.
#[derive(Clone)]
pub struct AuditRecorder {
    store: Arc<dyn AuditStore>,
}

impl AuditRecorder {
    /// Creates a recorder over an audit store implementation.
    #[must_use]
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self { store }
    }

    /// Flattens a post-mutation snapshot into one audit row and appends it.
    ///
    /// `modified_at` is stamped at recording time, not the mutation's start,
    /// so it reflects when the durable record was committed. An append
    /// failure propagates: the caller's operation fails rather than
    /// tolerating a silent audit gap.
    pub async fn record(
        &self,
        entity: &TrackedEntity,
        action: AuditAction,
    ) -> AppResult<AuditRecord> {
        let record = AuditRecord::new(
            entity.name().as_str(),
            Self::flatten(entity),
            Utc::now(),
            action,
        )?;

        self.store.append_row(record).await
    }

    /// Flattens nested value objects into the schema-stable primitive map.
    fn flatten(entity: &TrackedEntity) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("entity_type".to_owned(), json!(entity.kind().as_str()));
        fields.insert("name".to_owned(), json!(entity.name().as_str()));

        if let Some(id) = entity.id() {
            fields.insert("id".to_owned(), json!(id.as_i64()));
        }

        if let Some(orientation) = entity.orientation() {
            fields.insert("orientation".to_owned(), json!(orientation.as_str()));
        }

        match entity {
            TrackedEntity::Projector(projector) => {
                fields.insert("width_cm".to_owned(), json!(projector.dimensions().width_cm()));
                fields.insert(
                    "height_cm".to_owned(),
                    json!(projector.dimensions().height_cm()),
                );
                fields.insert(
                    "projected_content".to_owned(),
                    json!(projector.projected_content().as_str()),
                );
            }
            TrackedEntity::Whiteboard(whiteboard) => {
                fields.insert(
                    "width_cm".to_owned(),
                    json!(whiteboard.dimensions().width_cm()),
                );
                fields.insert(
                    "height_cm".to_owned(),
                    json!(whiteboard.dimensions().height_cm()),
                );
                fields.insert(
                    "marker_color".to_owned(),
                    json!(whiteboard.marker_color().as_str()),
                );
            }
            TrackedEntity::Building(building) => {
                fields.insert("address".to_owned(), json!(building.address().as_str()));
            }
            TrackedEntity::LearningSpace(space) => {
                fields.insert("capacity".to_owned(), json!(space.capacity().seats()));
            }
            TrackedEntity::User(user) => {
                fields.insert("email".to_owned(), json!(user.email().as_str()));
            }
        }

        fields
    }
}
