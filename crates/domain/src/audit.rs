use std::str::FromStr;

use atrium_core::{AppError, AppResult, NonEmptyString};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tracked mutation kinds recorded in the audit ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when a tracked entity is created.
    Created,
    /// Emitted when a tracked entity is updated.
    Updated,
    /// Emitted when a tracked entity is deleted.
    Deleted,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            "deleted" => Ok(Self::Deleted),
            _ => Err(AppError::Validation(format!(
                "unknown audit action '{value}'"
            ))),
        }
    }
}

/// Immutable denormalized snapshot of an entity at the moment of a mutation.
///
/// A record is a historical ledger entry: it holds the entity's name as plain
/// text rather than a foreign key, so it survives the entity's deletion.
/// Once written it is never updated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    log_id: Option<i64>,
    entity_name: NonEmptyString,
    fields: Map<String, Value>,
    modified_at: DateTime<Utc>,
    action: AuditAction,
}

impl AuditRecord {
    /// Creates an unsaved audit record with a validated flattened snapshot.
    ///
    /// The field map must be non-empty and hold primitive values only
    /// (strings, numbers, booleans); nested objects and arrays defeat the
    /// schema-stable flattened shape and are rejected.
    pub fn new(
        entity_name: impl Into<String>,
        fields: Map<String, Value>,
        modified_at: DateTime<Utc>,
        action: AuditAction,
    ) -> AppResult<Self> {
        if fields.is_empty() {
            return Err(AppError::Validation(
                "audit snapshot must hold at least one field".to_owned(),
            ));
        }

        for (field_name, value) in &fields {
            if !(value.is_string() || value.is_number() || value.is_boolean()) {
                return Err(AppError::Validation(format!(
                    "audit snapshot field '{field_name}' must be a primitive value"
                )));
            }
        }

        Ok(Self {
            log_id: None,
            entity_name: NonEmptyString::new(entity_name)?,
            fields,
            modified_at,
            action,
        })
    }

    /// Returns a copy carrying the store-assigned monotonic log identifier.
    #[must_use]
    pub fn with_log_id(mut self, log_id: i64) -> Self {
        self.log_id = Some(log_id);
        self
    }

    /// Returns the store-assigned log identifier, if persisted.
    #[must_use]
    pub fn log_id(&self) -> Option<i64> {
        self.log_id
    }

    /// Returns the denormalized entity name.
    #[must_use]
    pub fn entity_name(&self) -> &NonEmptyString {
        &self.entity_name
    }

    /// Returns the flattened field snapshot.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns the UTC instant the record was committed.
    #[must_use]
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Returns the recorded action.
    #[must_use]
    pub fn action(&self) -> AuditAction {
        self.action
    }
}
