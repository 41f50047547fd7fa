use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};

use atrium_application::AuditStore;
use atrium_core::{AppError, AppResult};
use atrium_domain::{AuditAction, AuditRecord};

/// PostgreSQL-backed append-only audit store.
#[derive(Clone)]
pub struct PostgresAuditStore {
    pool: PgPool,
}

impl PostgresAuditStore {
    /// Creates a store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditRow {
    log_id: i64,
    entity_name: String,
    fields: Value,
    modified_at: DateTime<Utc>,
    action: String,
}

impl AuditRow {
    fn into_record(self) -> AppResult<AuditRecord> {
        let fields = match self.fields {
            Value::Object(map) => map,
            _ => {
                return Err(AppError::StorageUnavailable(format!(
                    "audit row '{}' holds a non-object snapshot",
                    self.log_id
                )));
            }
        };

        let record = AuditRecord::new(
            self.entity_name,
            fields,
            self.modified_at,
            AuditAction::from_str(self.action.as_str())?,
        )?;

        Ok(record.with_log_id(self.log_id))
    }
}

#[async_trait]
impl AuditStore for PostgresAuditStore {
    async fn append_row(&self, record: AuditRecord) -> AppResult<AuditRecord> {
        let log_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO audit_records (entity_name, fields, modified_at, action)
            VALUES ($1, $2, $3, $4)
            RETURNING log_id
            "#,
        )
        .bind(record.entity_name().as_str())
        .bind(Value::Object(record.fields().clone()))
        .bind(record.modified_at())
        .bind(record.action().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            tracing::error!(
                entity_name = record.entity_name().as_str(),
                action = record.action().as_str(),
                "failed to append audit row: {error}"
            );
            AppError::PersistenceFailure(format!("failed to append audit row: {error}"))
        })?;

        Ok(record.with_log_id(log_id))
    }

    async fn fetch_rows(&self) -> AppResult<Vec<AuditRecord>> {
        let rows = sqlx::query_as::<_, AuditRow>(
            r#"
            SELECT log_id, entity_name, fields, modified_at, action
            FROM audit_records
            ORDER BY log_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::StorageUnavailable(format!("failed to fetch audit rows: {error}"))
        })?;

        rows.into_iter().map(AuditRow::into_record).collect()
    }
}
