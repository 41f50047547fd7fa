use async_trait::async_trait;
use atrium_application::AuditStore;
use atrium_core::{AppError, AppResult};
use atrium_domain::AuditRecord;
use tokio::sync::RwLock;

/// In-memory append-only audit store implementation.
///
/// Rows are held in insertion order and never mutated or removed; the log
/// identifier is the one-based position in the ledger.
#[derive(Debug, Default)]
pub struct InMemoryAuditStore {
    rows: RwLock<Vec<AuditRecord>>,
}

impl InMemoryAuditStore {
    /// Creates an empty in-memory audit store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn append_row(&self, record: AuditRecord) -> AppResult<AuditRecord> {
        if record.log_id().is_some() {
            return Err(AppError::Validation(
                "audit rows cannot be re-appended once persisted".to_owned(),
            ));
        }

        let mut rows = self.rows.write().await;
        let stored = record.with_log_id(rows.len() as i64 + 1);
        rows.push(stored.clone());

        Ok(stored)
    }

    async fn fetch_rows(&self) -> AppResult<Vec<AuditRecord>> {
        Ok(self.rows.read().await.clone())
    }
}
