use async_trait::async_trait;
use atrium_core::AppResult;
use atrium_domain::AuditRecord;

/// Port for the append-only audit ledger.
///
/// The port deliberately exposes no update or delete operation: rows are
/// historical ledger entries, and retention is an external concern.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Appends one row and returns it with its store-assigned monotonic
    /// log identifier. Failures surface as `AppError::PersistenceFailure`.
    async fn append_row(&self, record: AuditRecord) -> AppResult<AuditRecord>;

    /// Fetches all rows in insertion order. Failures surface as
    /// `AppError::StorageUnavailable`.
    async fn fetch_rows(&self) -> AppResult<Vec<AuditRecord>>;
}
