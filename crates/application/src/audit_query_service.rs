use std::sync::Arc;

use atrium_core::{AppResult, Page, PageRequest};
use atrium_domain::AuditRecord;

use crate::audit_ports::AuditStore;
use crate::paged_query;

/// Read-side service over the append-only audit ledger.
///
/// Both listing shapes are kept: small audit domains read the full set with
/// [`AuditQueryService::list`], high-volume domains page through
/// [`AuditQueryService::list_paged`] and get totals.
#[derive(Clone)]
pub struct AuditQueryService {
    store: Arc<dyn AuditStore>,
}

impl AuditQueryService {
    /// Creates a query service over an audit store implementation.
    #[must_use]
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self { store }
    }

    /// Returns every audit row, newest `modified_at` first.
    ///
    /// The sort is stable, so rows with equal timestamps keep their
    /// insertion order. An empty store yields an empty vector, not an error.
    pub async fn list(&self) -> AppResult<Vec<AuditRecord>> {
        let mut rows = self.store.fetch_rows().await?;
        rows.sort_by(|left, right| right.modified_at().cmp(&left.modified_at()));
        Ok(rows)
    }

    /// Returns one page of audit rows, newest `modified_at` first.
    pub async fn list_paged(&self, request: &PageRequest) -> AppResult<Page<AuditRecord>> {
        let rows = self.store.fetch_rows().await?;
        paged_query::query(rows, |_| true, |row| row.modified_at(), true, request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use atrium_core::{AppError, AppResult, PageRequest};
    use atrium_domain::{AuditAction, AuditRecord};
    use chrono::{Duration, Utc};
    use serde_json::{Map, json};
    use tokio::sync::Mutex;

    use crate::audit_ports::AuditStore;

    use super::AuditQueryService;

    struct FakeAuditStore {
        rows: Mutex<Vec<AuditRecord>>,
    }

    impl FakeAuditStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AuditStore for FakeAuditStore {
        async fn append_row(&self, record: AuditRecord) -> AppResult<AuditRecord> {
            let mut rows = self.rows.lock().await;
            let stored = record.with_log_id(rows.len() as i64 + 1);
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn fetch_rows(&self) -> AppResult<Vec<AuditRecord>> {
            Ok(self.rows.lock().await.clone())
        }
    }

    struct UnavailableAuditStore;

    #[async_trait]
    impl AuditStore for UnavailableAuditStore {
        async fn append_row(&self, _record: AuditRecord) -> AppResult<AuditRecord> {
            Err(AppError::StorageUnavailable("connection refused".to_owned()))
        }

        async fn fetch_rows(&self) -> AppResult<Vec<AuditRecord>> {
            Err(AppError::StorageUnavailable("connection refused".to_owned()))
        }
    }

    fn record(name: &str, days_ago: i64) -> AuditRecord {
        let mut fields = Map::new();
        fields.insert("name".to_owned(), json!(name));

        AuditRecord::new(
            name,
            fields,
            Utc::now() - Duration::days(days_ago),
            AuditAction::Updated,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    async fn seeded_store() -> Arc<FakeAuditStore> {
        let store = Arc::new(FakeAuditStore::new());
        for (name, days_ago) in [("oldest", 2), ("middle", 1), ("newest", 0)] {
            let appended = store.append_row(record(name, days_ago)).await;
            assert!(appended.is_ok());
        }

        store
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let service = AuditQueryService::new(seeded_store().await);

        let rows = service.list().await.unwrap_or_default();
        let names: Vec<&str> = rows.iter().map(|row| row.entity_name().as_str()).collect();
        assert_eq!(names, ["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn equal_timestamps_keep_insertion_order() {
        let store = Arc::new(FakeAuditStore::new());
        let stamp = Utc::now();

        for name in ["first", "second", "third"] {
            let mut fields = Map::new();
            fields.insert("name".to_owned(), json!(name));
            let row = AuditRecord::new(name, fields, stamp, AuditAction::Created)
                .unwrap_or_else(|_| unreachable!());
            assert!(store.append_row(row).await.is_ok());
        }

        let service = AuditQueryService::new(store);
        let rows = service.list().await.unwrap_or_default();
        let names: Vec<&str> = rows.iter().map(|row| row.entity_name().as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn empty_store_lists_as_empty_not_error() {
        let service = AuditQueryService::new(Arc::new(FakeAuditStore::new()));

        let rows = service.list().await;
        assert!(rows.is_ok());
        assert!(rows.unwrap_or_default().is_empty());

        let page_request = PageRequest::new(10, 0).unwrap_or_else(|_| unreachable!());
        let page = service.list_paged(&page_request).await;
        assert!(page.is_ok());

        let page = page.unwrap_or_else(|_| unreachable!());
        assert!(page.items().is_empty());
        assert_eq!(page.total_pages(), 0);
    }

    #[tokio::test]
    async fn paged_listing_keeps_descending_order_across_pages() {
        let service = AuditQueryService::new(seeded_store().await);

        let first_page_request = PageRequest::new(2, 0).unwrap_or_else(|_| unreachable!());
        let first = service.list_paged(&first_page_request).await;
        assert!(first.is_ok());

        let first = first.unwrap_or_else(|_| unreachable!());
        assert_eq!(first.total_count(), 3);
        assert_eq!(first.total_pages(), 2);
        assert_eq!(first.items()[0].entity_name().as_str(), "newest");

        let last_page_request = PageRequest::new(2, 1).unwrap_or_else(|_| unreachable!());
        let last = service.list_paged(&last_page_request).await;
        assert!(last.is_ok());

        let last = last.unwrap_or_else(|_| unreachable!());
        assert_eq!(last.items().len(), 1);
        assert_eq!(last.items()[0].entity_name().as_str(), "oldest");
    }

    #[tokio::test]
    async fn unreachable_store_surfaces_storage_unavailable() {
        let service = AuditQueryService::new(Arc::new(UnavailableAuditStore));

        let result = service.list().await;
        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    }
}
