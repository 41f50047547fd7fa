//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_audit_store;
mod in_memory_inventory_repository;
mod postgres_audit_store;

pub use in_memory_audit_store::InMemoryAuditStore;
pub use in_memory_inventory_repository::InMemoryInventoryRepository;
pub use postgres_audit_store::PostgresAuditStore;
