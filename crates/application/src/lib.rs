//! Application services and ports for inventory queries and audit trails.

#![forbid(unsafe_code)]

mod audit_ports;
mod audit_query_service;
mod audit_recorder;
mod inventory_ports;
mod inventory_service;
pub mod paged_query;

pub use audit_ports::AuditStore;
pub use audit_query_service::AuditQueryService;
pub use audit_recorder::AuditRecorder;
pub use inventory_ports::InventoryRepository;
pub use inventory_service::InventoryService;
