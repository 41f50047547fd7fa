//! Domain entities and invariants for physical-space inventory.

#![forbid(unsafe_code)]

mod audit;
mod component;
mod entity;
mod facility;
pub mod search;
mod user;

pub use audit::{AuditAction, AuditRecord};
pub use component::{Dimensions, Orientation, Projector, Whiteboard};
pub use entity::{EntityId, EntityKind, TrackedEntity};
pub use facility::{Building, Capacity, LearningSpace};
pub use user::{EmailAddress, UserAccount};
