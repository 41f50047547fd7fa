use std::str::FromStr;

use atrium_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::component::{Orientation, Projector, Whiteboard};
use crate::facility::{Building, LearningSpace};
use crate::user::UserAccount;

/// Store-assigned positive integer identity of a tracked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(i64);

impl EntityId {
    /// Creates an identity from a positive integer.
    pub fn new(value: i64) -> AppResult<Self> {
        if value <= 0 {
            return Err(AppError::Validation(format!(
                "entity id must be positive, got {value}"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Discriminator for the closed set of tracked entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Projector component.
    Projector,
    /// Whiteboard component.
    Whiteboard,
    /// Campus building.
    Building,
    /// Teaching room.
    LearningSpace,
    /// Administrative user.
    User,
}

impl EntityKind {
    /// Returns a stable storage value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projector => "projector",
            Self::Whiteboard => "whiteboard",
            Self::Building => "building",
            Self::LearningSpace => "learning_space",
            Self::User => "user",
        }
    }

    /// Returns the short type tag users search by.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Projector => "PROJ",
            Self::Whiteboard => "WB",
            Self::Building => "BLDG",
            Self::LearningSpace => "ROOM",
            Self::User => "USER",
        }
    }

    /// Returns all known kinds.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[EntityKind] = &[
            EntityKind::Projector,
            EntityKind::Whiteboard,
            EntityKind::Building,
            EntityKind::LearningSpace,
            EntityKind::User,
        ];

        ALL
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "projector" => Ok(Self::Projector),
            "whiteboard" => Ok(Self::Whiteboard),
            "building" => Ok(Self::Building),
            "learning_space" => Ok(Self::LearningSpace),
            "user" => Ok(Self::User),
            _ => Err(AppError::Validation(format!(
                "unknown entity kind '{value}'"
            ))),
        }
    }
}

/// One entity from the closed variant set tracked by the inventory.
///
/// Dispatch is by exhaustive `match`; adding a variant is a compile-checked,
/// localized change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity_type", rename_all = "snake_case")]
pub enum TrackedEntity {
    /// Projector component.
    Projector(Projector),
    /// Whiteboard component.
    Whiteboard(Whiteboard),
    /// Campus building.
    Building(Building),
    /// Teaching room.
    LearningSpace(LearningSpace),
    /// Administrative user.
    User(UserAccount),
}

impl TrackedEntity {
    /// Returns the variant discriminator.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Projector(_) => EntityKind::Projector,
            Self::Whiteboard(_) => EntityKind::Whiteboard,
            Self::Building(_) => EntityKind::Building,
            Self::LearningSpace(_) => EntityKind::LearningSpace,
            Self::User(_) => EntityKind::User,
        }
    }

    /// Returns the store-assigned identity, if persisted.
    #[must_use]
    pub fn id(&self) -> Option<EntityId> {
        match self {
            Self::Projector(projector) => projector.id(),
            Self::Whiteboard(whiteboard) => whiteboard.id(),
            Self::Building(building) => building.id(),
            Self::LearningSpace(space) => space.id(),
            Self::User(user) => user.id(),
        }
    }

    /// Returns the display name shared by every variant.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        match self {
            Self::Projector(projector) => projector.name(),
            Self::Whiteboard(whiteboard) => whiteboard.name(),
            Self::Building(building) => building.name(),
            Self::LearningSpace(space) => space.name(),
            Self::User(user) => user.name(),
        }
    }

    /// Returns the wall orientation for variants that have one.
    #[must_use]
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            Self::Projector(projector) => Some(projector.orientation()),
            Self::Whiteboard(whiteboard) => Some(whiteboard.orientation()),
            Self::Building(_) | Self::LearningSpace(_) | Self::User(_) => None,
        }
    }

    /// Returns a copy carrying the store-assigned identity.
    #[must_use]
    pub fn with_id(self, id: EntityId) -> Self {
        match self {
            Self::Projector(projector) => Self::Projector(projector.with_id(id)),
            Self::Whiteboard(whiteboard) => Self::Whiteboard(whiteboard.with_id(id)),
            Self::Building(building) => Self::Building(building.with_id(id)),
            Self::LearningSpace(space) => Self::LearningSpace(space.with_id(id)),
            Self::User(user) => Self::User(user.with_id(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{EntityId, EntityKind, TrackedEntity};
    use crate::facility::Building;

    #[test]
    fn entity_id_rejects_non_positive_values() {
        assert!(EntityId::new(0).is_err());
        assert!(EntityId::new(-3).is_err());
    }

    #[test]
    fn entity_kind_roundtrip_storage_value() {
        for kind in EntityKind::all() {
            let restored = EntityKind::from_str(kind.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(EntityKind::User), *kind);
        }
    }

    #[test]
    fn with_id_assigns_identity_to_the_wrapped_variant() {
        let building =
            Building::new("Main Hall", "1 Campus Way").unwrap_or_else(|_| unreachable!());
        let entity = TrackedEntity::Building(building);
        assert!(entity.id().is_none());

        let id = EntityId::new(7).unwrap_or_else(|_| unreachable!());
        let saved = entity.with_id(id);
        assert_eq!(saved.id(), Some(id));
        assert_eq!(saved.kind(), EntityKind::Building);
    }
}
