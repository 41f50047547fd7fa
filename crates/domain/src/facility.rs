use atrium_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Validated seating capacity of a learning space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capacity(u32);

impl Capacity {
    /// Creates a capacity of at least one seat.
    pub fn new(seats: u32) -> AppResult<Self> {
        if seats == 0 {
            return Err(AppError::Validation(
                "capacity must be at least one seat".to_owned(),
            ));
        }

        Ok(Self(seats))
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn seats(&self) -> u32 {
        self.0
    }
}

/// A campus building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    id: Option<EntityId>,
    name: NonEmptyString,
    address: NonEmptyString,
}

impl Building {
    /// Creates an unsaved building with validated fields.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            id: None,
            name: NonEmptyString::new(name)?,
            address: NonEmptyString::new(address)?,
        })
    }

    /// Returns a copy carrying the store-assigned identity.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the store-assigned identity, if persisted.
    #[must_use]
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the street address.
    #[must_use]
    pub fn address(&self) -> &NonEmptyString {
        &self.address
    }
}

/// A room used for teaching, located on a building floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSpace {
    id: Option<EntityId>,
    name: NonEmptyString,
    capacity: Capacity,
}

impl LearningSpace {
    /// Creates an unsaved learning space with validated fields.
    pub fn new(name: impl Into<String>, capacity: Capacity) -> AppResult<Self> {
        Ok(Self {
            id: None,
            name: NonEmptyString::new(name)?,
            capacity,
        })
    }

    /// Returns a copy carrying the store-assigned identity.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the store-assigned identity, if persisted.
    #[must_use]
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the seating capacity.
    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::{Building, Capacity, LearningSpace};

    #[test]
    fn capacity_rejects_zero_seats() {
        assert!(Capacity::new(0).is_err());
    }

    #[test]
    fn building_requires_address() {
        assert!(Building::new("Main Hall", "").is_err());
    }

    #[test]
    fn learning_space_starts_without_identity() {
        let capacity = Capacity::new(30).unwrap_or_else(|_| unreachable!());
        let space = LearningSpace::new("Lecture Room 2", capacity);
        assert!(space.is_ok());
        assert!(space.unwrap_or_else(|_| unreachable!()).id().is_none());
    }
}
