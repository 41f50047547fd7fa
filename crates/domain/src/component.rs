use std::str::FromStr;

use atrium_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Cardinal orientation of a wall-mounted component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Mounted on the north wall.
    North,
    /// Mounted on the south wall.
    South,
    /// Mounted on the east wall.
    East,
    /// Mounted on the west wall.
    West,
}

impl Orientation {
    /// Returns a stable storage value for this orientation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl FromStr for Orientation {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            "east" => Ok(Self::East),
            "west" => Ok(Self::West),
            _ => Err(AppError::Validation(format!(
                "unknown orientation '{value}'"
            ))),
        }
    }
}

/// Validated physical dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    width_cm: f64,
    height_cm: f64,
}

impl Dimensions {
    /// Creates dimensions from positive, finite extents.
    pub fn new(width_cm: f64, height_cm: f64) -> AppResult<Self> {
        if !width_cm.is_finite() || width_cm <= 0.0 {
            return Err(AppError::Validation(format!(
                "width must be a positive finite number, got {width_cm}"
            )));
        }

        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AppError::Validation(format!(
                "height must be a positive finite number, got {height_cm}"
            )));
        }

        Ok(Self {
            width_cm,
            height_cm,
        })
    }

    /// Returns the width in centimeters.
    #[must_use]
    pub fn width_cm(&self) -> f64 {
        self.width_cm
    }

    /// Returns the height in centimeters.
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

/// A projector component embedded in a learning space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projector {
    id: Option<EntityId>,
    name: NonEmptyString,
    orientation: Orientation,
    dimensions: Dimensions,
    projected_content: NonEmptyString,
}

impl Projector {
    /// Creates an unsaved projector with validated fields.
    pub fn new(
        name: impl Into<String>,
        orientation: Orientation,
        dimensions: Dimensions,
        projected_content: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: None,
            name: NonEmptyString::new(name)?,
            orientation,
            dimensions,
            projected_content: NonEmptyString::new(projected_content)?,
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

    /// Returns the wall orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the physical dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the content label currently projected.
    #[must_use]
    pub fn projected_content(&self) -> &NonEmptyString {
        &self.projected_content
    }
}

/// A whiteboard component embedded in a learning space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Whiteboard {
    id: Option<EntityId>,
    name: NonEmptyString,
    orientation: Orientation,
    dimensions: Dimensions,
    marker_color: NonEmptyString,
}

impl Whiteboard {
    /// Creates an unsaved whiteboard with validated fields.
    pub fn new(
        name: impl Into<String>,
        orientation: Orientation,
        dimensions: Dimensions,
        marker_color: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: None,
            name: NonEmptyString::new(name)?,
            orientation,
            dimensions,
            marker_color: NonEmptyString::new(marker_color)?,
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

    /// Returns the wall orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the physical dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the marker color currently stocked.
    #[must_use]
    pub fn marker_color(&self) -> &NonEmptyString {
        &self.marker_color
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Dimensions, Orientation, Projector, Whiteboard};

    #[test]
    fn orientation_roundtrip_storage_value() {
        let orientation = Orientation::East;
        let restored = Orientation::from_str(orientation.as_str());
        assert!(restored.is_ok());
        assert_eq!(restored.unwrap_or(Orientation::North), orientation);
    }

    #[test]
    fn unknown_orientation_is_rejected() {
        assert!(Orientation::from_str("up").is_err());
    }

    #[test]
    fn dimensions_reject_non_positive_extents() {
        assert!(Dimensions::new(0.0, 90.0).is_err());
        assert!(Dimensions::new(120.0, -1.0).is_err());
        assert!(Dimensions::new(f64::NAN, 90.0).is_err());
    }

    #[test]
    fn projector_requires_non_empty_name() {
        let dimensions = Dimensions::new(120.0, 90.0).unwrap_or_else(|_| unreachable!());
        let result = Projector::new("", Orientation::North, dimensions, "slides");
        assert!(result.is_err());
    }

    #[test]
    fn whiteboard_requires_marker_color() {
        let dimensions = Dimensions::new(200.0, 100.0).unwrap_or_else(|_| unreachable!());
        let result = Whiteboard::new("Board 1", Orientation::South, dimensions, "  ");
        assert!(result.is_err());
    }
}
