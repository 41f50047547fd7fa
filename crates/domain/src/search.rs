//! Free-text matching across the closed entity variant set.
//!
//! Matching is case-insensitive substring containment, not tokenized or
//! fuzzy search. A token that equals a variant's type tag (for example
//! "PROJ" or "WB", in any casing) selects by tag alone, so a whiteboard
//! whose name happens to contain "proj" is not pulled into a projector
//! search. Equality, not containment: "b" searches names and fields, it
//! does not trip tag mode for "WB" or "BLDG".

use crate::entity::{EntityKind, TrackedEntity};

/// Returns whether an entity matches a free-text search token.
///
/// An empty or whitespace-only token matches every entity.
#[must_use]
pub fn matches(entity: &TrackedEntity, token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return true;
    }

    let token = token.to_lowercase();

    // Tag matching takes precedence over field content: once the token names
    // a variant, only that variant is selected.
    if EntityKind::all()
        .iter()
        .any(|kind| kind.tag().eq_ignore_ascii_case(&token))
    {
        return entity.kind().tag().eq_ignore_ascii_case(&token);
    }

    if contains(entity.name().as_str(), &token) {
        return true;
    }

    if let Some(orientation) = entity.orientation()
        && contains(orientation.as_str(), &token)
    {
        return true;
    }

    match entity {
        TrackedEntity::Projector(projector) => {
            contains(projector.projected_content().as_str(), &token)
        }
        TrackedEntity::Whiteboard(whiteboard) => {
            contains(whiteboard.marker_color().as_str(), &token)
        }
        TrackedEntity::Building(building) => contains(building.address().as_str(), &token),
        TrackedEntity::LearningSpace(space) => {
            contains(&space.capacity().seats().to_string(), &token)
        }
        TrackedEntity::User(user) => contains(user.email().as_str(), &token),
    }
}

fn contains(haystack: &str, lowered_token: &str) -> bool {
    haystack.to_lowercase().contains(lowered_token)
}
