//! Location and space reference types

use uuid::Uuid;

/// A live handle to a named coordinate space
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpaceRef {
    /// 128-bit space identifier
    pub id: Uuid,

    /// Human-readable space name
    pub name: String,
}

impl SpaceRef {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A point in an optional space
///
/// `Location::default()` is the origin with no space, which is also what the
/// location codec returns for truncated payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub space: Option<SpaceRef>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    /// Create a location inside a space
    pub fn new(space: SpaceRef, x: f64, y: f64, z: f64) -> Self {
        Self {
            space: Some(space),
            x,
            y,
            z,
        }
    }

    /// Create a location that references no space
    pub fn detached(x: f64, y: f64, z: f64) -> Self {
        Self {
            space: None,
            x,
            y,
            z,
        }
    }

    /// Identifier of the referenced space, if any
    pub fn space_id(&self) -> Option<Uuid> {
        self.space.as_ref().map(|space| space.id)
    }
}
