//! Space registries
//!
//! `InMemorySpaceRegistry` keeps loaded spaces in a map guarded by a
//! `parking_lot::RwLock` so decoders on many threads can resolve concurrently
//! while the host loads and unloads spaces.

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use super::{SpaceRef, SpaceRegistry};

/// Registry backed by an in-memory map of loaded spaces
#[derive(Debug, Default)]
pub struct InMemorySpaceRegistry {
    spaces: RwLock<HashMap<Uuid, SpaceRef>>,
}

impl InMemorySpaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a space as loaded, replacing any space with the same id
    pub fn load(&self, space: SpaceRef) -> Option<SpaceRef> {
        self.spaces.write().insert(space.id, space)
    }

    /// Mark a space as unloaded
    pub fn unload(&self, id: Uuid) -> Option<SpaceRef> {
        self.spaces.write().remove(&id)
    }

    /// Number of loaded spaces
    pub fn len(&self) -> usize {
        self.spaces.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.read().is_empty()
    }
}

impl SpaceRegistry for InMemorySpaceRegistry {
    fn resolve(&self, id: Uuid) -> Option<SpaceRef> {
        self.spaces.read().get(&id).cloned()
    }
}

/// Registry with no loaded spaces; every lookup fails
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpaces;

impl SpaceRegistry for NoSpaces {
    fn resolve(&self, _id: Uuid) -> Option<SpaceRef> {
        None
    }
}
