//! Space Module
//!
//! Spatial coordinates and the named spaces they live in.
//!
//! ## Responsibilities
//! - `Location`: three `f64` axes plus an optional space reference
//! - `SpaceRef`: a live handle to a named space, identified by a UUID
//! - `SpaceRegistry`: resolves identifiers to live spaces for decoders
//!
//! Resolution is fallible: a stored identifier may name a space that is not
//! loaded any more, in which case the decoded location carries no space.

mod location;
mod registry;

pub use location::{Location, SpaceRef};
pub use registry::{InMemorySpaceRegistry, NoSpaces};

use uuid::Uuid;

/// Resolves space identifiers to live space references
pub trait SpaceRegistry: Send + Sync {
    /// Look up a loaded space by identifier
    fn resolve(&self, id: Uuid) -> Option<SpaceRef>;
}
