//! Codec Module
//!
//! Typed codecs between complex values and primitive slot payloads.
//!
//! ## Codecs
//! | Codec             | Primitive    | Complex       | Document key |
//! |-------------------|--------------|---------------|--------------|
//! | `ITEM_STACK`      | bytes        | `Item`        | `i`          |
//! | `ITEM_STACK_LIST` | bytes        | `Vec<Item>`   | `items`      |
//! | `LOCATION`        | longs (5)    | `Location`    | -            |
//! | `STRING_LIST`     | bytes        | `Vec<String>` | `l`          |
//!
//! ## Byte Payloads
//! Byte codecs emit a UTF-8 YAML document with one reserved top-level key:
//! ```text
//! items:
//! - type: DIRT
//!   amount: 64
//! - type: TORCH
//! ```
//!
//! ## Long Payloads
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────────┬─────────────┐
//! │ bits(x)  │ bits(y)  │ bits(z)  │ space id hi  │ space id lo │
//! └──────────┴──────────┴──────────┴──────────────┴─────────────┘
//! ```
//!
//! ## Failure Policy
//! Encoding and decoding never fail from the caller's point of view. Every
//! internal error is logged through `tracing` and replaced by the codec's
//! fallback: empty bytes when encoding, and the error marker item, an empty
//! list, or the origin location when decoding.

pub(crate) mod document;
mod item;
mod item_list;
mod location;
mod registry;
mod string_list;

pub use item::{ItemStackType, ITEM_KEY};
pub use item_list::{ItemStackListType, ITEMS_KEY};
pub use location::{LocationType, LOCATION_WORDS};
pub use registry::{decode_value, encode_value, CodecKind, ComplexValue};
pub use string_list::{StringListType, STRING_LIST_KEY};

use std::fmt;

use bytes::Bytes;

use crate::error::{CodecError, Result};
use crate::space::{NoSpaces, SpaceRegistry};

// =============================================================================
// Codec Constants
// =============================================================================

/// Single item <-> YAML bytes
pub static ITEM_STACK: ItemStackType = ItemStackType;

/// Item list <-> YAML bytes
pub static ITEM_STACK_LIST: ItemStackListType = ItemStackListType;

/// Location <-> five 64-bit words
pub static LOCATION: LocationType = LocationType;

/// String list <-> YAML bytes
pub static STRING_LIST: StringListType = StringListType;

// =============================================================================
// Primitive Types
// =============================================================================

/// Wire-level type of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Raw byte sequence
    Bytes,

    /// Sequence of 64-bit integers
    Longs,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Bytes => f.pad("bytes"),
            PrimitiveType::Longs => f.pad("longs"),
        }
    }
}

/// A payload as held by the host's key-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveValue {
    Bytes(Bytes),
    Longs(Vec<i64>),
}

impl PrimitiveValue {
    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            PrimitiveValue::Bytes(_) => PrimitiveType::Bytes,
            PrimitiveValue::Longs(_) => PrimitiveType::Longs,
        }
    }

    /// Approximate size in bytes
    pub fn size(&self) -> usize {
        match self {
            PrimitiveValue::Bytes(bytes) => bytes.len(),
            PrimitiveValue::Longs(words) => words.len() * std::mem::size_of::<i64>(),
        }
    }
}

/// A Rust type that can serve as a codec's primitive representation
pub trait Primitive: Sized {
    /// Wire-level type tag
    const TYPE: PrimitiveType;

    /// Wrap into the host store representation
    fn into_value(self) -> PrimitiveValue;

    /// Copy back out of the host store representation.
    /// Returns `None` when the stored kind differs.
    fn from_value(value: &PrimitiveValue) -> Option<Self>;
}

impl Primitive for Bytes {
    const TYPE: PrimitiveType = PrimitiveType::Bytes;

    fn into_value(self) -> PrimitiveValue {
        PrimitiveValue::Bytes(self)
    }

    fn from_value(value: &PrimitiveValue) -> Option<Self> {
        match value {
            PrimitiveValue::Bytes(bytes) => Some(bytes.clone()),
            PrimitiveValue::Longs(_) => None,
        }
    }
}

impl Primitive for Vec<i64> {
    const TYPE: PrimitiveType = PrimitiveType::Longs;

    fn into_value(self) -> PrimitiveValue {
        PrimitiveValue::Longs(self)
    }

    fn from_value(value: &PrimitiveValue) -> Option<Self> {
        match value {
            PrimitiveValue::Longs(words) => Some(words.clone()),
            PrimitiveValue::Bytes(_) => None,
        }
    }
}

// =============================================================================
// Adapter Context
// =============================================================================

/// Collaborators available to codecs during a conversion
#[derive(Clone, Copy)]
pub struct AdapterContext<'a> {
    spaces: &'a dyn SpaceRegistry,
}

impl<'a> AdapterContext<'a> {
    /// Context resolving spaces through `spaces`
    pub fn new(spaces: &'a dyn SpaceRegistry) -> Self {
        Self { spaces }
    }

    /// Space lookup used by the location codec
    pub fn spaces(&self) -> &'a dyn SpaceRegistry {
        self.spaces
    }
}

impl AdapterContext<'static> {
    /// Context with no loaded spaces
    pub fn detached() -> Self {
        static NO_SPACES: NoSpaces = NoSpaces;
        Self { spaces: &NO_SPACES }
    }
}

impl Default for AdapterContext<'static> {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for AdapterContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterContext").finish_non_exhaustive()
    }
}

// =============================================================================
// Typed Codec
// =============================================================================

/// A pair of total conversions between a complex value and its primitive form
///
/// Implementations are stateless and shared process-wide through the statics
/// in this module. Neither direction reports errors: `to_primitive` falls back
/// to an empty payload and `from_primitive` to a documented default.
pub trait PersistentType: Send + Sync {
    /// Wire-level representation
    type Primitive: Primitive;

    /// In-memory representation
    type Complex;

    /// Wire-level type tag
    fn primitive_type(&self) -> PrimitiveType {
        <Self::Primitive as Primitive>::TYPE
    }

    /// Name of the complex type
    fn complex_type(&self) -> &'static str {
        std::any::type_name::<Self::Complex>()
    }

    /// Encode a value
    fn to_primitive(&self, value: &Self::Complex, ctx: &AdapterContext<'_>) -> Self::Primitive;

    /// Decode a payload
    fn from_primitive(&self, primitive: &Self::Primitive, ctx: &AdapterContext<'_>)
        -> Self::Complex;
}

/// Decode a stored payload with `codec`, checking the stored kind first
pub(crate) fn decode_stored<T: PersistentType>(
    codec: &T,
    value: &PrimitiveValue,
    target: impl FnOnce() -> String,
    ctx: &AdapterContext<'_>,
) -> Result<T::Complex> {
    let primitive = T::Primitive::from_value(value).ok_or_else(|| CodecError::TypeMismatch {
        target: target(),
        expected: codec.primitive_type(),
        found: value.primitive_type(),
    })?;

    Ok(codec.from_primitive(&primitive, ctx))
}
