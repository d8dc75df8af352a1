//! Codec registry
//!
//! Names the built-in codecs and dispatches to them over the host store's
//! untyped `PrimitiveValue`, for callers that only learn which codec applies
//! at runtime.

use std::fmt;
use std::str::FromStr;

use super::{
    decode_stored, AdapterContext, PersistentType, Primitive, PrimitiveType, PrimitiveValue,
    ITEM_STACK, ITEM_STACK_LIST, LOCATION, STRING_LIST,
};
use crate::error::{CodecError, Result};
use crate::item::Item;
use crate::space::Location;

/// The built-in codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    ItemStack,
    ItemStackList,
    Location,
    StringList,
}

impl CodecKind {
    /// Every built-in codec, in registration order
    pub const ALL: [CodecKind; 4] = [
        CodecKind::ItemStack,
        CodecKind::ItemStackList,
        CodecKind::Location,
        CodecKind::StringList,
    ];

    /// Stable codec name
    pub fn name(self) -> &'static str {
        match self {
            CodecKind::ItemStack => "item-stack",
            CodecKind::ItemStackList => "item-stack-list",
            CodecKind::Location => "location",
            CodecKind::StringList => "string-list",
        }
    }

    pub fn primitive_type(self) -> PrimitiveType {
        match self {
            CodecKind::ItemStack => ITEM_STACK.primitive_type(),
            CodecKind::ItemStackList => ITEM_STACK_LIST.primitive_type(),
            CodecKind::Location => LOCATION.primitive_type(),
            CodecKind::StringList => STRING_LIST.primitive_type(),
        }
    }

    pub fn complex_type(self) -> &'static str {
        match self {
            CodecKind::ItemStack => ITEM_STACK.complex_type(),
            CodecKind::ItemStackList => ITEM_STACK_LIST.complex_type(),
            CodecKind::Location => LOCATION.complex_type(),
            CodecKind::StringList => STRING_LIST.complex_type(),
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for CodecKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        CodecKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CodecError::UnknownCodec(s.to_string()))
    }
}

/// A decoded value of any built-in codec
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexValue {
    Item(Item),
    Items(Vec<Item>),
    Location(Location),
    Strings(Vec<String>),
}

impl ComplexValue {
    /// The codec that handles this value
    pub fn kind(&self) -> CodecKind {
        match self {
            ComplexValue::Item(_) => CodecKind::ItemStack,
            ComplexValue::Items(_) => CodecKind::ItemStackList,
            ComplexValue::Location(_) => CodecKind::Location,
            ComplexValue::Strings(_) => CodecKind::StringList,
        }
    }
}

/// Encode with the codec matching the value's kind
pub fn encode_value(value: &ComplexValue, ctx: &AdapterContext<'_>) -> PrimitiveValue {
    match value {
        ComplexValue::Item(item) => ITEM_STACK.to_primitive(item, ctx).into_value(),
        ComplexValue::Items(items) => ITEM_STACK_LIST.to_primitive(items, ctx).into_value(),
        ComplexValue::Location(location) => LOCATION.to_primitive(location, ctx).into_value(),
        ComplexValue::Strings(strings) => STRING_LIST.to_primitive(strings, ctx).into_value(),
    }
}

/// Decode a stored payload with the named codec
///
/// Fails only when the payload's primitive kind is not the codec's; payload
/// contents never cause an error.
pub fn decode_value(
    kind: CodecKind,
    value: &PrimitiveValue,
    ctx: &AdapterContext<'_>,
) -> Result<ComplexValue> {
    let target = || format!("{} payload", kind);

    Ok(match kind {
        CodecKind::ItemStack => ComplexValue::Item(decode_stored(&ITEM_STACK, value, target, ctx)?),
        CodecKind::ItemStackList => {
            ComplexValue::Items(decode_stored(&ITEM_STACK_LIST, value, target, ctx)?)
        }
        CodecKind::Location => {
            ComplexValue::Location(decode_stored(&LOCATION, value, target, ctx)?)
        }
        CodecKind::StringList => {
            ComplexValue::Strings(decode_stored(&STRING_LIST, value, target, ctx)?)
        }
    })
}
