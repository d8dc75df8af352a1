//! Item record
//!
//! Item definition and its structural (de)serializer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::codec::document::shape;
use crate::error::{CodecError, Result};

/// Item type of the placeholder returned for unreadable payloads
pub const ERROR_ITEM_TYPE: &str = "STONE";

/// Display label of the placeholder returned for unreadable payloads
pub const ERROR_ITEM_LABEL: &str = "&cERROR";

/// Meta property holding an item's display label
pub const DISPLAY_NAME: &str = "display-name";

/// Deepest nesting allowed inside a meta value.
/// Keeps encoded documents under the YAML parser's recursion limit.
pub const MAX_META_DEPTH: usize = 64;

/// An inventory item
///
/// Meta values may nest sequences and mappings up to [`MAX_META_DEPTH`]
/// levels; deeper items fail validation and do not encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Type identifier (material name)
    #[serde(rename = "type")]
    pub item_type: String,

    /// Stack size
    #[serde(default = "default_amount", skip_serializing_if = "is_default_amount")]
    pub amount: u32,

    /// Open property map (strings, numbers, nested mappings/sequences)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, Value>,
}

fn default_amount() -> u32 {
    1
}

fn is_default_amount(amount: &u32) -> bool {
    *amount == 1
}

impl Item {
    /// Create an item with no properties
    pub fn new(item_type: impl Into<String>, amount: u32) -> Self {
        Self {
            item_type: item_type.into(),
            amount,
            meta: BTreeMap::new(),
        }
    }

    /// Set a property, replacing any previous value
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Set the display label
    pub fn with_display_name(self, name: impl Into<String>) -> Self {
        self.with_meta(DISPLAY_NAME, name.into())
    }

    /// The display label, if one is set and is a string
    pub fn display_name(&self) -> Option<&str> {
        self.meta.get(DISPLAY_NAME).and_then(Value::as_str)
    }

    /// The placeholder item decoders return when a payload cannot be read
    pub fn error_marker() -> Self {
        Self::new(ERROR_ITEM_TYPE, 1).with_display_name(ERROR_ITEM_LABEL)
    }

    /// Whether this item is the unreadable-payload placeholder
    pub fn is_error_marker(&self) -> bool {
        self.item_type == ERROR_ITEM_TYPE
            && self.amount == 1
            && self.meta.len() == 1
            && self.display_name() == Some(ERROR_ITEM_LABEL)
    }

    // =========================================================================
    // Structural (de)serialization
    // =========================================================================

    /// Convert to the generic structural mapping
    pub fn to_structure(&self) -> Result<Mapping> {
        self.validate()?;

        match serde_yaml::to_value(self)? {
            Value::Mapping(map) => Ok(map),
            other => Err(CodecError::InvalidItem(format!(
                "item serialized to a {} instead of a mapping",
                shape(&other)
            ))),
        }
    }

    /// Rebuild an item from its structural mapping
    pub fn from_structure(map: Mapping) -> Result<Self> {
        let item: Item = serde_yaml::from_value(Value::Mapping(map))
            .map_err(|e| CodecError::InvalidItem(e.to_string()))?;
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<()> {
        if self.item_type.trim().is_empty() {
            return Err(CodecError::InvalidItem("item type is empty".to_string()));
        }
        if let Some((key, _)) = self
            .meta
            .iter()
            .find(|(_, value)| nests_deeper_than(value, MAX_META_DEPTH))
        {
            return Err(CodecError::InvalidItem(format!(
                "meta '{}' nests deeper than {} levels",
                key, MAX_META_DEPTH
            )));
        }
        Ok(())
    }
}

/// Whether `value` has more than `limit` levels of sequences or mappings
fn nests_deeper_than(value: &Value, limit: usize) -> bool {
    let mut children: Box<dyn Iterator<Item = &Value> + '_> = match value {
        Value::Sequence(seq) => Box::new(seq.iter()),
        Value::Mapping(map) => Box::new(map.iter().flat_map(|(k, v)| [k, v])),
        Value::Tagged(tagged) => return nests_deeper_than(&tagged.value, limit),
        _ => return false,
    };

    match limit.checked_sub(1) {
        None => true,
        Some(remaining) => children.any(|child| nests_deeper_than(child, remaining)),
    }
}
