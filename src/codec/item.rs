//! Single item codec

use bytes::Bytes;
use serde_yaml::Value;

use super::document::{log_decode_failure, log_encode_failure, read_document, shape, take_entry, write_document};
use super::{AdapterContext, PersistentType};
use crate::error::{CodecError, Result};
use crate::item::Item;

/// Top-level document key holding the item
pub const ITEM_KEY: &str = "i";

const CODEC_NAME: &str = "item-stack";

/// `Item` <-> YAML bytes
///
/// Empty or unreadable payloads decode to [`Item::error_marker`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemStackType;

impl ItemStackType {
    fn encode(item: &Item) -> Result<Bytes> {
        let map = item.to_structure()?;
        write_document(ITEM_KEY, Value::Mapping(map))
    }

    fn decode(bytes: &[u8]) -> Result<Item> {
        let mut document = read_document(bytes)?;

        match take_entry(&mut document, ITEM_KEY)? {
            Value::Mapping(map) => Item::from_structure(map),
            other => Err(CodecError::WrongShape {
                key: ITEM_KEY,
                expected: "mapping",
                found: shape(&other),
            }),
        }
    }
}

impl PersistentType for ItemStackType {
    type Primitive = Bytes;
    type Complex = Item;

    fn to_primitive(&self, item: &Item, _ctx: &AdapterContext<'_>) -> Bytes {
        Self::encode(item).unwrap_or_else(|e| {
            log_encode_failure(CODEC_NAME, &e);
            Bytes::new()
        })
    }

    fn from_primitive(&self, bytes: &Bytes, _ctx: &AdapterContext<'_>) -> Item {
        if bytes.is_empty() {
            return Item::error_marker();
        }

        match Self::decode(bytes) {
            Ok(item) => item,
            Err(e) => {
                log_decode_failure(CODEC_NAME, bytes.len(), &e);
                Item::error_marker()
            }
        }
    }
}
