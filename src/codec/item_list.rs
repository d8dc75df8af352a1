//! Item list codec

use bytes::Bytes;
use serde_yaml::Value;

use super::document::{log_decode_failure, log_encode_failure, read_document, shape, take_entry, write_document};
use super::{AdapterContext, PersistentType};
use crate::error::{CodecError, Result};
use crate::item::Item;

/// Top-level document key holding the item sequence
pub const ITEMS_KEY: &str = "items";

const CODEC_NAME: &str = "item-stack-list";

/// `Vec<Item>` <-> YAML bytes
///
/// Decoding is partial: elements that cannot be read are skipped with a
/// warning and the rest of the list is kept. Empty or unreadable payloads
/// decode to an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemStackListType;

impl ItemStackListType {
    fn encode(items: &[Item]) -> Result<Bytes> {
        let sequence = items
            .iter()
            .map(|item| item.to_structure().map(Value::Mapping))
            .collect::<Result<Vec<_>>>()?;

        write_document(ITEMS_KEY, Value::Sequence(sequence))
    }

    fn decode(bytes: &[u8]) -> Result<Vec<Item>> {
        let mut document = read_document(bytes)?;

        let raw = match take_entry(&mut document, ITEMS_KEY)? {
            Value::Sequence(sequence) => sequence,
            other => {
                return Err(CodecError::WrongShape {
                    key: ITEMS_KEY,
                    expected: "sequence",
                    found: shape(&other),
                })
            }
        };

        let mut items = Vec::with_capacity(raw.len());
        for (index, element) in raw.into_iter().enumerate() {
            match element {
                Value::Mapping(map) => match Item::from_structure(map) {
                    Ok(item) => items.push(item),
                    Err(e) => {
                        tracing::warn!(index, error = %e, "Skipping unreadable element in 'items'");
                    }
                },
                other => {
                    tracing::warn!(index, found = shape(&other), "Skipping non-mapping element in 'items'");
                }
            }
        }

        Ok(items)
    }
}

impl PersistentType for ItemStackListType {
    type Primitive = Bytes;
    type Complex = Vec<Item>;

    fn to_primitive(&self, items: &Vec<Item>, _ctx: &AdapterContext<'_>) -> Bytes {
        Self::encode(items).unwrap_or_else(|e| {
            log_encode_failure(CODEC_NAME, &e);
            Bytes::new()
        })
    }

    fn from_primitive(&self, bytes: &Bytes, _ctx: &AdapterContext<'_>) -> Vec<Item> {
        if bytes.is_empty() {
            return Vec::new();
        }

        Self::decode(bytes).unwrap_or_else(|e| {
            log_decode_failure(CODEC_NAME, bytes.len(), &e);
            Vec::new()
        })
    }
}
