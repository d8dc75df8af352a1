//! String list codec

use bytes::Bytes;
use serde_yaml::Value;

use super::document::{log_decode_failure, log_encode_failure, read_document, write_document};
use super::{AdapterContext, PersistentType};
use crate::error::Result;

/// Top-level document key holding the strings
pub const STRING_LIST_KEY: &str = "l";

const CODEC_NAME: &str = "string-list";

/// `Vec<String>` <-> YAML bytes
///
/// A document without a `l` sequence reads as an empty list. Scalar elements
/// are read as their text; nested collections and nulls are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringListType;

impl StringListType {
    fn encode(strings: &[String]) -> Result<Bytes> {
        let sequence = strings.iter().cloned().map(Value::String).collect();
        write_document(STRING_LIST_KEY, Value::Sequence(sequence))
    }

    fn decode(bytes: &[u8]) -> Result<Vec<String>> {
        let mut document = read_document(bytes)?;

        let raw = match document.remove(STRING_LIST_KEY) {
            Some(Value::Sequence(sequence)) => sequence,
            _ => return Ok(Vec::new()),
        };

        Ok(raw.into_iter().filter_map(scalar_text).collect())
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

impl PersistentType for StringListType {
    type Primitive = Bytes;
    type Complex = Vec<String>;

    fn to_primitive(&self, strings: &Vec<String>, _ctx: &AdapterContext<'_>) -> Bytes {
        Self::encode(strings).unwrap_or_else(|e| {
            log_encode_failure(CODEC_NAME, &e);
            Bytes::new()
        })
    }

    fn from_primitive(&self, bytes: &Bytes, _ctx: &AdapterContext<'_>) -> Vec<String> {
        if bytes.is_empty() {
            return Vec::new();
        }

        Self::decode(bytes).unwrap_or_else(|e| {
            log_decode_failure(CODEC_NAME, bytes.len(), &e);
            Vec::new()
        })
    }
}
