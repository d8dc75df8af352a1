//! YAML document envelope
//!
//! Reader/writer for the single-key documents byte codecs emit.

use bytes::Bytes;
use serde_yaml::{Mapping, Value};

use crate::error::{CodecError, Result};

/// Short name of a YAML value's shape, for diagnostics
pub(crate) fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Emit `{key: value}` as UTF-8 YAML
pub(crate) fn write_document(key: &'static str, value: Value) -> Result<Bytes> {
    let mut root = Mapping::new();
    root.insert(Value::from(key), value);

    let text = serde_yaml::to_string(&root)?;
    Ok(Bytes::from(text.into_bytes()))
}

/// Parse a UTF-8 YAML document whose top level must be a mapping.
/// Invalid UTF-8 sequences read as U+FFFD. A blank document reads as an
/// empty mapping.
pub(crate) fn read_document(bytes: &[u8]) -> Result<Mapping> {
    let text = String::from_utf8_lossy(bytes);
    if text.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&text)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(CodecError::MalformedDocument(format!(
            "top level is a {}, expected a mapping",
            shape(&other)
        ))),
    }
}

/// Remove the reserved entry from a parsed document
pub(crate) fn take_entry(document: &mut Mapping, key: &'static str) -> Result<Value> {
    document
        .remove(key)
        .ok_or(CodecError::MissingKey { key })
}

/// Emit the error log for a failed decode
pub(crate) fn log_decode_failure(codec: &'static str, payload_len: usize, error: &CodecError) {
    match error {
        CodecError::Yaml(_) | CodecError::MalformedDocument(_) => {
            tracing::error!(codec, payload_len, error = %error, "Invalid YAML while decoding payload");
        }
        CodecError::MissingKey { .. } | CodecError::WrongShape { .. } => {
            tracing::error!(codec, payload_len, error = %error, "Payload document missing entry or wrong type");
        }
        _ => {
            tracing::error!(codec, payload_len, error = %error, "Failed to decode payload");
        }
    }
}

/// Emit the error log for a failed encode
pub(crate) fn log_encode_failure(codec: &'static str, error: &CodecError) {
    tracing::error!(codec, error = %error, "Failed to encode payload");
}
