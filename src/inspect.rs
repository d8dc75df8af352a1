//! Payload files
//!
//! Reading and writing raw slot payloads on disk, for diagnosing corrupted
//! slots outside the host.
//!
//! ## File Format
//! - Byte payloads: the raw bytes, unchanged
//! - Long payloads: decimal `i64` words separated by whitespace

use std::fs;
use std::path::Path;

use bytes::Bytes;

use crate::codec::{PrimitiveType, PrimitiveValue};
use crate::error::{CodecError, Result};

/// Read a payload file holding a payload of the given kind
pub fn read_payload(path: &Path, kind: PrimitiveType) -> Result<PrimitiveValue> {
    match kind {
        PrimitiveType::Bytes => Ok(PrimitiveValue::Bytes(Bytes::from(fs::read(path)?))),
        PrimitiveType::Longs => {
            let text = fs::read_to_string(path)?;
            parse_words(&text).map(PrimitiveValue::Longs)
        }
    }
}

/// Write a payload file
pub fn write_payload(path: &Path, payload: &PrimitiveValue) -> Result<()> {
    match payload {
        PrimitiveValue::Bytes(bytes) => fs::write(path, bytes)?,
        PrimitiveValue::Longs(words) => {
            let text: Vec<String> = words.iter().map(i64::to_string).collect();
            fs::write(path, text.join("\n"))?;
        }
    }
    Ok(())
}

fn parse_words(text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|word| {
            word.parse::<i64>().map_err(|e| {
                CodecError::MalformedPayload(format!("word '{}' is not an i64: {}", word, e))
            })
        })
        .collect()
}
