//! Error types for slotcodec
//!
//! Codec internals use these errors to describe why a payload could not be
//! read or written. The codec entry points never return them: they log the
//! error and collapse it to the codec's fallback value. The container and the
//! registry return them to the host, since they signal misuse rather than a
//! corrupt payload.

use thiserror::Error;

use crate::codec::PrimitiveType;

/// Result type alias using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Unified error type for slotcodec operations
#[derive(Debug, Error)]
pub enum CodecError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Document Errors
    // -------------------------------------------------------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Document has no '{key}' entry")]
    MissingKey { key: &'static str },

    #[error("Document entry '{key}' is a {found}, expected a {expected}")]
    WrongShape {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    // -------------------------------------------------------------------------
    // Value Errors
    // -------------------------------------------------------------------------
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Invalid namespaced key: {0}")]
    InvalidKey(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unknown codec: {0}")]
    UnknownCodec(String),

    // -------------------------------------------------------------------------
    // Container Errors
    // -------------------------------------------------------------------------
    #[error("{target} holds {found} but codec expects {expected}")]
    TypeMismatch {
        target: String,
        expected: PrimitiveType,
        found: PrimitiveType,
    },

    #[error("Payload too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}
