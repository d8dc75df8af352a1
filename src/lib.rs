//! # slotcodec
//!
//! Typed codecs that turn complex values into compact payloads for opaque
//! key-value persistence slots, and back:
//! - Inventory items and item lists as YAML documents
//! - Spatial locations as five 64-bit words
//! - String lists as YAML documents
//!
//! Decoding never fails. Corrupt, truncated or missing payloads decode to a
//! documented fallback value and the failure is logged through `tracing`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PersistentDataContainer                     │
//! │            (NamespacedKey -> PrimitiveValue)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ set / get
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                PersistentType codecs                         │
//! │  ITEM_STACK · ITEM_STACK_LIST · LOCATION · STRING_LIST       │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │  YAML document  │                │  SpaceRegistry  │
//!   │  (Item mapping) │                │  (UUID lookup)  │
//!   └─────────────────┘                └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use slotcodec::codec::{AdapterContext, PersistentType, STRING_LIST};
//!
//! let ctx = AdapterContext::detached();
//! let strings = vec!["a".to_string(), "b".to_string()];
//!
//! let payload = STRING_LIST.to_primitive(&strings, &ctx);
//! assert_eq!(STRING_LIST.from_primitive(&payload, &ctx), strings);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod item;
pub mod space;
pub mod codec;
pub mod container;
pub mod inspect;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CodecError, Result};
pub use config::Config;
pub use codec::{AdapterContext, PersistentType, PrimitiveType, PrimitiveValue};
pub use container::{NamespacedKey, PersistentDataContainer};
pub use item::Item;
pub use space::{Location, SpaceRef, SpaceRegistry};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of slotcodec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
