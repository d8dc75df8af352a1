//! Container Module
//!
//! In-memory key-value slot store standing in for the host's persistent data
//! holder. Values are stored in their primitive form; codecs are applied on
//! the way in and out.
//!
//! ## Responsibilities
//! - Namespaced, validated slot keys
//! - Typed `set`/`get` through any `PersistentType`
//! - Primitive kind checks (a long slot is never read as bytes)
//! - Per-slot payload size limit and size tracking
//!
//! ## Data Structure Choice
//! BTreeMap wrapped in a `parking_lot::RwLock`:
//! - Ordered keys for stable listing
//! - Many concurrent readers, one writer

mod key;
mod table;

pub use key::NamespacedKey;
pub use table::PersistentDataContainer;
