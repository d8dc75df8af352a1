//! Persistent data container
//!
//! BTreeMap-based slot store with RwLock for concurrency.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::NamespacedKey;
use crate::codec::{decode_stored, AdapterContext, PersistentType, Primitive, PrimitiveValue};
use crate::config::Config;
use crate::error::{CodecError, Result};

/// Key-value store of primitive payloads
///
/// ## Concurrency:
/// - `entries`: Protected by RwLock (many concurrent readers, exclusive writer)
/// - `size`: Updated while the write lock is held, read lock-free
/// - All methods use `&self`
///
/// Decoding runs after the read lock is released, so slow codecs never block
/// writers.
pub struct PersistentDataContainer {
    config: Config,

    /// Slot payloads, ordered by key
    entries: RwLock<BTreeMap<NamespacedKey, PrimitiveValue>>,

    /// Sum of payload sizes in bytes
    size: AtomicUsize,
}

impl PersistentDataContainer {
    /// Create an empty container
    pub fn new(config: Config) -> Self {
        Self {
            config,
            entries: RwLock::new(BTreeMap::new()),
            size: AtomicUsize::new(0),
        }
    }

    /// Build a key in the configured namespace
    pub fn key(&self, name: &str) -> Result<NamespacedKey> {
        NamespacedKey::new(self.config.namespace.as_str(), name)
    }

    // =========================================================================
    // Typed Access
    // =========================================================================

    /// Encode `value` with `codec` and store it under `key`
    pub fn set<T: PersistentType>(
        &self,
        key: NamespacedKey,
        codec: &T,
        value: &T::Complex,
        ctx: &AdapterContext<'_>,
    ) -> Result<()> {
        let payload = codec.to_primitive(value, ctx).into_value();
        self.set_raw(key, payload)
    }

    /// Decode the payload under `key` with `codec`
    ///
    /// Returns `Ok(None)` for an empty slot and `TypeMismatch` when the slot
    /// holds a different primitive kind than the codec reads.
    pub fn get<T: PersistentType>(
        &self,
        key: &NamespacedKey,
        codec: &T,
        ctx: &AdapterContext<'_>,
    ) -> Result<Option<T::Complex>> {
        let Some(payload) = self.get_raw(key) else {
            return Ok(None);
        };

        decode_stored(codec, &payload, || format!("slot '{}'", key), ctx).map(Some)
    }

    /// Like `get`, substituting `default` for an empty slot
    pub fn get_or_default<T: PersistentType>(
        &self,
        key: &NamespacedKey,
        codec: &T,
        default: T::Complex,
        ctx: &AdapterContext<'_>,
    ) -> Result<T::Complex> {
        Ok(self.get(key, codec, ctx)?.unwrap_or(default))
    }

    /// Whether `key` holds a payload `codec` can read
    pub fn has<T: PersistentType>(&self, key: &NamespacedKey, codec: &T) -> bool {
        self.entries
            .read()
            .get(key)
            .is_some_and(|payload| payload.primitive_type() == codec.primitive_type())
    }

    // =========================================================================
    // Raw Access
    // =========================================================================

    /// Store a payload as-is
    pub fn set_raw(&self, key: NamespacedKey, payload: PrimitiveValue) -> Result<()> {
        let new_size = payload.size();
        if new_size > self.config.max_payload_size {
            return Err(CodecError::PayloadTooLarge {
                size: new_size,
                max: self.config.max_payload_size,
            });
        }

        tracing::trace!(key = %key, size = new_size, "Storing slot payload");

        let mut entries = self.entries.write();
        if let Some(old) = entries.insert(key, payload) {
            self.size.fetch_sub(old.size(), Ordering::Relaxed);
        }
        self.size.fetch_add(new_size, Ordering::Relaxed);

        Ok(())
    }

    /// Payload under `key`, without decoding
    pub fn get_raw(&self, key: &NamespacedKey) -> Option<PrimitiveValue> {
        self.entries.read().get(key).cloned()
    }

    /// Whether any payload is stored under `key`
    pub fn contains(&self, key: &NamespacedKey) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Remove and return the payload under `key`
    pub fn remove(&self, key: &NamespacedKey) -> Option<PrimitiveValue> {
        let mut entries = self.entries.write();
        let removed = entries.remove(key);
        if let Some(payload) = &removed {
            self.size.fetch_sub(payload.size(), Ordering::Relaxed);
        }
        removed
    }

    /// All keys in sorted order
    pub fn keys(&self) -> Vec<NamespacedKey> {
        self.entries.read().keys().cloned().collect()
    }

    /// Remove every slot
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.clear();
        self.size.store(0, Ordering::Relaxed);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of slots
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Sum of stored payload sizes in bytes
    pub fn size(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for PersistentDataContainer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
