//! Configuration for slotcodec
//!
//! Centralized configuration for the persistent data container.

/// Namespace used for container keys when none is configured
pub const DEFAULT_NAMESPACE: &str = "slotcodec";

/// Main configuration for a persistent data container
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Key Configuration
    // -------------------------------------------------------------------------
    /// Namespace applied by `PersistentDataContainer::key`
    pub namespace: String,

    // -------------------------------------------------------------------------
    // Payload Configuration
    // -------------------------------------------------------------------------
    /// Largest encoded payload a single slot may hold (in bytes).
    /// Long payloads count 8 bytes per word.
    pub max_payload_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            max_payload_size: 1024 * 1024, // 1 MB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the namespace used for container keys
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the maximum payload size per slot (in bytes)
    pub fn max_payload_size(mut self, size: usize) -> Self {
        self.config.max_payload_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
