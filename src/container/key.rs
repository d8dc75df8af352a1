//! Namespaced slot keys

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Result};

/// A slot key of the form `namespace:key`
///
/// Namespaces allow `[a-z0-9._-]`; keys additionally allow `/`. Neither part
/// may be empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedKey {
    namespace: String,
    key: String,
}

impl NamespacedKey {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let key = key.into();

        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(CodecError::InvalidKey(format!(
                "invalid namespace '{}': must match [a-z0-9._-]+",
                namespace
            )));
        }
        if key.is_empty() || !key.chars().all(|c| c == '/' || is_namespace_char(c)) {
            return Err(CodecError::InvalidKey(format!(
                "invalid key '{}': must match [a-z0-9/._-]+",
                key
            )));
        }

        Ok(Self { namespace, key })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-')
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl FromStr for NamespacedKey {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((namespace, key)) => Self::new(namespace, key),
            None => Err(CodecError::InvalidKey(format!(
                "'{}' is not of the form namespace:key",
                s
            ))),
        }
    }
}
