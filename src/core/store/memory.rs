//! In-memory key storage.

use std::cell::OnceCell;

use super::KeyStore;
use crate::core::key::Key;
use crate::error::Result;

/// Holds the key in memory only. Nothing touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    key: OnceCell<Key>,
}

impl MemoryKeyStore {
    /// Empty store; a key is generated on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `key`.
    pub fn with_key(key: Key) -> Self {
        Self {
            key: OnceCell::from(key),
        }
    }
}

impl KeyStore for MemoryKeyStore {
    fn get_or_create_key(&self) -> Result<Key> {
        Ok(self.key.get_or_init(Key::generate).clone())
    }

    fn has_key(&self) -> bool {
        self.key.get().is_some()
    }
}
