//! Secret key storage.
//!
//! One key per user account, created lazily on first use. The configuration
//! manager receives a [`KeyStore`] rather than locating the key itself.
//!
//! ## Example
//!
//! ```ignore
//! let store = FileKeyStore::new(paths.key_file.clone());
//! let key = store.get_or_create_key()?;
//! ```

use crate::core::key::Key;
use crate::error::Result;

mod fs;
mod memory;

pub use fs::FileKeyStore;
pub use memory::MemoryKeyStore;

/// Key storage trait.
pub trait KeyStore {
    /// Return the stored key, generating and persisting one if none exists.
    ///
    /// Repeated calls return the same key bytes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key cannot be read or persisted. There is
    /// no fallback key.
    fn get_or_create_key(&self) -> Result<Key>;

    /// Check whether a key already exists, without creating one.
    fn has_key(&self) -> bool;
}
