//! Secret key type.

use age::secrecy::ExposeSecret;
use age::x25519;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::{Result, StoreError};

/// The per-user secret key.
///
/// Holds the raw key file bytes exactly as stored. The bytes are an age
/// X25519 identity; the same key encrypts and decrypts the configuration.
#[derive(Clone)]
pub struct Key {
    bytes: Zeroizing<Vec<u8>>,
}

impl Key {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let identity = x25519::Identity::generate();
        let secret = identity.to_string();
        Self::from_bytes(format!("{}\n", secret.expose_secret()).into_bytes())
    }

    /// Wrap raw key bytes without validating them.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    /// Raw key bytes, as persisted.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Parse the key into an age identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFormat` if the bytes are not a valid key.
    pub fn identity(&self) -> Result<x25519::Identity> {
        let text = std::str::from_utf8(&self.bytes)
            .map_err(|_| StoreError::InvalidFormat("key is not valid UTF-8".to_string()))?;
        text.trim()
            .parse::<x25519::Identity>()
            .map_err(|e: &str| StoreError::InvalidFormat(e.to_string()).into())
    }

    /// Short fingerprint for display: first 8 bytes of the SHA-256 of the
    /// public half, hex encoded. Reveals nothing about the secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFormat` if the key cannot be parsed.
    pub fn fingerprint(&self) -> Result<String> {
        let public = self.identity()?.to_public().to_string();
        let digest = Sha256::digest(public.as_bytes());
        Ok(digest[..8].iter().map(|b| format!("{:02x}", b)).collect())
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.as_slice() == other.bytes.as_slice()
    }
}

impl Eq for Key {}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("len", &self.bytes.len()).finish()
    }
}
