//! Configuration encryption.
//!
//! The blob is encrypted and decrypted with the same per-user [`Key`].
//! [`Age`] is the only backend; the [`Cipher`] trait keeps the manager
//! independent of it.

use crate::core::key::Key;
use crate::error::Result;

mod age;

pub use self::age::Age;

/// Cryptographic backend trait.
pub trait Cipher {
    /// Encrypt `plaintext` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if encryption fails, or
    /// `StoreError::InvalidFormat` if the key cannot be parsed.
    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Decrypt `ciphertext` with `key`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the key does not match or
    /// the ciphertext is corrupt or truncated.
    fn decrypt(&self, ciphertext: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}
