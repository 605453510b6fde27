//! Age encryption backend.
//!
//! Encrypts to the public half of the key's X25519 identity and decrypts
//! with the identity itself. Output is the binary age format.

use std::io::{Read, Write};

use tracing::trace;

use super::Cipher;
use crate::core::key::Key;
use crate::error::{CipherError, Result};

/// Age-based backend using X25519 keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Age;

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<Vec<u8>> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let recipient = key.identity()?.to_public();
        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
                .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(&mut encrypted)
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;
        writer
            .write_all(plaintext)
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");
        Ok(encrypted)
    }

    fn decrypt(&self, ciphertext: &[u8], key: &Key) -> Result<Vec<u8>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let identity = key.identity()?;
        let decryptor = age::Decryptor::new(ciphertext)
            .map_err(|e| CipherError::DecryptionFailed(e.to_string()))?;

        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(e.to_string()))?;

        let mut decrypted = Vec::new();
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(e.to_string()))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");
        Ok(decrypted)
    }
}
