//! AES-256-GCM sealing of stored passwords.
//!
//! A sealed payload is `nonce || ciphertext || tag`. The 96-bit nonce is
//! drawn fresh from the OS random source for every seal; there is no
//! counter and no associated data.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use super::key::EncryptionKey;
use crate::error::{PwdgenError, Result};

/// Width of the GCM nonce prefixed to every payload.
pub const NONCE_LEN: usize = 12;

/// Width of the GCM authentication tag appended by the cipher.
pub const TAG_LEN: usize = 16;

/// AES-256-GCM bound to one key.
pub struct SealingCipher {
    cipher: Aes256Gcm,
}

impl SealingCipher {
    /// Build the cipher from a 256-bit key.
    pub fn new(key: &EncryptionKey) -> Result<Self> {
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| PwdgenError::Crypto(format!("Invalid AES key: {}", e)))?;
        Ok(Self { cipher })
    }

    /// Generate a random 96-bit nonce.
    pub fn generate_nonce() -> Result<[u8; NONCE_LEN]> {
        let mut nonce = [0u8; NONCE_LEN];
        getrandom::getrandom(&mut nonce)
            .map_err(|e| PwdgenError::RandomSource(format!("Nonce generation failed: {}", e)))?;
        Ok(nonce)
    }

    /// Seal `plaintext` under a fresh nonce, returning `nonce || ciphertext || tag`.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce = Self::generate_nonce()?;
        self.seal_with_nonce(&nonce, plaintext)
    }

    fn seal_with_nonce(&self, nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(nonce), plaintext)
            .map_err(|e| PwdgenError::Crypto(format!("Encryption failed: {}", e)))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(nonce);
        sealed.extend(ciphertext);
        Ok(sealed)
    }

    /// Open a payload produced by [`SealingCipher::seal`].
    ///
    /// # Errors
    ///
    /// - `PwdgenError::MalformedPayload` if the payload is shorter than the
    ///   nonce; nothing is opened in that case.
    /// - `PwdgenError::DecryptionFailed` on any authentication failure
    ///   (tampering, truncation, wrong key). No plaintext is ever returned
    ///   alongside this error.
    pub fn open(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        if sealed.len() < NONCE_LEN {
            return Err(PwdgenError::MalformedPayload {
                len: sealed.len(),
                minimum: NONCE_LEN,
            });
        }

        let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| PwdgenError::DecryptionFailed)
    }
}

/// Seal `plaintext` under `key`.
///
/// # Examples
///
/// ```
/// use pwdgen_core::crypto::{decrypt, encrypt, EncryptionKey};
///
/// let key = EncryptionKey::generate().unwrap();
/// let sealed = encrypt(b"hunter2", &key).unwrap();
/// assert_eq!(decrypt(&sealed, &key).unwrap(), b"hunter2");
/// ```
pub fn encrypt(plaintext: &[u8], key: &EncryptionKey) -> Result<Vec<u8>> {
    SealingCipher::new(key)?.seal(plaintext)
}

/// Open a sealed payload under `key`.
pub fn decrypt(sealed: &[u8], key: &EncryptionKey) -> Result<Vec<u8>> {
    SealingCipher::new(key)?.open(sealed)
}
