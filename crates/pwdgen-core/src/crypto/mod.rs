//! Cryptographic operations for pwdgen.
//!
//! - **key**: the single locally-stored 256-bit key (create once, load per call)
//! - **cipher**: AES-256-GCM sealing with a random nonce prefixed to each payload
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading or tampering with the record store without the key file
//!
//! We do NOT defend against:
//! - An attacker who can read the key file
//! - Compromised OS / clipboard snooping

pub mod cipher;
pub mod key;

pub use cipher::{decrypt, encrypt, SealingCipher, NONCE_LEN, TAG_LEN};
pub use key::{EncryptionKey, KeyManager, KEY_LENGTH};
