//! Error types for pwdgen core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer decides how
//! (and whether) to present them.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pwdgen operations.
pub type Result<T> = std::result::Result<T, PwdgenError>;

/// Core error type for pwdgen operations.
#[derive(Debug, Error)]
pub enum PwdgenError {
    /// Requested password would fall below the entropy floor
    #[error(
        "the entropy of the requested password is too low ({bits} bits, minimum {minimum}); \
         please request a password with a larger length"
    )]
    EntropyTooLow { bits: u32, minimum: u32 },

    /// Setup invoked when a key file already exists
    #[error("pwdgen has already been initialized (key file exists at {})", .0.display())]
    AlreadyInitialized(PathBuf),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Key file is present but its contents are unusable
    #[error("Key file error: {0}")]
    KeyFile(String),

    /// Cipher construction or sealing failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Sealed payload too short to contain a nonce
    #[error("Malformed payload: {len} bytes, expected at least {minimum}")]
    MalformedPayload { len: usize, minimum: usize },

    /// Authentication failed while opening a sealed payload
    #[error("Decryption failed: payload was tampered with or sealed under a different key")]
    DecryptionFailed,

    /// No record stored under the given name
    #[error("no entry found for {0}")]
    NotFound(String),

    /// Clipboard delivery failure
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The random source reported a failure
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// The random source kept failing for a single position
    #[error("Random source exhausted after {attempts} attempts")]
    RandomSourceExhausted { attempts: u32 },

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PwdgenError {
    /// Whether this error is a lookup miss rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PwdgenError::NotFound(_))
    }
}
