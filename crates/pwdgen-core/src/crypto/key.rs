//! Encryption key lifecycle.
//!
//! The key is 32 random bytes, persisted once as 64 lowercase hex
//! characters in a file readable and writable only by its owner. It is
//! loaded (never mutated) for every encrypt/decrypt and never regenerated
//! implicitly.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::{PwdgenError, Result};

/// Length of the symmetric key in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// A symmetric encryption key.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct EncryptionKey {
    key: [u8; KEY_LENGTH],
}

impl EncryptionKey {
    /// Wrap raw key bytes.
    ///
    /// # Security
    ///
    /// The caller is responsible for ensuring the bytes come from a secure source.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Generate a fresh key from the OS random source.
    pub fn generate() -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; KEY_LENGTH]);
        getrandom::getrandom(&mut bytes[..])
            .map_err(|e| PwdgenError::RandomSource(format!("Failed to generate key: {}", e)))?;
        Ok(Self::from_bytes(*bytes))
    }

    /// Decode a key from its hex file representation.
    ///
    /// Surrounding whitespace (a trailing newline from a hand edit) is ignored;
    /// anything else that is not exactly 64 hex characters is rejected.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let decoded = Zeroizing::new(
            hex::decode(encoded.trim())
                .map_err(|e| PwdgenError::KeyFile(format!("Key is not valid hex: {}", e)))?,
        );
        let bytes: [u8; KEY_LENGTH] = decoded.as_slice().try_into().map_err(|_| {
            PwdgenError::KeyFile(format!(
                "Key must be {} bytes, found {}",
                KEY_LENGTH,
                decoded.len()
            ))
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Hex encoding used for the key file.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.key))
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Creates and loads the installation's single key file.
#[derive(Debug, Clone)]
pub struct KeyManager {
    path: PathBuf,
}

impl KeyManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Generate and persist a new key.
    ///
    /// # Errors
    ///
    /// - `PwdgenError::AlreadyInitialized` if a key file already exists; the
    ///   existing file is left untouched.
    /// - `PwdgenError::Io` if the existence check fails for any reason other
    ///   than the file being absent, or if writing fails.
    pub fn setup(&self) -> Result<()> {
        match fs::symlink_metadata(&self.path) {
            Ok(_) => return Err(PwdgenError::AlreadyInitialized(self.path.clone())),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        let key = EncryptionKey::generate()?;
        let encoded = key.to_hex();

        // create_new refuses to clobber a file created since the check above.
        let mut file = match open_owner_only(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(PwdgenError::AlreadyInitialized(self.path.clone()))
            }
            Err(err) => return Err(err.into()),
        };
        finish_key_file(&self.path, file, |file| {
            file.write_all(encoded.as_bytes())?;
            file.sync_all()?;
            set_owner_only(&self.path)
        })?;

        tracing::debug!(path = %self.path.display(), "wrote new key file");
        Ok(())
    }

    /// Read and decode the key file.
    ///
    /// # Errors
    ///
    /// A missing file is `PwdgenError::Io` (no key is ever created here);
    /// undecodable contents are `PwdgenError::KeyFile`.
    pub fn load(&self) -> Result<EncryptionKey> {
        let contents = Zeroizing::new(fs::read_to_string(&self.path)?);
        EncryptionKey::from_hex(&contents)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn open_owner_only(path: &Path) -> std::io::Result<fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

/// Run `write` against a freshly created key file, removing the file if
/// any step fails so a partial key never blocks a later setup.
fn finish_key_file<F>(path: &Path, mut file: fs::File, write: F) -> Result<()>
where
    F: FnOnce(&mut fs::File) -> Result<()>,
{
    let result = write(&mut file);
    drop(file);

    if result.is_err() {
        if let Err(err) = fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "could not remove partial key file"
            );
        }
    }
    result
}

fn set_owner_only(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
