//! Generate, retrieve, and initialize flows.
//!
//! Every operation takes its collaborators explicitly: the record store,
//! the loaded key, and the clipboard transport. Nothing here reads ambient
//! state, so tests drive the same code with in-memory doubles.

use std::fs;

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::clipboard::ClipboardTransport;
use crate::crypto::{EncryptionKey, KeyManager, SealingCipher};
use crate::error::{PwdgenError, Result};
use crate::password;
use crate::paths::DataPaths;
use crate::storage::{PutOutcome, RecordStore, SqliteStore};

/// First-time setup: data directory, key file, and record store schema.
///
/// # Errors
///
/// Returns `PwdgenError::AlreadyInitialized` if a key file exists; the key
/// and the store are left untouched in that case. The store schema is
/// created before the key is written, so a failed store leaves no key
/// behind and `initialize` can simply be run again.
pub fn initialize(paths: &DataPaths) -> Result<()> {
    let keys = KeyManager::new(paths.key_file());
    if keys.exists() {
        return Err(PwdgenError::AlreadyInitialized(keys.path().to_path_buf()));
    }

    create_private_dir(paths)?;

    let store_path = paths.store_file();
    if store_path.exists() {
        tracing::warn!(
            path = %store_path.display(),
            "record store already exists; records sealed under an earlier key cannot be opened"
        );
    }
    SqliteStore::open(&store_path)?;

    keys.setup()?;

    tracing::debug!(dir = %paths.dir().display(), "initialized data directory");
    Ok(())
}

/// Generate a password, seal it under `key`, copy it, and store it as `name`.
///
/// Writing an existing name replaces its record; the outcome says which.
/// The record is only written once the copy succeeded, so a clipboard
/// failure leaves any existing record intact. The password itself is only
/// ever handed to `clipboard`.
pub fn generate_password<S, C>(
    store: &mut S,
    key: &EncryptionKey,
    clipboard: &C,
    name: &str,
    length: usize,
) -> Result<PutOutcome>
where
    S: RecordStore + ?Sized,
    C: ClipboardTransport + ?Sized,
{
    validate_name(name)?;

    let secret = password::generate(length)?;
    let sealed = SealingCipher::new(key)?.seal(secret.expose_secret().as_bytes())?;
    clipboard.copy(&secret)?;

    store.put(name, &sealed)
}

/// Open the record stored as `name` and copy its plaintext.
///
/// # Errors
///
/// Returns `PwdgenError::NotFound` if nothing is stored under `name`.
pub fn retrieve_password<S, C>(
    store: &S,
    key: &EncryptionKey,
    clipboard: &C,
    name: &str,
) -> Result<()>
where
    S: RecordStore + ?Sized,
    C: ClipboardTransport + ?Sized,
{
    validate_name(name)?;

    let sealed = store
        .get(name)?
        .ok_or_else(|| PwdgenError::NotFound(name.to_string()))?;
    let opened = Zeroizing::new(SealingCipher::new(key)?.open(&sealed)?);
    let text = std::str::from_utf8(&opened)
        .map_err(|_| PwdgenError::Crypto("Stored password is not valid UTF-8".to_string()))?;

    clipboard.copy(&SecretString::from(text))
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PwdgenError::InvalidInput(
            "name argument must be provided".to_string(),
        ));
    }
    Ok(())
}

fn create_private_dir(paths: &DataPaths) -> Result<()> {
    let dir = paths.dir();
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::NONCE_LEN;
    use crate::password::ALPHABET;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl RecordingClipboard {
        fn last(&self) -> Option<String> {
            self.copied.borrow().last().cloned()
        }
    }

    impl ClipboardTransport for RecordingClipboard {
        fn copy(&self, secret: &SecretString) -> Result<()> {
            self.copied
                .borrow_mut()
                .push(secret.expose_secret().to_string());
            Ok(())
        }
    }

    struct FailingClipboard;

    impl ClipboardTransport for FailingClipboard {
        fn copy(&self, _secret: &SecretString) -> Result<()> {
            Err(PwdgenError::Clipboard("no display".to_string()))
        }
    }

    fn test_key() -> EncryptionKey {
        EncryptionKey::from_bytes([3u8; 32])
    }

    #[test]
    fn test_generate_then_retrieve() {
        let mut store = MemoryStore::new();
        let key = test_key();
        let clipboard = RecordingClipboard::default();

        let outcome = generate_password(&mut store, &key, &clipboard, "github", 25).unwrap();
        assert_eq!(outcome, PutOutcome::Created);

        let generated = clipboard.last().unwrap();
        assert_eq!(generated.len(), 25);
        assert!(generated.bytes().all(|b| ALPHABET.contains(&b)));

        retrieve_password(&store, &key, &clipboard, "github").unwrap();
        assert_eq!(clipboard.last().unwrap(), generated);
    }

    #[test]
    fn test_store_never_sees_plaintext() {
        let mut store = MemoryStore::new();
        let clipboard = RecordingClipboard::default();

        generate_password(&mut store, &test_key(), &clipboard, "mail", 30).unwrap();

        let generated = clipboard.last().unwrap();
        let sealed = store.get("mail").unwrap().unwrap();
        assert!(sealed.len() > NONCE_LEN + generated.len());
        assert!(!sealed
            .windows(generated.len())
            .any(|w| w == generated.as_bytes()));
    }

    #[test]
    fn test_generate_overwrites_existing_name() {
        let mut store = MemoryStore::new();
        let key = test_key();
        let clipboard = RecordingClipboard::default();

        generate_password(&mut store, &key, &clipboard, "bank", 25).unwrap();
        let outcome = generate_password(&mut store, &key, &clipboard, "bank", 40).unwrap();
        assert!(outcome.replaced());

        let latest = clipboard.last().unwrap();
        retrieve_password(&store, &key, &clipboard, "bank").unwrap();
        assert_eq!(clipboard.last().unwrap(), latest);
        assert_eq!(latest.len(), 40);
    }

    #[test]
    fn test_low_entropy_stores_nothing() {
        let mut store = MemoryStore::new();
        let clipboard = RecordingClipboard::default();

        let err = generate_password(&mut store, &test_key(), &clipboard, "short", 1).unwrap_err();

        assert!(matches!(err, PwdgenError::EntropyTooLow { .. }));
        assert!(store.is_empty());
        assert!(clipboard.last().is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut store = MemoryStore::new();
        let clipboard = RecordingClipboard::default();

        let err = generate_password(&mut store, &test_key(), &clipboard, " ", 25).unwrap_err();
        assert!(matches!(err, PwdgenError::InvalidInput(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_retrieve_missing_is_not_found() {
        let store = MemoryStore::new();
        let clipboard = RecordingClipboard::default();

        let err = retrieve_password(&store, &test_key(), &clipboard, "nope").unwrap_err();
        assert!(err.is_not_found());
        assert!(clipboard.last().is_none());
    }

    #[test]
    fn test_retrieve_with_wrong_key_copies_nothing() {
        let mut store = MemoryStore::new();
        let clipboard = RecordingClipboard::default();
        generate_password(&mut store, &test_key(), &clipboard, "vpn", 25).unwrap();

        let other = RecordingClipboard::default();
        let wrong = EncryptionKey::from_bytes([4u8; 32]);
        let err = retrieve_password(&store, &wrong, &other, "vpn").unwrap_err();

        assert!(matches!(err, PwdgenError::DecryptionFailed));
        assert!(other.last().is_none());
    }

    #[test]
    fn test_clipboard_failure_keeps_existing_record() {
        let mut store = MemoryStore::new();
        let key = test_key();
        let clipboard = RecordingClipboard::default();
        generate_password(&mut store, &key, &clipboard, "bank", 25).unwrap();
        let original = clipboard.last().unwrap();

        let err = generate_password(&mut store, &key, &FailingClipboard, "bank", 40).unwrap_err();
        assert!(matches!(err, PwdgenError::Clipboard(_)));

        retrieve_password(&store, &key, &clipboard, "bank").unwrap();
        assert_eq!(clipboard.last().unwrap(), original);
    }

    #[test]
    fn test_clipboard_failure_propagates() {
        let mut store = MemoryStore::new();
        let err =
            generate_password(&mut store, &test_key(), &FailingClipboard, "x", 25).unwrap_err();
        assert!(matches!(err, PwdgenError::Clipboard(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_initialize_twice() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().join("nested").join("pwdgen"));

        initialize(&paths).unwrap();
        assert!(paths.key_file().exists());
        assert!(paths.store_file().exists());
        let key_before = fs::read(paths.key_file()).unwrap();

        let err = initialize(&paths).unwrap_err();
        assert!(matches!(err, PwdgenError::AlreadyInitialized(_)));
        assert_eq!(fs::read(paths.key_file()).unwrap(), key_before);
    }

    #[test]
    fn test_failed_store_leaves_no_key() {
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().join("pwdgen"));
        fs::create_dir_all(paths.store_file()).unwrap();

        assert!(initialize(&paths).is_err());
        assert!(!paths.key_file().exists());

        fs::remove_dir(paths.store_file()).unwrap();
        initialize(&paths).unwrap();
        assert!(paths.key_file().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_initialize_creates_private_dir() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().join("pwdgen"));
        initialize(&paths).unwrap();

        let mode = fs::metadata(paths.dir()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
