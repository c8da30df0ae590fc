//! On-disk locations.
//!
//! Everything pwdgen persists lives in one data directory, by default
//! `<home>/.local/share/pwdgen`.

use std::path::{Path, PathBuf};

use crate::error::{PwdgenError, Result};

/// File name of the hex-encoded key.
pub const KEY_FILE_NAME: &str = "pwdgen.key";

/// File name of the SQLite record store.
pub const STORE_FILE_NAME: &str = "pwdgen.db";

/// Resolved locations of the key file and record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    dir: PathBuf,
}

impl DataPaths {
    /// Use `dir` as the data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The default data directory under `home`.
    pub fn under_home(home: &Path) -> Self {
        Self::new(home.join(".local").join("share").join("pwdgen"))
    }

    /// The default data directory under the current user's home.
    pub fn from_home() -> Result<Self> {
        Ok(Self::under_home(&home_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn key_file(&self) -> PathBuf {
        self.dir.join(KEY_FILE_NAME)
    }

    pub fn store_file(&self) -> PathBuf {
        self.dir.join(STORE_FILE_NAME)
    }
}

/// The current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            PwdgenError::InvalidInput("HOME is not set; cannot resolve default paths".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let paths = DataPaths::under_home(Path::new("/home/alex"));
        assert_eq!(paths.dir(), Path::new("/home/alex/.local/share/pwdgen"));
        assert_eq!(
            paths.key_file(),
            PathBuf::from("/home/alex/.local/share/pwdgen/pwdgen.key")
        );
        assert_eq!(
            paths.store_file(),
            PathBuf::from("/home/alex/.local/share/pwdgen/pwdgen.db")
        );
    }

    #[test]
    fn test_custom_dir() {
        let paths = DataPaths::new("/tmp/pw");
        assert_eq!(paths.key_file(), PathBuf::from("/tmp/pw/pwdgen.key"));
    }
}
