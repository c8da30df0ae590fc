//! Application context for the pwdgen CLI.
//!
//! Combines CLI arguments with lazily-loaded configuration.

use anyhow::Context;
use once_cell::unsync::OnceCell;

use pwdgen_core::clipboard::CommandClipboard;
use pwdgen_core::crypto::{EncryptionKey, KeyManager};
use pwdgen_core::paths::DataPaths;
use pwdgen_core::storage::SqliteStore;

use crate::cli::Cli;
use crate::config::{read_config, resolve_config_path, PwdgenConfig};
use crate::ui::UiContext;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<PwdgenConfig>,
    ui: UiContext,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            ui: UiContext::from_env(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&PwdgenConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            tracing::debug!(path = %path.display(), "loading config");
            read_config(&path)
        })
    }

    /// Data directory from `--data-dir`, then the config, then the default.
    pub fn data_paths(&self) -> anyhow::Result<DataPaths> {
        if let Some(dir) = &self.cli.data_dir {
            return Ok(DataPaths::new(dir.clone()));
        }
        if let Some(dir) = &self.config()?.storage.data_dir {
            return Ok(DataPaths::new(dir.clone()));
        }
        Ok(DataPaths::from_home()?)
    }

    /// Length used by `gen` when none is given.
    pub fn default_length(&self) -> anyhow::Result<usize> {
        Ok(self.config()?.generator.default_length)
    }

    /// Load the key file, failing with a hint if `init` never ran.
    pub fn load_key(&self, paths: &DataPaths) -> anyhow::Result<EncryptionKey> {
        let manager = KeyManager::new(paths.key_file());
        if !manager.exists() {
            return Err(not_initialized(paths));
        }
        manager
            .load()
            .with_context(|| format!("Failed to load key {}", manager.path().display()))
    }

    /// Open the record store created by `init`.
    pub fn open_store(&self, paths: &DataPaths) -> anyhow::Result<SqliteStore> {
        let path = paths.store_file();
        if !path.exists() {
            return Err(not_initialized(paths));
        }
        SqliteStore::open_existing(&path)
            .with_context(|| format!("Failed to open store {}", path.display()))
    }

    /// The configured clipboard command, or the platform default.
    pub fn clipboard(&self) -> anyhow::Result<CommandClipboard> {
        let clipboard = match self.config()?.clipboard.command.as_deref() {
            Some(argv) => CommandClipboard::from_argv(argv)?,
            None => CommandClipboard::detect()?,
        };
        tracing::debug!(program = clipboard.program(), "using clipboard command");
        Ok(clipboard)
    }
}

fn not_initialized(paths: &DataPaths) -> anyhow::Error {
    anyhow::anyhow!(
        "pwdgen is not initialized in {}; run `pwdgen init` first",
        paths.dir().display()
    )
}
