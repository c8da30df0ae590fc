use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pwdgen_core::password::DEFAULT_LENGTH;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PwdgenConfig {
    pub generator: GeneratorSection,
    pub storage: StorageSection,
    pub clipboard: ClipboardSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    pub default_length: usize,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageSection {
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardSection {
    /// Program and arguments that receive the password on stdin.
    pub command: Option<Vec<String>>,
}

pub fn parse_config(contents: &str) -> anyhow::Result<PwdgenConfig> {
    toml::from_str(contents).map_err(|e| anyhow::anyhow!("TOML error: {}", e))
}

/// Read the config at `path`; a missing file yields the defaults.
pub fn read_config(path: &Path) -> anyhow::Result<PwdgenConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(PwdgenConfig::default());
        }
        Err(e) => {
            return Err(anyhow::anyhow!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        }
    };
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Resolve the config file path, checking `PWDGEN_CONFIG` first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    config_path_from(
        std::env::var("PWDGEN_CONFIG").ok().as_deref(),
        std::env::var("XDG_CONFIG_HOME").ok().as_deref(),
        || Ok(pwdgen_core::paths::home_dir()?),
    )
}

fn config_path_from(
    explicit: Option<&str>,
    xdg_config_home: Option<&str>,
    home: impl FnOnce() -> anyhow::Result<PathBuf>,
) -> anyhow::Result<PathBuf> {
    if let Some(value) = explicit.filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(value));
    }
    let base = match xdg_config_home.filter(|v| !v.trim().is_empty()) {
        Some(value) => PathBuf::from(value),
        None => home()?.join(".config"),
    };
    Ok(base.join("pwdgen").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_home() -> anyhow::Result<PathBuf> {
        Err(anyhow::anyhow!("no home"))
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.generator.default_length, 25);
        assert!(config.storage.data_dir.is_none());
        assert!(config.clipboard.command.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            [generator]
            default_length = 32

            [storage]
            data_dir = "/srv/pwdgen"

            [clipboard]
            command = ["wl-copy", "--paste-once"]
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.default_length, 32);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/srv/pwdgen")));
        assert_eq!(
            config.clipboard.command,
            Some(vec!["wl-copy".to_string(), "--paste-once".to_string()])
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_config("[generator]\nlenght = 30\n").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = read_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.generator.default_length, DEFAULT_LENGTH);
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generator\n").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = config_path_from(Some("/tmp/custom.toml"), Some("/xdg"), no_home).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_xdg_config_home() {
        let path = config_path_from(None, Some("/xdg"), no_home).unwrap();
        assert_eq!(path, PathBuf::from("/xdg/pwdgen/config.toml"));
    }

    #[test]
    fn test_home_fallback() {
        let path = config_path_from(Some(" "), Some(""), || Ok(PathBuf::from("/home/u"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/.config/pwdgen/config.toml"));
    }
}
