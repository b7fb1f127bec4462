//! CLI configuration from `config.toml`.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use modstash_core::{Result, StashError};

/// Optional settings from `~/.modstash/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Command run after a successful switch when --status is given.
    /// Split shell-style, e.g. `status_command = "fleet status"`.
    #[serde(default)]
    pub status_command: Option<String>,
}

impl Config {
    /// Load the config from `path`. Returns defaults if the file doesn't
    /// exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| StashError::io(path, e))?;
            toml::from_str(&content).map_err(|e| StashError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("config.toml")).unwrap();
        assert!(config.status_command.is_none());
    }

    #[test]
    fn test_load_status_command() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "status_command = \"fleet status\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.status_command.as_deref(), Some("fleet status"));
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.status_command.is_none());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "status_command = [not toml").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, StashError::Malformed { .. }));
    }

    #[test]
    fn test_unknown_keys_tolerated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "some_future_key = 1\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.status_command.is_none());
    }
}
