//! Stash home directory resolution and layout.
//!
//! Everything modstash persists lives in one directory:
//! - `stash.log`: the history backing file
//! - `session.json`: current controller and per-controller models
//! - `config.toml`: optional CLI configuration

use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::home_dir;

use crate::error::{Result, StashError};

/// Environment variable overriding the default `~/.modstash` directory.
pub const HOME_ENV_VAR: &str = "MODSTASH_HOME";

/// The stash home directory and the files inside it.
#[derive(Debug, Clone)]
pub struct StashHome {
    dir: PathBuf,
}

impl StashHome {
    /// Resolve the stash home, creating the directory if needed.
    ///
    /// Precedence:
    /// 1. `home_override` parameter (from the --home CLI flag)
    /// 2. `MODSTASH_HOME` environment variable
    /// 3. `~/.modstash` default
    pub fn resolve(home_override: Option<PathBuf>) -> Result<Self> {
        let dir = if let Some(path) = home_override {
            path
        } else if let Ok(stash_home) = std::env::var(HOME_ENV_VAR) {
            PathBuf::from(stash_home)
        } else {
            let home = home_dir().ok_or(StashError::HomeNotFound)?;
            home.join(".modstash")
        };
        fs::create_dir_all(&dir).map_err(|e| StashError::io(&dir, e))?;
        Ok(StashHome { dir })
    }

    /// Use `dir` directly as the stash home (for testing).
    pub fn from_dir(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).map_err(|e| StashError::io(&dir, e))?;
        Ok(StashHome { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the history backing file.
    pub fn stash_log(&self) -> PathBuf {
        self.dir.join("stash.log")
    }

    /// Path of the session file.
    pub fn session_file(&self) -> PathBuf {
        self.dir.join("session.json")
    }

    /// Path of the CLI config file.
    pub fn config_file(&self) -> PathBuf {
        self.dir.join("config.toml")
    }
}
