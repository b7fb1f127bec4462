// session.rs: file-backed client session (current controller and models)
//
// This is the state that push and pop actually move: which controller the
// client points at, and the current model on each controller. The stash
// history itself lives in modstash-core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use modstash_core::{ClientStore, Result, StashError, is_valid_controller_name, is_valid_model_name};

/// Per-controller session data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerSession {
    /// User the controller is logged in as; bare model names qualify
    /// against this.
    pub user: String,
    #[serde(default)]
    pub current_model: Option<String>,
}

/// Session state persisted between invocations.
///
/// Stored in `~/.modstash/session.json`. A missing file is an empty
/// session; a malformed one is a hard error, unlike the tolerant stash
/// history parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub current_controller: Option<String>,
    #[serde(default)]
    pub controllers: BTreeMap<String, ControllerSession>,
}

impl Session {
    /// Load the session from `path`. Returns an empty session if the file
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| StashError::io(path, e))?;
            serde_json::from_str(&content).map_err(|e| StashError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Save the session to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StashError::io(path, io::Error::new(io::ErrorKind::InvalidData, e)))?;
        fs::write(path, content).map_err(|e| StashError::io(path, e))
    }
}

/// File-backed [`ClientStore`] over `session.json`.
///
/// Mutations save the file immediately, so every invocation starts from
/// what the previous one left behind.
pub struct SessionStore {
    path: PathBuf,
    session: Session,
}

impl SessionStore {
    pub fn load(path: PathBuf) -> Result<Self> {
        let session = Session::load(&path)?;
        Ok(SessionStore { path, session })
    }
}

impl ClientStore for SessionStore {
    fn current_controller(&self) -> Result<String> {
        match &self.session.current_controller {
            Some(name) => Ok(name.clone()),
            None => Err(StashError::NoCurrentController),
        }
    }

    fn current_model(&self, controller: &str) -> Result<String> {
        let entry = self
            .session
            .controllers
            .get(controller)
            .ok_or_else(|| StashError::UnknownController(controller.to_string()))?;
        match &entry.current_model {
            Some(model) => Ok(model.clone()),
            None => Err(StashError::NoCurrentModel(controller.to_string())),
        }
    }

    fn set_current_model(&mut self, controller: &str, model: &str) -> Result<()> {
        if !is_valid_controller_name(controller) {
            return Err(StashError::InvalidControllerName(controller.to_string()));
        }
        if !is_valid_model_name(model) {
            return Err(StashError::InvalidModelName(model.to_string()));
        }
        let entry = self
            .session
            .controllers
            .get_mut(controller)
            .ok_or_else(|| StashError::UnknownController(controller.to_string()))?;
        entry.current_model = Some(model.to_string());
        self.session.save(&self.path)
    }

    fn qualify_model_name(&self, controller: &str, name: &str) -> Result<String> {
        let entry = self
            .session
            .controllers
            .get(controller)
            .ok_or_else(|| StashError::UnknownController(controller.to_string()))?;
        if !is_valid_model_name(name) {
            return Err(StashError::InvalidModelName(name.to_string()));
        }
        match name.split_once('/') {
            Some(_) => Ok(name.to_string()),
            None => Ok(format!("{}/{}", entry.user, name)),
        }
    }
}
