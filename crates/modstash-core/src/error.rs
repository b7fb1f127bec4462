//! Error type shared across the modstash crates.

use std::io;
use std::path::PathBuf;

/// Result alias used throughout modstash.
pub type Result<T> = std::result::Result<T, StashError>;

/// Errors from history, session, and home-directory operations.
///
/// I/O failures always carry the path they happened on. `EmptyHistory` is
/// the one user-facing condition `pop` produces on an empty stash.
#[derive(Debug, thiserror::Error)]
pub enum StashError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("nothing to pop")]
    EmptyHistory,

    #[error("home directory not found")]
    HomeNotFound,

    #[error("no current controller")]
    NoCurrentController,

    #[error("no current model on controller '{0}'")]
    NoCurrentModel(String),

    #[error("unknown controller '{0}'")]
    UnknownController(String),

    #[error("invalid controller name '{0}'")]
    InvalidControllerName(String),

    #[error("invalid model name '{0}'")]
    InvalidModelName(String),

    #[error("{}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}

impl StashError {
    /// Attach the path a failed file operation was working on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StashError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_message() {
        assert_eq!(StashError::EmptyHistory.to_string(), "nothing to pop");
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = StashError::io(
            "/tmp/stash.log",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/stash.log"), "message was: {}", msg);
        assert!(msg.contains("denied"), "message was: {}", msg);
    }

    #[test]
    fn test_name_errors_quote_the_name() {
        let err = StashError::InvalidModelName("bad name".to_string());
        assert_eq!(err.to_string(), "invalid model name 'bad name'");
        let err = StashError::UnknownController("nope".to_string());
        assert_eq!(err.to_string(), "unknown controller 'nope'");
    }
}
