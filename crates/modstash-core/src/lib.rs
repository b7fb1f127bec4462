//! modstash-core: the stash history and its collaborators.
//!
//! Provides the persistent snapshot stack (`History`), stash home directory
//! resolution (`StashHome`), and the `ClientStore` seam the commands drive.
//!
//! # Quick Start
//!
//! ```no_run
//! use modstash_core::{History, Snapshot, StashHome};
//!
//! fn main() -> modstash_core::Result<()> {
//!     let home = StashHome::resolve(None)?;
//!     let mut history = History::open(home.stash_log())?;
//!
//!     history.push(Snapshot::new("prod-east", "admin/billing"))?;
//!     let restored = history.pop()?;
//!     println!("back to {}", restored.model_name);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod history;
pub mod home;
pub mod snapshot;

// Re-export commonly used types
pub use client::ClientStore;
pub use error::{Result, StashError};
pub use history::History;
pub use home::{HOME_ENV_VAR, StashHome};
pub use snapshot::{Snapshot, is_valid_controller_name, is_valid_model_name};
