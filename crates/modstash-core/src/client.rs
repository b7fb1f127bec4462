//! Client-store abstraction the commands operate against.

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Access to the live controller/model pointers that push and pop move.
///
/// The CLI supplies a file-backed implementation; tests supply in-memory
/// fakes. Setting a model on a controller never changes which controller
/// is current.
pub trait ClientStore {
    /// Name of the controller the client currently points at.
    fn current_controller(&self) -> Result<String>;

    /// Current model on `controller`.
    fn current_model(&self, controller: &str) -> Result<String>;

    /// Point `controller` at `model` and persist the change.
    fn set_current_model(&mut self, controller: &str, model: &str) -> Result<()>;

    /// Expand `name` to its qualified `user/name` form on `controller`.
    ///
    /// Already-qualified names are validated and passed through.
    fn qualify_model_name(&self, controller: &str, name: &str) -> Result<String>;

    /// The controller/model pair the client currently points at.
    fn current_context(&self) -> Result<Snapshot> {
        let controller = self.current_controller()?;
        let model = self.current_model(&controller)?;
        Ok(Snapshot::new(&controller, &model))
    }
}
