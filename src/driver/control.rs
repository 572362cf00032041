//! DriverControl: scene-change requests across the tick boundary.

use crate::node::Scene;
use std::cell::RefCell;
use std::rc::Rc;

/// `Some(scene)` loads, `None` exits.
pub(crate) type SceneRequest = Option<Box<dyn Scene>>;

/// A cloneable handle through which scenes (and embedding code)
/// request scene changes from the driver.
///
/// Requests never take effect synchronously: the driver applies the
/// most recent one at the top of the next tick, so a change requested
/// mid-frame cannot corrupt the traversal in progress. The handle is
/// single-threaded, like the loop it controls.
#[derive(Clone, Default)]
pub struct DriverControl {
    request: Rc<RefCell<Option<SceneRequest>>>,
}

impl DriverControl {
    /// Request that `scene` become the active scene at the next tick
    /// boundary.
    pub fn load_scene(&self, scene: impl Scene + 'static) {
        *self.request.borrow_mut() = Some(Some(Box::new(scene)));
    }

    /// Request that the presentation loop terminate at the next tick
    /// boundary. Equivalent to loading no scene.
    pub fn exit(&self) {
        *self.request.borrow_mut() = Some(None);
    }

    /// Take the pending request, if any. Called by the driver once per
    /// tick.
    pub(crate) fn take_request(&self) -> Option<SceneRequest> {
        self.request.borrow_mut().take()
    }
}

impl std::fmt::Debug for DriverControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverControl")
            .field("pending", &self.request.borrow().is_some())
            .finish()
    }
}
