//! Node module: the presentable object tree.
//!
//! A [`Node`] is one element of the scene tree: it has geometry (a
//! [`Frame`]), owns its children exclusively, and is driven through
//! the per-tick event/update/render walks. A [`Scene`] is the
//! distinguished root node with enter/leave lifecycle hooks.

mod frame;

pub use frame::Frame;

use crate::driver::DriverControl;
use crate::events::{Event, Propagation};
use crate::surface::Surface;
use std::io;

/// A presentable object in the scene tree.
///
/// Parents exclusively own their children; there are no back-edges
/// from child to parent. Nodes draw only into the surface they are
/// handed, which is sized exactly to their own extent; they have no
/// knowledge of their absolute screen position.
pub trait Node {
    /// The node's geometry and render bookkeeping.
    fn frame(&self) -> &Frame;

    /// Mutable access to the node's geometry and render bookkeeping.
    fn frame_mut(&mut self) -> &mut Frame;

    /// The node's current children, in order. Leaf nodes keep the
    /// default empty list.
    fn children_mut(&mut self) -> Vec<&mut dyn Node> {
        Vec::new()
    }

    /// Handle an event and decide how it propagates to the children.
    ///
    /// The default swallows the event ([`Propagation::None`]).
    fn process_event(&mut self, _event: &Event) -> Propagation {
        Propagation::None
    }

    /// Advance the node's state by `dt` seconds. Called once per tick
    /// on every node, parent before children. Layout, if the node uses
    /// one, is applied from here.
    fn advance(&mut self, _dt: f64) {}

    /// Draw the node into its surface.
    ///
    /// The surface is guaranteed to match the node's current size. A
    /// returned error counts toward the driver's transient-fault
    /// tolerance for this tick.
    fn render(&mut self, surface: &mut Surface) -> io::Result<()>;
}

/// The root of the scene tree.
///
/// Exactly one scene is active at a time, owned by the driver.
pub trait Scene: Node {
    /// Called when this scene becomes the active one. The control
    /// handle can be kept to request a scene change or exit later.
    fn on_enter(&mut self, control: DriverControl);

    /// Called when the scene stops being active: another scene was
    /// loaded, or the presentation loop is shutting down. Resources
    /// the scene privately started (background discovery, audio) must
    /// be released here; the driver does not do it on the scene's
    /// behalf.
    fn on_leave(&mut self);
}
