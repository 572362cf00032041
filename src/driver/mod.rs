//! Driver module: the tick loop that owns the active scene.
//!
//! Each tick: apply a pending scene change, pace to the frame budget,
//! poll event sources and route their events through the tree, update
//! every node with the elapsed time, pick up physical resizes, then
//! render depth-first and present the composed frame.

mod control;
mod engine;

pub use control::DriverControl;
pub use engine::{Driver, DriverConfig};
