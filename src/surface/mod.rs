//! Surface module: the cell grid nodes render into.
//!
//! A [`Surface`] is an offscreen grid of styled characters. The driver
//! keeps one per node, sized to the node, and composites it into the
//! parent's screen region each frame.

mod cell;
mod grid;

pub use cell::{Attrs, Cell, Rgb, Style};
pub use grid::Surface;
