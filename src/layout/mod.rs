//! Layout module: a declarative algebra for positioning nodes.
//!
//! A layout is a small tree of constraint nodes built fresh every
//! frame (typically inside a scene's `advance`), applied once, and
//! dropped. Each constraint computes concrete rectangles from the
//! space its parent hands down; [`Place`] leaves write the results
//! into scene nodes or hand them to callbacks.
//!
//! ```ignore
//! let (w, h) = self.frame().size();
//! Margin::new(
//!     Vertical::new(1)
//!         .child(Place::with_min(&mut self.title, 0, 3))
//!         .child(Place::node(&mut self.body)),
//!     Insets::all(1),
//! )
//! .apply_sized(w, h);
//! ```

mod anchor;
mod margin;
mod place;
mod stack;

pub use anchor::{Anchor, Extent};
pub use margin::{Insets, Margin, SoftMargin};
pub use place::Place;
pub use stack::{Layers, Vertical};

/// A constraint node in a layout tree.
///
/// Layouts are pure functions of the rectangle they are given: no
/// state is retained across frames beyond the construction parameters.
/// Parents should respect a child's [`min_size`](Layout::min_size) by
/// giving it at least that much space when possible.
pub trait Layout {
    /// The minimum extent this layout needs to show its contents.
    fn min_size(&self) -> (i32, i32);

    /// Resolve this layout within the given rectangle, recursing into
    /// children and ultimately writing placements through the
    /// [`Place`] leaves.
    fn apply(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Apply at the origin with the given extent. Convenience for the
    /// common case of laying out a node's children inside itself.
    fn apply_sized(&mut self, width: i32, height: i32) {
        self.apply(0, 0, width, height);
    }
}
