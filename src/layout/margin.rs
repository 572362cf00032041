//! Margin and SoftMargin: fixed and shrinkable insets around a child.

use super::Layout;

/// Per-side insets in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    /// Left inset.
    pub left: i32,
    /// Top inset.
    pub top: i32,
    /// Right inset.
    pub right: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl Insets {
    /// Explicit insets for each side.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on all four sides.
    pub const fn all(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Horizontal inset for left/right, vertical inset for top/bottom.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Fixed insets between a parent rectangle and a child layout.
///
/// ```text
/// +---------------------------------------------------------+
/// |                     :                                   |
/// |                     :inset top                          |
/// |                     :                                   |
/// |                 +--------------------+                  |
/// |   inset left    |Child               |   inset right    |
/// |·················|                    |··················|
/// |                 |                    |                  |
/// |                 +--------------------+                  |
/// |                     :                                   |
/// |                     :inset bottom                       |
/// |                     :                                   |
/// +---------------------------------------------------------+
/// ```
///
/// The insets are always reserved; when the parent is too small the
/// child's extent clamps at zero.
#[derive(Debug)]
pub struct Margin<L> {
    child: L,
    insets: Insets,
}

impl<L: Layout> Margin<L> {
    /// Inset `child` by the given amounts.
    pub const fn new(child: L, insets: Insets) -> Self {
        Self { child, insets }
    }
}

impl<L: Layout> Layout for Margin<L> {
    fn min_size(&self) -> (i32, i32) {
        let (w, h) = self.child.min_size();
        (w + self.insets.horizontal(), h + self.insets.vertical())
    }

    fn apply(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.child.apply(
            x + self.insets.left,
            y + self.insets.top,
            (width - self.insets.horizontal()).max(0),
            (height - self.insets.vertical()).max(0),
        );
    }
}

/// Insets that give way when space runs short.
///
/// As long as the parent has enough spare room beyond the child's
/// minimum size, this behaves exactly like [`Margin`]. When it does
/// not, the spare room along that axis is split between the two sides
/// proportionally to the requested insets, so the child keeps its
/// minimum extent for as long as possible.
///
/// Unlike [`Margin`], the insets are not reserved in `min_size`.
#[derive(Debug)]
pub struct SoftMargin<L> {
    child: L,
    insets: Insets,
}

impl<L: Layout> SoftMargin<L> {
    /// Inset `child` by up to the given amounts.
    pub const fn new(child: L, insets: Insets) -> Self {
        Self { child, insets }
    }

    /// Split `spare` cells between two sides asking for `lead` and
    /// `trail`. The lead side gets the floor of its proportional
    /// share, the trail side the exact remainder.
    fn split(spare: i32, lead: i32, trail: i32) -> (i32, i32) {
        if lead + trail == 0 || spare >= lead + trail {
            (lead, trail)
        } else {
            let lead_actual = (spare * lead).div_euclid(lead + trail);
            (lead_actual, spare - lead_actual)
        }
    }
}

impl<L: Layout> Layout for SoftMargin<L> {
    fn min_size(&self) -> (i32, i32) {
        self.child.min_size()
    }

    fn apply(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (min_w, min_h) = self.child.min_size();
        let (left, right) = Self::split(width - min_w, self.insets.left, self.insets.right);
        let (top, bottom) = Self::split(height - min_h, self.insets.top, self.insets.bottom);
        self.child.apply(
            x + left,
            y + top,
            width - left - right,
            height - top - bottom,
        );
    }
}
