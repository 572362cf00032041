//! Layers and Vertical: layouts that combine several children.

use super::Layout;

/// Stacks multiple child layouts onto the same rectangle.
///
/// Every child receives the identical space; the minimum size is the
/// component-wise maximum over the children.
#[derive(Default)]
pub struct Layers<'a> {
    children: Vec<Box<dyn Layout + 'a>>,
}

impl<'a> Layers<'a> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Add a layer.
    #[must_use]
    pub fn child(mut self, child: impl Layout + 'a) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Layout for Layers<'_> {
    fn min_size(&self) -> (i32, i32) {
        let mut min_w = 0;
        let mut min_h = 0;
        for child in &self.children {
            let (w, h) = child.min_size();
            min_w = min_w.max(w);
            min_h = min_h.max(h);
        }
        (min_w, min_h)
    }

    fn apply(&mut self, x: i32, y: i32, width: i32, height: i32) {
        for child in &mut self.children {
            child.apply(x, y, width, height);
        }
    }
}

impl std::fmt::Debug for Layers<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layers")
            .field("children", &self.children.len())
            .finish()
    }
}

/// Stacks child layouts top to bottom.
///
/// ```text
/// +---------------------+
/// |Child 0              |
/// +---------------------+
/// |Child 1 (main)       |
/// |                     |
/// |                     |
/// +---------------------+
/// |Child 2              |
/// +---------------------+
/// ```
///
/// Every child spans the full parent width and gets its own minimum
/// height; the one designated `main` child absorbs all leftover
/// vertical space. The leftover may be negative when the parent is
/// shorter than the summed minimums; the main child then receives the
/// negative delta unguarded.
pub struct Vertical<'a> {
    main: usize,
    children: Vec<Box<dyn Layout + 'a>>,
}

impl<'a> Vertical<'a> {
    /// Create a vertical stack whose `main`-th child soaks up the
    /// leftover space.
    pub fn new(main: usize) -> Self {
        Self {
            main,
            children: Vec::new(),
        }
    }

    /// Append a child row.
    #[must_use]
    pub fn child(mut self, child: impl Layout + 'a) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Layout for Vertical<'_> {
    fn min_size(&self) -> (i32, i32) {
        let mut min_w = 0;
        let mut min_h = 0;
        for child in &self.children {
            let (w, h) = child.min_size();
            min_w = min_w.max(w);
            min_h += h;
        }
        (min_w, min_h)
    }

    fn apply(&mut self, x: i32, y: i32, width: i32, height: i32) {
        debug_assert!(self.main < self.children.len(), "main index out of range");
        let (_, min_h) = self.min_size();
        let leftover = height - min_h;

        let mut pos_y = y;
        for (i, child) in self.children.iter_mut().enumerate() {
            let (_, child_min_h) = child.min_size();
            let mut h = child_min_h;
            if i == self.main {
                h += leftover;
            }
            child.apply(x, pos_y, width, h);
            pos_y += h;
        }
    }
}

impl std::fmt::Debug for Vertical<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vertical")
            .field("main", &self.main)
            .field("children", &self.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Place;

    #[test]
    fn test_layers_share_the_rectangle() {
        let mut first = None;
        let mut second = None;
        Layers::new()
            .child(Place::call(|x, y, w, h| first = Some((x, y, w, h))))
            .child(Place::call(|x, y, w, h| second = Some((x, y, w, h))))
            .apply(1, 2, 30, 20);
        assert_eq!(first, Some((1, 2, 30, 20)));
        assert_eq!(second, Some((1, 2, 30, 20)));
    }

    #[test]
    fn test_layers_min_size_is_componentwise_max() {
        let layers = Layers::new()
            .child(Place::call_with_min(|_, _, _, _| {}, 10, 2))
            .child(Place::call_with_min(|_, _, _, _| {}, 4, 8));
        assert_eq!(layers.min_size(), (10, 8));
        assert_eq!(Layers::new().min_size(), (0, 0));
    }

    #[test]
    fn test_vertical_main_absorbs_leftover() {
        let mut rows = vec![None; 3];
        {
            let (top, rest) = rows.split_at_mut(1);
            let (mid, tail) = rest.split_at_mut(1);
            Vertical::new(1)
                .child(Place::call_with_min(|x, y, w, h| top[0] = Some((x, y, w, h)), 0, 3))
                .child(Place::call_with_min(|x, y, w, h| mid[0] = Some((x, y, w, h)), 0, 2))
                .child(Place::call_with_min(|x, y, w, h| tail[0] = Some((x, y, w, h)), 0, 4))
                .apply(0, 0, 40, 20);
        }
        assert_eq!(rows[0], Some((0, 0, 40, 3)));
        assert_eq!(rows[1], Some((0, 3, 40, 13)));
        assert_eq!(rows[2], Some((0, 16, 40, 4)));
    }

    #[test]
    fn test_vertical_heights_sum_to_parent_height() {
        use std::cell::Cell;
        use std::rc::Rc;

        for parent_h in [0, 5, 9, 50] {
            let total = Rc::new(Cell::new(0));
            let mut stack = Vertical::new(1);
            for min_h in [3, 2, 7] {
                let total = total.clone();
                stack = stack.child(Place::call_with_min(
                    move |_, _, _, h| total.set(total.get() + h),
                    0,
                    min_h,
                ));
            }
            stack.apply(0, 0, 10, parent_h);
            assert_eq!(total.get(), parent_h);
        }
    }

    #[test]
    fn test_vertical_negative_leftover_goes_to_main() {
        let mut main_rect = None;
        Vertical::new(0)
            .child(Place::call_with_min(|x, y, w, h| main_rect = Some((x, y, w, h)), 0, 4))
            .child(Place::call_with_min(|_, _, _, _| {}, 0, 6))
            .apply(0, 0, 10, 5);
        // min heights sum to 10, parent is 5: main gets 4 + (5 - 10) = -1
        assert_eq!(main_rect, Some((0, 0, 10, -1)));
    }

    #[test]
    fn test_vertical_min_size() {
        let stack = Vertical::new(0)
            .child(Place::call_with_min(|_, _, _, _| {}, 8, 3))
            .child(Place::call_with_min(|_, _, _, _| {}, 12, 2));
        assert_eq!(stack.min_size(), (12, 5));
    }
}
