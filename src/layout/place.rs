//! Place: the leaf that bridges a layout tree to the scene tree.

use super::Layout;
use crate::node::Node;

enum Target<'a> {
    Node(&'a mut dyn Node),
    Call(Box<dyn FnMut(i32, i32, i32, i32) + 'a>),
}

/// A layout leaf that delivers its resolved rectangle to a scene node
/// or to a raw callback.
///
/// This is the only coupling point between the layout algebra and the
/// scene tree: a node target gets its `position`/`size` written
/// directly (the change-tracked setters keep no-op writes from raising
/// dirty flags). The minimum size must be supplied by the caller; a
/// placement target is opaque and cannot be asked.
pub struct Place<'a> {
    target: Target<'a>,
    min_width: i32,
    min_height: i32,
}

impl<'a> Place<'a> {
    /// Place a scene node, with no minimum size.
    pub fn node(node: &'a mut dyn Node) -> Self {
        Self {
            target: Target::Node(node),
            min_width: 0,
            min_height: 0,
        }
    }

    /// Place a scene node that needs at least the given extent.
    pub fn with_min(node: &'a mut dyn Node, min_width: i32, min_height: i32) -> Self {
        Self {
            target: Target::Node(node),
            min_width,
            min_height,
        }
    }

    /// Deliver the resolved rectangle to a callback as
    /// `(x, y, width, height)`.
    pub fn call(f: impl FnMut(i32, i32, i32, i32) + 'a) -> Self {
        Self {
            target: Target::Call(Box::new(f)),
            min_width: 0,
            min_height: 0,
        }
    }

    /// Callback placement with a minimum extent.
    pub fn call_with_min(
        f: impl FnMut(i32, i32, i32, i32) + 'a,
        min_width: i32,
        min_height: i32,
    ) -> Self {
        Self {
            target: Target::Call(Box::new(f)),
            min_width,
            min_height,
        }
    }
}

impl Layout for Place<'_> {
    fn min_size(&self) -> (i32, i32) {
        (self.min_width, self.min_height)
    }

    fn apply(&mut self, x: i32, y: i32, width: i32, height: i32) {
        match &mut self.target {
            Target::Node(node) => {
                let frame = node.frame_mut();
                frame.set_position(x, y);
                frame.set_size(width, height);
            }
            Target::Call(f) => f(x, y, width, height),
        }
    }
}

impl std::fmt::Debug for Place<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Place")
            .field("min_width", &self.min_width)
            .field("min_height", &self.min_height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Frame;
    use crate::surface::Surface;
    use std::io;

    struct Dummy {
        frame: Frame,
    }

    impl Node for Dummy {
        fn frame(&self) -> &Frame {
            &self.frame
        }

        fn frame_mut(&mut self) -> &mut Frame {
            &mut self.frame
        }

        fn render(&mut self, _surface: &mut Surface) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_place_writes_node_geometry() {
        let mut node = Dummy {
            frame: Frame::new(),
        };
        Place::node(&mut node).apply(2, 3, 20, 10);
        assert_eq!(node.frame().position(), (2, 3));
        assert_eq!(node.frame().size(), (20, 10));
    }

    #[test]
    fn test_place_invokes_callback() {
        let mut got = None;
        Place::call(|x, y, w, h| got = Some((x, y, w, h))).apply(1, 2, 3, 4);
        assert_eq!(got, Some((1, 2, 3, 4)));
    }

    #[test]
    fn test_place_min_size() {
        let mut node = Dummy {
            frame: Frame::new(),
        };
        assert_eq!(Place::node(&mut node).min_size(), (0, 0));
        assert_eq!(Place::with_min(&mut node, 7, 2).min_size(), (7, 2));
    }
}
