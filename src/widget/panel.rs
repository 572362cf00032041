//! Panel: a leaf node drawing a filled, bordered frame.

use crate::node::{Frame, Node};
use crate::surface::{Cell, Style, Surface};
use std::io;

/// A leaf node that fills its area and draws a border around it.
///
/// Typically stacked behind other nodes (via `Layers`) to visually
/// group them.
#[derive(Debug)]
pub struct Panel {
    frame: Frame,
    style: Style,
}

impl Panel {
    /// Create a panel with the default style.
    pub const fn new() -> Self {
        Self {
            frame: Frame::new(),
            style: Style::DEFAULT,
        }
    }

    /// Create a panel with the given style.
    pub const fn with_style(style: Style) -> Self {
        Self {
            frame: Frame::new(),
            style,
        }
    }

    /// The current style.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Replace the style.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Panel {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn render(&mut self, surface: &mut Surface) -> io::Result<()> {
        surface.fill(Cell::new(' ').with_style(self.style));
        surface.draw_border(self.style);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_renders_border() {
        let mut panel = Panel::new();
        let mut surface = Surface::new(5, 3);
        panel.render(&mut surface).unwrap();
        assert_eq!(surface.row_text(0), "┌───┐");
        assert_eq!(surface.row_text(1), "│   │");
        assert_eq!(surface.row_text(2), "└───┘");
    }
}
