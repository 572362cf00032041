//! Label: a leaf node showing styled text.

use crate::node::{Frame, Node};
use crate::surface::{Cell, Style, Surface};
use std::io;

/// A leaf node that draws its text over a filled background.
///
/// The text is split on `'\n'`; each line is clipped at the label's
/// right edge. There is no word wrapping.
#[derive(Debug)]
pub struct Label {
    frame: Frame,
    text: String,
    style: Style,
}

impl Label {
    /// Create a label with the given text and the default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            frame: Frame::new(),
            text: text.into(),
            style: Style::DEFAULT,
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The current style.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Replace the style.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Builder-style variant of [`set_style`](Self::set_style).
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Node for Label {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn render(&mut self, surface: &mut Surface) -> io::Result<()> {
        surface.fill(Cell::new(' ').with_style(self.style));
        for (row, line) in self.text.lines().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = row as u16;
            if y >= surface.height() {
                break;
            }
            surface.draw_text(0, y, line, self.style);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Rgb;

    #[test]
    fn test_label_renders_lines() {
        let mut label = Label::new("one\ntwo");
        let mut surface = Surface::new(5, 3);
        label.render(&mut surface).unwrap();
        assert_eq!(surface.row_text(0), "one  ");
        assert_eq!(surface.row_text(1), "two  ");
        assert_eq!(surface.row_text(2), "     ");
    }

    #[test]
    fn test_label_clips_text() {
        let mut label = Label::new("a very long line\nbelow\nthird\nfourth");
        let mut surface = Surface::new(6, 2);
        label.render(&mut surface).unwrap();
        assert_eq!(surface.row_text(0), "a very");
        assert_eq!(surface.row_text(1), "below ");
    }

    #[test]
    fn test_label_background_fill_uses_style() {
        let style = Style::new(Rgb::BLACK, Rgb::WHITE);
        let mut label = Label::new("x").with_style(style);
        let mut surface = Surface::new(3, 1);
        label.render(&mut surface).unwrap();
        assert_eq!(surface.get(2, 0).unwrap().style.bg, Rgb::WHITE);
    }
}
