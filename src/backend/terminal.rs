//! Terminal backend: crossterm raw-mode output.

use super::Backend;
use crate::surface::{Attrs, Cell, Rgb, Style, Surface};
use crossterm::style::{
    Attribute, Attributes, Color, Print, SetAttribute, SetAttributes, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, queue};
use std::io::{self, BufWriter, Stdout, Write};
use unicode_width::UnicodeWidthChar;

/// A [`Backend`] driving the controlling terminal through crossterm.
///
/// Construction enters raw mode and the alternate screen and hides the
/// cursor; everything is restored best-effort on `Drop`, so the
/// terminal comes back usable even when the presentation loop ends
/// with an error.
pub struct TerminalBackend {
    out: BufWriter<Stdout>,
}

impl TerminalBackend {
    /// Take over the terminal.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = BufWriter::new(io::stdout());
        queue!(out, EnterAlternateScreen, cursor::Hide)?;
        out.flush()?;
        Ok(Self { out })
    }

    /// Queue the escape sequences for a style change.
    fn queue_style(&mut self, style: Style) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_color(style.fg)),
            SetBackgroundColor(to_color(style.bg)),
            SetAttributes(to_attributes(style.attrs)),
        )
    }
}

impl Backend for TerminalBackend {
    fn dimensions(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn present(&mut self, frame: &Surface) -> io::Result<()> {
        let mut last_style: Option<Style> = None;
        for y in 0..frame.height() {
            queue!(self.out, cursor::MoveTo(0, y))?;
            let mut x = 0;
            while x < frame.width() {
                let cell = frame.get(x, y).copied().unwrap_or(Cell::EMPTY);
                if last_style != Some(cell.style) {
                    self.queue_style(cell.style)?;
                    last_style = Some(cell.style);
                }
                if cell.is_continuation() {
                    // orphaned trailing half of a clipped wide character
                    queue!(self.out, Print(' '))?;
                    x += 1;
                    continue;
                }
                queue!(self.out, Print(cell.ch))?;
                x += cell.ch.width().map_or(1, |w| w.max(1)) as u16;
            }
        }
        self.out.flush()
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        let _ = queue!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

impl std::fmt::Debug for TerminalBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalBackend").finish_non_exhaustive()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn to_attributes(attrs: Attrs) -> Attributes {
    let mut out = Attributes::default();
    if attrs.contains(Attrs::BOLD) {
        out.set(Attribute::Bold);
    }
    if attrs.contains(Attrs::DIM) {
        out.set(Attribute::Dim);
    }
    if attrs.contains(Attrs::ITALIC) {
        out.set(Attribute::Italic);
    }
    if attrs.contains(Attrs::UNDERLINE) {
        out.set(Attribute::Underlined);
    }
    if attrs.contains(Attrs::BLINK) {
        out.set(Attribute::SlowBlink);
    }
    if attrs.contains(Attrs::REVERSED) {
        out.set(Attribute::Reverse);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_mapping() {
        let attrs = to_attributes(Attrs::BOLD | Attrs::REVERSED);
        assert!(attrs.has(Attribute::Bold));
        assert!(attrs.has(Attribute::Reverse));
        assert!(!attrs.has(Attribute::Italic));
    }

    #[test]
    fn test_color_mapping() {
        let color = to_color(Rgb::new(1, 2, 3));
        assert_eq!(color, Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
