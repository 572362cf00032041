//! Surface: a grid of cells that a node renders into.
//!
//! Cells are stored in a contiguous `Vec` in row-major order:
//! `index = y * width + x`. Every node owns one surface sized to the
//! node itself; the driver composites surfaces into their parent's
//! screen region with clipping.

use super::cell::{Cell, Style};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A rectangular grid of cells.
///
/// Zero-sized surfaces are legal; every drawing operation on them is a
/// no-op. All drawing clips at the surface edges rather than failing.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Surface {
    /// Create a new surface filled with empty cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Get the surface width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the surface height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the surface extent as `(width, height)`.
    #[inline]
    pub const fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Check if the surface has no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row-major linear index of (x, y), `None` when out of bounds.
    #[inline]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    /// The cell at (x, y), if in bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.idx(x, y).map(|i| &self.cells[i])
    }

    /// The cell at (x, y) mutably, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.idx(x, y).map(|i| &mut self.cells[i])
    }

    /// Write the cell at (x, y). Out-of-bounds writes are dropped;
    /// returns whether the write landed.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Reset every cell to empty.
    pub fn erase(&mut self) {
        self.fill(Cell::EMPTY);
    }

    /// Draw a string starting at (x, y), clipped at the right edge.
    ///
    /// The string is walked grapheme by grapheme; wide (CJK) graphemes
    /// occupy two columns, the second holding a continuation marker.
    /// A wide grapheme that would straddle the right edge is dropped.
    /// Multi-codepoint graphemes render as their first scalar.
    ///
    /// Returns the number of columns used.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        if y >= self.height {
            return 0;
        }
        let mut col = x;
        for grapheme in text.graphemes(true) {
            #[allow(clippy::cast_possible_truncation)]
            let width = grapheme.width() as u16;
            if width == 0 {
                continue;
            }
            if col + width > self.width {
                break;
            }
            let Some(ch) = grapheme.chars().next() else {
                continue;
            };
            self.set(col, y, Cell { ch, style });
            if width == 2 {
                self.set(col + 1, y, Cell::continuation(style));
            }
            col += width;
        }
        col - x
    }

    /// Draw a border along the surface's own perimeter using
    /// box-drawing characters.
    ///
    /// Surfaces narrower or shorter than two cells get the partial
    /// border that fits.
    pub fn draw_border(&mut self, style: Style) {
        if self.is_empty() {
            return;
        }
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 0..self.width {
            self.set(x, 0, Cell::new('─').with_style(style));
            self.set(x, bottom, Cell::new('─').with_style(style));
        }
        for y in 0..self.height {
            self.set(0, y, Cell::new('│').with_style(style));
            self.set(right, y, Cell::new('│').with_style(style));
        }
        self.set(0, 0, Cell::new('┌').with_style(style));
        self.set(right, 0, Cell::new('┐').with_style(style));
        self.set(0, bottom, Cell::new('└').with_style(style));
        self.set(right, bottom, Cell::new('┘').with_style(style));
    }

    /// Copy a `width` x `height` sub-rectangle of `src` (starting at
    /// `src_x`, `src_y`) onto this surface at (`dst_x`, `dst_y`).
    ///
    /// The copy is clipped against both the source and the destination
    /// bounds; the parts that fall outside are silently dropped.
    pub fn composite(
        &mut self,
        src: &Self,
        src_x: u16,
        src_y: u16,
        dst_x: i32,
        dst_y: i32,
        width: u16,
        height: u16,
    ) {
        for row in 0..height {
            let sy = src_y + row;
            let dy = dst_y + i32::from(row);
            if sy >= src.height || dy < 0 || dy >= i32::from(self.height) {
                continue;
            }
            for col in 0..width {
                let sx = src_x + col;
                let dx = dst_x + i32::from(col);
                if sx >= src.width || dx < 0 || dx >= i32::from(self.width) {
                    continue;
                }
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                if let Some(&cell) = src.get(sx, sy) {
                    self.set(dx as u16, dy as u16, cell);
                }
            }
        }
    }

    /// Resize the surface, keeping the overlapping region's content.
    /// Cells outside it start out empty.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        if (new_width, new_height) == (self.width, self.height) {
            return;
        }

        let keep = self.width.min(new_width) as usize;
        let mut grown = Self::new(new_width, new_height);
        for (old_row, new_row) in self
            .cells
            .chunks(self.width.max(1) as usize)
            .zip(grown.cells.chunks_mut(new_width.max(1) as usize))
        {
            new_row[..keep].copy_from_slice(&old_row[..keep]);
        }
        *self = grown;
    }

    /// Collect the characters of row `y` into a string, continuation
    /// markers skipped. Mostly useful in tests and diagnostics.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if !cell.is_continuation() {
                    out.push(cell.ch);
                }
            }
        }
        out
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
