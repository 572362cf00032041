//! Memory backend: a headless output target for tests.

use super::Backend;
use crate::surface::Surface;
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

/// A [`Backend`] that keeps the last presented frame in memory.
///
/// Drives the full presentation loop without a TTY. The reported
/// dimensions live behind a shared handle so a test can change them
/// while the driver owns the backend, exercising the resize path.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    dims: Rc<Cell<(u16, u16)>>,
    frames: Rc<RefCell<Option<Surface>>>,
    presents: Rc<Cell<u64>>,
}

impl MemoryBackend {
    /// Create a backend reporting the given extent.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            dims: Rc::new(Cell::new((width, height))),
            frames: Rc::new(RefCell::new(None)),
            presents: Rc::new(Cell::new(0)),
        }
    }

    /// A handle that observes this backend from outside the driver.
    pub fn handle(&self) -> MemoryBackendHandle {
        MemoryBackendHandle {
            dims: self.dims.clone(),
            frames: self.frames.clone(),
            presents: self.presents.clone(),
        }
    }
}

impl Backend for MemoryBackend {
    fn dimensions(&self) -> io::Result<(u16, u16)> {
        Ok(self.dims.get())
    }

    fn present(&mut self, frame: &Surface) -> io::Result<()> {
        self.presents.set(self.presents.get() + 1);
        *self.frames.borrow_mut() = Some(frame.clone());
        Ok(())
    }
}

/// Shared view of a [`MemoryBackend`], for assertions and for
/// simulating physical resizes mid-run.
#[derive(Debug, Clone)]
pub struct MemoryBackendHandle {
    dims: Rc<Cell<(u16, u16)>>,
    frames: Rc<RefCell<Option<Surface>>>,
    presents: Rc<Cell<u64>>,
}

impl MemoryBackendHandle {
    /// Change the extent the backend reports from now on.
    pub fn set_dimensions(&self, width: u16, height: u16) {
        self.dims.set((width, height));
    }

    /// The most recently presented frame, if any.
    pub fn last_frame(&self) -> Option<Surface> {
        self.frames.borrow().clone()
    }

    /// How many frames have been presented.
    pub fn presents(&self) -> u64 {
        self.presents.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Style;

    #[test]
    fn test_memory_backend_records_frames() {
        let mut backend = MemoryBackend::new(10, 4);
        let handle = backend.handle();
        assert_eq!(backend.dimensions().unwrap(), (10, 4));
        assert_eq!(handle.presents(), 0);

        let mut frame = Surface::new(10, 4);
        frame.draw_text(0, 0, "hello", Style::DEFAULT);
        backend.present(&frame).unwrap();

        assert_eq!(handle.presents(), 1);
        assert_eq!(handle.last_frame().unwrap().row_text(0), "hello     ");
    }

    #[test]
    fn test_memory_backend_resize_through_handle() {
        let backend = MemoryBackend::new(10, 4);
        let handle = backend.handle();
        handle.set_dimensions(20, 6);
        assert_eq!(backend.dimensions().unwrap(), (20, 6));
    }
}
