//! Message event source: channel-fed events from background threads.

use super::event::{Event, EventSource};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::any::Any;

/// An [`EventSource`] that drains a crossbeam channel.
///
/// This is the seam between background producers (network discovery,
/// timers, audio completion callbacks) and the single-threaded driver:
/// the producer keeps a `Sender<T>` and the source hands each queued
/// `T` to the tree as an opaque [`Event`] payload on the next poll.
pub struct MessageSource<T> {
    rx: Receiver<T>,
}

impl<T: Any + Send> MessageSource<T> {
    /// Wrap an existing receiver.
    pub const fn new(rx: Receiver<T>) -> Self {
        Self { rx }
    }

    /// Create a connected `(sender, source)` pair.
    pub fn channel() -> (Sender<T>, Self) {
        let (tx, rx) = unbounded();
        (tx, Self::new(rx))
    }
}

impl<T: Any + Send> EventSource for MessageSource<T> {
    fn poll_events(&mut self) -> Vec<Event> {
        self.rx.try_iter().map(Event::new).collect()
    }
}

impl<T> std::fmt::Debug for MessageSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageSource")
            .field("pending", &self.rx.len())
            .finish()
    }
}
