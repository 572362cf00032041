//! Event: an opaque payload routed through the scene tree.

use std::any::Any;

/// An event delivered to `Node::process_event`.
///
/// The engine never inspects event contents; handlers discriminate by
/// downcasting to the payload types they understand:
///
/// ```ignore
/// if let Some(key) = event.downcast_ref::<KeyEvent>() {
///     if key.is_char('q') { /* ... */ }
/// }
/// ```
pub struct Event {
    payload: Box<dyn Any>,
}

impl Event {
    /// Wrap a payload into an event.
    pub fn new<T: Any>(payload: T) -> Self {
        Self {
            payload: Box::new(payload),
        }
    }

    /// Check whether the payload is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Borrow the payload if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event").finish_non_exhaustive()
    }
}

/// A producer of events, polled once per tick by the driver.
///
/// `poll_events` must not block: it returns the events that have
/// accumulated since the previous poll, which is an empty list on most
/// ticks. Sources fed from background threads are responsible for
/// handing over data already synchronized (e.g. through a channel).
pub trait EventSource {
    /// Return all events pending since the last poll.
    fn poll_events(&mut self) -> Vec<Event>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping(u32);

    #[test]
    fn test_event_downcast() {
        let event = Event::new(Ping(7));
        assert!(event.is::<Ping>());
        assert!(!event.is::<String>());
        assert_eq!(event.downcast_ref::<Ping>().unwrap().0, 7);
        assert!(event.downcast_ref::<String>().is_none());
    }
}
