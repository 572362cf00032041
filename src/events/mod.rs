//! Events module: input routing through the scene tree.
//!
//! Event sources are polled once per tick in registration order; each
//! event is then walked depth-first through the tree, with every node
//! deciding how it propagates via [`Propagation`].

mod channel;
mod event;
mod key;
mod keyboard;
mod propagation;

pub use channel::MessageSource;
pub use event::{Event, EventSource};
pub use key::{KeyCode, KeyEvent, KeyModifiers};
pub use keyboard::KeyboardSource;
pub use propagation::Propagation;
