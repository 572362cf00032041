//! # Proscenium
//!
//! A retained-mode scene-tree presentation engine for turn-paced
//! terminal applications.
//!
//! Proscenium owns a tree of presentable nodes and drives it through
//! timed update/render/event cycles, with a declarative layout algebra
//! for positioning.
//!
//! ## Core Concepts
//!
//! - **Scene tree**: nodes own their children exclusively; each node
//!   draws into its own cached surface, composited into the parent's
//!   region with clipping
//! - **Propagation decisions**: every node routes events to none, all,
//!   or exactly one of its children, which is how focus works
//! - **Ephemeral layouts**: constraint trees built fresh every frame
//!   that write concrete rectangles back into the scene tree
//! - **Paced driver**: a single-threaded tick loop with a capped frame
//!   rate and tolerance for transient draw faults around resizes
//!
//! ## Example
//!
//! ```rust,ignore
//! use proscenium::{Driver, KeyboardSource, TerminalBackend};
//!
//! let backend = TerminalBackend::new()?;
//! let mut driver = Driver::new(backend);
//! driver.add_event_source(KeyboardSource::new());
//! driver.load_scene(TitleScene::new());
//! driver.run()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod backend;
pub mod driver;
pub mod events;
pub mod layout;
pub mod node;
pub mod surface;
pub mod tween;
pub mod widget;

// Re-exports for convenience
pub use backend::{Backend, MemoryBackend, TerminalBackend};
pub use driver::{Driver, DriverConfig, DriverControl};
pub use events::{
    Event, EventSource, KeyCode, KeyEvent, KeyModifiers, KeyboardSource, MessageSource,
    Propagation,
};
pub use layout::{Anchor, Extent, Insets, Layers, Layout, Margin, Place, SoftMargin, Vertical};
pub use node::{Frame, Node, Scene};
pub use surface::{Attrs, Cell, Rgb, Style, Surface};
pub use tween::Tween;
pub use widget::{Label, Panel};
