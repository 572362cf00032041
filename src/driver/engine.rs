//! Driver: the presentation loop and its three tree walks.

use super::control::DriverControl;
use crate::backend::Backend;
use crate::events::{Event, EventSource, Propagation};
use crate::node::{Node, Scene};
use crate::surface::Surface;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// Consecutive failing ticks tolerated before the error propagates.
/// Transient draw failures are expected around terminal resizes.
const FAULT_TOLERANCE: u32 = 3;

/// Configuration for the driver.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Upper bound on the tick rate. Ticks that finish early sleep the
    /// remainder of the frame budget.
    pub max_frame_rate: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { max_frame_rate: 25 }
    }
}

/// The presentation loop: owns the active scene, the registered event
/// sources and the output backend, and drives the per-tick
/// dispatch/update/render walks.
pub struct Driver<B> {
    backend: B,
    config: DriverConfig,
    sources: Vec<Box<dyn EventSource>>,
    control: DriverControl,
}

impl<B: Backend> Driver<B> {
    /// Create a driver with the default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, DriverConfig::default())
    }

    /// Create a driver with a custom configuration.
    pub fn with_config(backend: B, config: DriverConfig) -> Self {
        Self {
            backend,
            config,
            sources: Vec::new(),
            control: DriverControl::default(),
        }
    }

    /// A control handle for requesting scene changes from outside.
    pub fn control(&self) -> DriverControl {
        self.control.clone()
    }

    /// Request a scene change at the next tick boundary.
    pub fn load_scene(&mut self, scene: impl Scene + 'static) {
        self.control.load_scene(scene);
    }

    /// Request loop termination at the next tick boundary.
    pub fn exit(&mut self) {
        self.control.exit();
    }

    /// Register an event source. Sources are polled once per tick in
    /// registration order.
    pub fn add_event_source(&mut self, source: impl EventSource + 'static) {
        self.sources.push(Box::new(source));
    }

    /// The output backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the presentation loop until no scene is active.
    ///
    /// Returns when `exit` is requested (or no scene was ever loaded),
    /// or with an error once rendering has failed four ticks in a row.
    /// Lifecycle hooks run on the caller's thread; an active scene
    /// always gets its `on_leave` before this returns normally.
    pub fn run(&mut self) -> io::Result<()> {
        let (out_w, out_h) = self.backend.dimensions()?;
        let mut screen = Surface::new(out_w, out_h);
        let mut scene: Option<Box<dyn Scene>> = None;
        let min_frame = Duration::from_secs(1) / self.config.max_frame_rate.max(1);
        let mut last_tick = Instant::now();
        let mut fault_streak: u32 = 0;

        loop {
            // scene changes take effect only at tick boundaries
            if let Some(request) = self.control.take_request() {
                if let Some(mut old) = scene.take() {
                    old.on_leave();
                }
                match request {
                    Some(mut next) => {
                        next.on_enter(self.control.clone());
                        scene = Some(next);
                    }
                    None => break,
                }
            }
            let Some(active) = scene.as_mut() else { break };

            // pace to the frame budget, then measure dt
            let elapsed = last_tick.elapsed();
            if elapsed < min_frame {
                thread::sleep(min_frame - elapsed);
            }
            let now = Instant::now();
            let dt = (now - last_tick).as_secs_f64();
            last_tick = now;

            // route pending events through the tree
            for source in &mut self.sources {
                for event in source.poll_events() {
                    dispatch_event(active.as_mut(), &event);
                }
            }

            // update walk
            advance_tree(active.as_mut(), dt);

            // pin the scene to the output and pick up physical resizes
            active.frame_mut().set_position(0, 0);
            let (out_w, out_h) = self.backend.dimensions()?;
            let out_size = (i32::from(out_w), i32::from(out_h));
            if active.frame().size() != out_size {
                screen.resize(out_w, out_h);
                active.frame_mut().set_size(out_size.0, out_size.1);
                fault_streak = 0;
            }

            // render walk, then flip the composed frame out
            let (scene_w, scene_h) = active.frame().size();
            let result = render_tree(active.as_mut(), &mut screen, 0, 0, scene_w, scene_h, false)
                .and_then(|()| self.backend.present(&screen));
            match result {
                Ok(()) => fault_streak = 0,
                Err(err) => {
                    fault_streak += 1;
                    if fault_streak > FAULT_TOLERANCE {
                        return Err(err);
                    }
                }
            }
        }

        if let Some(mut last) = scene.take() {
            last.on_leave();
        }
        Ok(())
    }
}

impl<B: std::fmt::Debug> std::fmt::Debug for Driver<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .field("sources", &self.sources.len())
            .finish_non_exhaustive()
    }
}

/// Walk an event through the tree, pruning or redirecting at every
/// level according to each node's propagation decision.
fn dispatch_event<N: Node + ?Sized>(node: &mut N, event: &Event) {
    match node.process_event(event) {
        Propagation::None => {}
        Propagation::All => {
            for child in node.children_mut() {
                dispatch_event(child, event);
            }
        }
        Propagation::Forward(index) => {
            // the child list may have changed since the decision was
            // made; a stale index drops the event
            if let Some(child) = node.children_mut().into_iter().nth(index) {
                dispatch_event(child, event);
            }
        }
    }
}

/// Depth-first update, parent before children, no pruning.
fn advance_tree<N: Node + ?Sized>(node: &mut N, dt: f64) {
    node.advance(dt);
    for child in node.children_mut() {
        advance_tree(child, dt);
    }
}

/// Depth-first render and composite.
///
/// `base_*` is the parent's absolute rectangle, which is also the clip
/// rectangle for this node's composite step. Children are clipped
/// against this node's own rectangle, not the accumulated ancestor
/// intersection.
fn render_tree<N: Node + ?Sized>(
    node: &mut N,
    output: &mut Surface,
    base_x: i32,
    base_y: i32,
    base_w: i32,
    base_h: i32,
    parent_moved: bool,
) -> io::Result<()> {
    let (x, y) = node.frame().position();
    let (w, h) = node.frame().size();
    let visible = w > 0 && h > 0;

    if parent_moved {
        node.frame_mut().mark_moved();
    }

    if visible {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (surf_w, surf_h) = (w as u16, h as u16);
        let resized = node.frame().resized();
        let mut surface = match node.frame_mut().take_surface() {
            Some(mut existing) => {
                if resized {
                    existing.resize(surf_w, surf_h);
                }
                existing
            }
            None => Surface::new(surf_w, surf_h),
        };

        let drawn = node.render(&mut surface);
        if drawn.is_ok() {
            composite_clipped(output, &surface, base_x, base_y, base_w, base_h, x, y, w, h);
        }
        node.frame_mut().put_surface(surface);
        drawn?;
    }

    let moved = node.frame().moved();
    for child in node.children_mut() {
        render_tree(child, output, base_x + x, base_y + y, w, h, moved)?;
    }

    node.frame_mut().clear_flags();
    Ok(())
}

/// Composite a node's surface onto the output, clipped against the
/// parent rectangle. An empty intersection composites nothing.
#[allow(clippy::too_many_arguments)]
fn composite_clipped(
    output: &mut Surface,
    surface: &Surface,
    base_x: i32,
    base_y: i32,
    base_w: i32,
    base_h: i32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) {
    let mut src_x = 0;
    let mut src_y = 0;
    let mut min_x = base_x + x;
    let mut min_y = base_y + y;
    let mut max_x = base_x + x + w - 1;
    let mut max_y = base_y + y + h - 1;
    let base_max_x = base_x + base_w - 1;
    let base_max_y = base_y + base_h - 1;

    if min_x < base_x {
        src_x += base_x - min_x;
        min_x = base_x;
    }
    if min_y < base_y {
        src_y += base_y - min_y;
        min_y = base_y;
    }
    max_x = max_x.min(base_max_x);
    max_y = max_y.min(base_max_y);

    if max_x >= min_x && max_y >= min_y {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        output.composite(
            surface,
            src_x as u16,
            src_y as u16,
            min_x,
            min_y,
            (max_x - min_x + 1) as u16,
            (max_y - min_y + 1) as u16,
        );
    }
}
