//! Scroller façade and gesture routing for the paneglide engine.
//!
//! The engine is single-threaded and frame-driven: gesture events arrive
//! first, then the host calls `tick(dt)` once per frame. The host owns
//! rendering, layout, and hit-testing; this crate only turns gesture deltas
//! and a viewport/content bounds pair into a content offset plus scrollbar
//! fractions.
//!
//! Capability seams:
//! - [`Tickable`] — per-frame simulation step.
//! - [`GestureSink`] — begin/move/end gesture events in content-local space.
//!
//! A [`Scroller`] implements both. A [`GestureRouter`] also implements both
//! and adds the horizontal/vertical axis-lock state machine that arbitrates
//! between a primary carousel and nested per-panel scrollers.

pub mod bounds;
pub mod gesture;
pub mod scroller;


pub use bounds::{adjust_bounds, calculate_offset};
pub use gesture::{AxisLock, GestureRouter, ScrollerHandle};
pub use scroller::Scroller;

use paneglide_core::Vec2;

/// Per-frame simulation step.
pub trait Tickable {
    /// Advances the simulation by `dt` seconds. A zero `dt` is a no-op.
    fn tick(&mut self, dt: f32);
}

/// Consumer of normalized gesture events.
///
/// Positions are in content-local units. Events for a given pointer are
/// strictly ordered begin → move* → end within the host's frame loop.
pub trait GestureSink {
    fn on_begin(&mut self, pointer: u64, position: Vec2);
    fn on_move(&mut self, pointer: u64, position: Vec2);
    fn on_end(&mut self, pointer: u64);
}
