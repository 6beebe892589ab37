//! Motion physics for the paneglide scroll engine.
//!
//! Pure functions and small value types, no state of its own: inertial
//! deceleration, drag-velocity smoothing, the elastic rubber-band law, and
//! snap-point target resolution. The foundation crate drives these from the
//! per-tick update cycle.

pub mod inertia;
pub mod snap;

pub use inertia::{decay_velocity, rubber_delta, smooth_velocity, spring_toward};
pub use snap::{SnapAdvance, SnapMode, SnapPoints};
