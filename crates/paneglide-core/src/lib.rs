//! Core types for the paneglide scroll engine.
//!
//! This crate is the dependency-free leaf of the workspace: geometric
//! primitives shared by every other crate, the immutable per-session scroll
//! configuration, and the public error type.

pub mod config;
pub mod error;
pub mod geometry;

pub use config::{GestureThresholds, MovementMode, ScrollConfig};
pub use error::ScrollError;
pub use geometry::{Axis, Bounds, Vec2};
