//! Inertial deceleration, drag-velocity smoothing, and the elastic
//! rubber-band law.
//!
//! All functions here are per-axis and pure; the scroller façade applies
//! them to each enabled axis every simulation tick.

/// Velocity magnitude (units/sec) below which decelerating content is
/// considered stopped. Without this floor the exponential decay never
/// reaches zero and the content drifts forever.
pub const STOP_VELOCITY: f32 = 1.0;

/// Blend rate multiplier for drag-velocity smoothing. The smoothed velocity
/// moves toward the instantaneous value by a fraction of `dt * 10` per tick,
/// so noisy per-tick gesture deltas are low-pass filtered.
pub const VELOCITY_SMOOTHING: f32 = 10.0;

/// Rubber-band stiffness coefficient. Smaller values make the overshoot
/// stiffer (less travel for the same overstretch).
const RUBBER_COEFFICIENT: f32 = 0.55;

/// Applies exponential deceleration to a velocity over a time step.
///
/// `deceleration_rate` is the per-second retention factor: the velocity is
/// multiplied by `rate^dt`. Results below [`STOP_VELOCITY`] in magnitude
/// snap to zero.
pub fn decay_velocity(velocity: f32, deceleration_rate: f32, dt: f32) -> f32 {
    let decayed = velocity * deceleration_rate.powf(dt);
    if decayed.abs() < STOP_VELOCITY {
        0.0
    } else {
        decayed
    }
}

/// Blends a previously smoothed velocity toward an instantaneous sample.
///
/// The blend fraction is `dt * `[`VELOCITY_SMOOTHING`], clamped to 1, so the
/// smoothed value lags the raw derivative and absorbs tick-to-tick jitter.
pub fn smooth_velocity(previous: f32, instantaneous: f32, dt: f32) -> f32 {
    let fraction = (dt * VELOCITY_SMOOTHING).clamp(0.0, 1.0);
    previous + (instantaneous - previous) * fraction
}

/// Soft-clamp law for elastic overshoot.
///
/// Maps an out-of-bounds overstretch to the visual travel the content is
/// allowed: zero at zero, monotonic in `overstretch`, and asymptotically
/// approaching `view_size` (never reached) as the overstretch grows.
pub fn rubber_delta(overstretch: f32, view_size: f32) -> f32 {
    (1.0 - 1.0 / (overstretch.abs() * RUBBER_COEFFICIENT / view_size + 1.0))
        * view_size
        * overstretch.signum()
}

/// Critically damped spring step toward a target position.
///
/// `smooth_time` is the characteristic return time (the elasticity constant).
/// Returns the new `(position, velocity)` pair; the approach never
/// overshoots the target.
pub fn spring_toward(
    current: f32,
    target: f32,
    velocity: f32,
    smooth_time: f32,
    dt: f32,
) -> (f32, f32) {
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Padé approximation of e^-x, stable for large steps.
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (velocity + omega * change) * dt;
    let mut new_velocity = (velocity - omega * temp) * exp;
    let mut new_position = target + (change + temp) * exp;

    // Clamp any numerical overshoot to the target.
    if (target - current > 0.0) == (new_position > target) {
        new_position = target;
        new_velocity = (new_position - target) / dt;
    }

    (new_position, new_velocity)
}
