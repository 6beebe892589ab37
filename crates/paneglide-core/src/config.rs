//! Scroll configuration: movement restriction, inertia, snapping, and the
//! gesture disambiguation thresholds.
//!
//! A `ScrollConfig` is immutable for the lifetime of a scroll session; hosts
//! swap the whole value through `Scroller::configure` when settings change.

/// How content movement is restricted at the viewport edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementMode {
    /// No correction at all; content may move anywhere.
    Unrestricted,
    /// Content may overshoot the viewport edges and springs back.
    Elastic,
    /// Content is hard-clamped to the viewport edges.
    Clamped,
}

/// Tunable thresholds for horizontal/vertical gesture disambiguation.
///
/// These values are in content-local units (logical pixels for most hosts).
/// The defaults were tuned for touch carousels on typical mobile displays;
/// very high-density screens may want them scaled by the DPI factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Cumulative displacement on one axis that commits the gesture to that
    /// axis. Until either axis crosses this, deltas are withheld from both
    /// scrollers.
    pub axis_lock: f32,
    /// Per-tick vertical delta magnitude at or above which the motion is
    /// treated as predominantly vertical for that tick.
    pub vertical_dominance: f32,
    /// Divisor applied to the horizontal displacement of a predominantly
    /// vertical tick before it is accumulated. Dampens sideways jitter
    /// during vertical swipes so it cannot steal the axis lock.
    pub horizontal_damping: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            axis_lock: 10.0,
            vertical_dominance: 5.0,
            horizontal_damping: 12.0,
        }
    }
}

/// Immutable per-session scroll settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Whether horizontal scrolling is enabled.
    pub horizontal: bool,
    /// Whether vertical scrolling is enabled.
    pub vertical: bool,
    pub movement: MovementMode,
    /// Spring smoothing time for the elastic return, in seconds.
    pub elasticity: f32,
    /// Whether released content keeps moving.
    pub inertia: bool,
    /// Per-second velocity retention for inertial deceleration.
    /// A value of 0.135 loses ~86% of the velocity every second.
    pub deceleration_rate: f32,
    /// When set, released content travels at this fixed speed (units/sec)
    /// in the release direction instead of decelerating.
    pub constant_speed: Option<f32>,
    /// Whether released content seeks the active snap point.
    pub snap_enabled: bool,
    /// Exponential approach rate used while seeking a snap point.
    pub slide_speed: f32,
    /// Multiplier applied to drag and scroll-wheel deltas.
    pub sensitivity: f32,
    /// Cap on the smoothed drag velocity, in units/sec.
    pub max_velocity: f32,
    pub thresholds: GestureThresholds,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            horizontal: true,
            vertical: false,
            movement: MovementMode::Elastic,
            elasticity: 0.1,
            inertia: true,
            deceleration_rate: 0.135,
            constant_speed: None,
            snap_enabled: false,
            slide_speed: 8.0,
            sensitivity: 1.0,
            max_velocity: 8_000.0,
            thresholds: GestureThresholds::default(),
        }
    }
}

impl ScrollConfig {
    /// Whether any axis can move. A config with both axes disabled is
    /// accepted but produces a permanently inert scroller.
    pub fn any_axis_enabled(&self) -> bool {
        self.horizontal || self.vertical
    }
}
