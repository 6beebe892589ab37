//! The scroller façade.
//!
//! Owns the mutable scroll state for one content/viewport pair and runs the
//! per-tick update cycle: offset correction, inertia integration, snap
//! advancement, then change notification. Gesture events mutate the drag
//! session between ticks; the host calls [`Scroller::tick`] once per frame
//! after delivering them.

use crate::bounds::{adjust_bounds, calculate_offset};
use crate::{GestureSink, Tickable};
use paneglide_animation::{inertia, snap, SnapMode, SnapPoints};
use paneglide_core::{Axis, Bounds, MovementMode, ScrollConfig, ScrollError, Vec2};

/// Position change below which no value-changed notification fires.
const CHANGE_EPSILON: f32 = 0.001;

/// Engine-agnostic scrollable content scroller.
///
/// Positions are the content's anchored position in the shared local space;
/// the content bounds provided by the host are treated as captured at the
/// position current at the time of the call and translated from there.
pub struct Scroller {
    config: ScrollConfig,
    content_pivot: Vec2,

    view_bounds: Option<Bounds>,
    /// Content bounds after pivot expansion, captured at `base_position`.
    content_base: Option<Bounds>,
    base_position: Vec2,

    position: Vec2,
    velocity: Vec2,
    dragging: bool,
    drag_start_cursor: Vec2,
    drag_start_position: Vec2,
    active_pointer: Option<u64>,

    snap_points: SnapPoints,
    snapping: bool,
    snap_target: f32,
    /// A snap-seeking drag ended; resolve a sticky target on the next tick.
    pending_snap: bool,
    /// Free deceleration in progress; snap to the nearest point once it stops.
    coasting: bool,
    /// Last non-zero horizontal drag direction, kept across drags so a
    /// release between points still knows which way the user was going.
    stored_sign: f32,

    /// Position at the end of the previous tick, for the drag-velocity
    /// derivative.
    prev_position: Vec2,
    prev_view: Option<Bounds>,
    prev_content: Option<Bounds>,
    prev_emitted_position: Vec2,

    on_value_changed: Option<Box<dyn Fn(Vec2)>>,
}

impl Scroller {
    pub fn new(config: ScrollConfig) -> Self {
        if !config.any_axis_enabled() {
            log::debug!("scroller created with both axes disabled; it will be inert");
        }
        Self {
            config,
            content_pivot: Vec2::new(0.5, 0.5),
            view_bounds: None,
            content_base: None,
            base_position: Vec2::ZERO,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            dragging: false,
            drag_start_cursor: Vec2::ZERO,
            drag_start_position: Vec2::ZERO,
            active_pointer: None,
            snap_points: SnapPoints::default(),
            snapping: false,
            snap_target: 0.0,
            pending_snap: false,
            coasting: false,
            stored_sign: 0.0,
            prev_position: Vec2::ZERO,
            prev_view: None,
            prev_content: None,
            prev_emitted_position: Vec2::ZERO,
            on_value_changed: None,
        }
    }

    /// Replaces the session configuration.
    pub fn configure(&mut self, config: ScrollConfig) {
        if !config.any_axis_enabled() {
            log::debug!("scroller reconfigured with both axes disabled; it will be inert");
        }
        self.config = config;
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Sets the content pivot used for bounds expansion. Takes effect on the
    /// next `set_viewport_and_content_bounds` call.
    pub fn set_content_pivot(&mut self, pivot: Vec2) {
        self.content_pivot = pivot;
    }

    /// Registers the value-changed notification callback.
    pub fn set_on_value_changed(&mut self, callback: impl Fn(Vec2) + 'static) {
        self.on_value_changed = Some(Box::new(callback));
    }

    /// Provides the viewport and content boxes in their shared local space.
    ///
    /// The content box is expanded to at least viewport size on each enabled
    /// axis (the pivot decides which side pads) and is anchored to the
    /// current position: future position changes translate it.
    pub fn set_viewport_and_content_bounds(&mut self, view: Bounds, content: Bounds) {
        let adjusted = adjust_bounds(
            view,
            self.content_pivot,
            content,
            self.config.horizontal,
            self.config.vertical,
        );
        self.view_bounds = Some(view);
        self.content_base = Some(adjusted);
        self.base_position = self.position;
    }

    /// Whether the scroller has bounds to work against. While inactive every
    /// tick and gesture operation is a no-op.
    pub fn is_active(&self) -> bool {
        self.view_bounds.is_some() && self.content_base.is_some()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    pub fn view_bounds(&self) -> Option<Bounds> {
        self.view_bounds
    }

    /// Content bounds at the current position.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.content_base
            .map(|base| base.translate(self.position - self.base_position))
    }

    // ------------------------------------------------------------------
    // Snap set management
    // ------------------------------------------------------------------

    /// Rebuilds the snap set for a panel carousel. Call whenever the panel
    /// count or panel width changes; any seek in progress is cancelled.
    pub fn rebuild_snap_points(
        &mut self,
        panel_count: usize,
        panel_width: f32,
        viewport_width: f32,
    ) {
        self.snap_points = SnapPoints::from_panels(panel_count, panel_width, viewport_width);
        if !self.snap_points.is_snappable() {
            log::debug!(
                "rebuilt snap set with {} point(s); snapping stays inert",
                self.snap_points.len()
            );
        }
        self.snapping = false;
        self.pending_snap = false;
        self.coasting = false;
    }

    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    /// Starts a seek to the snap point of the given panel.
    pub fn snap_to_panel(&mut self, index: usize) -> Result<(), ScrollError> {
        let Some(target) = self.snap_points.get(index) else {
            return Err(ScrollError::PanelOutOfRange {
                index,
                count: self.snap_points.len(),
            });
        };
        self.start_seek(target);
        Ok(())
    }

    /// Panel whose snap point is closest to the current position.
    pub fn nearest_panel(&self) -> Option<usize> {
        self.snap_points.nearest_index(self.position.x)
    }

    /// Zeroes velocity and cancels any snap seek.
    pub fn stop_movement(&mut self) {
        self.velocity = Vec2::ZERO;
        self.snapping = false;
        self.pending_snap = false;
        self.coasting = false;
    }

    // ------------------------------------------------------------------
    // Drag session
    // ------------------------------------------------------------------

    /// Starts a drag session at the given cursor position.
    pub fn drag_begin(&mut self, cursor: Vec2) {
        if !self.is_active() {
            return;
        }
        self.dragging = true;
        self.drag_start_cursor = cursor;
        self.drag_start_position = self.position;
        self.velocity = Vec2::ZERO;
        self.snapping = false;
        self.pending_snap = false;
        self.coasting = false;
    }

    /// Moves the drag cursor; content follows, restricted per configuration.
    pub fn drag_move(&mut self, cursor: Vec2) {
        if !self.dragging {
            return;
        }
        let Some(view) = self.view_bounds else {
            return;
        };

        let pointer_delta = (cursor - self.drag_start_cursor) * self.config.sensitivity;
        let mut target = self.drag_start_position + pointer_delta;
        if !self.config.horizontal {
            target.x = self.position.x;
        }
        if !self.config.vertical {
            target.y = self.position.y;
        }

        let offset = self.offset_for_position(target);
        let mut position = target + offset;
        if self.config.movement == MovementMode::Elastic {
            let view_size = view.size();
            if offset.x != 0.0 {
                position.x -= inertia::rubber_delta(offset.x, view_size.x);
            }
            if offset.y != 0.0 {
                position.y -= inertia::rubber_delta(offset.y, view_size.y);
            }
        }
        self.apply_position(position);
    }

    /// Ends the drag session. Momentum and snapping take over on later ticks.
    pub fn drag_end(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        if self.config.snap_enabled && !self.pending_snap {
            self.coasting = true;
        }
    }

    /// Applies a scroll-wheel delta directly to the position.
    pub fn scroll_wheel(&mut self, delta: Vec2) {
        if !self.is_active() {
            return;
        }
        let delta = delta * self.config.sensitivity;
        let mut position = self.position;
        if self.config.horizontal {
            position.x += delta.x;
        }
        if self.config.vertical {
            position.y += delta.y;
        }
        if self.config.movement == MovementMode::Clamped {
            position += self.offset_for_position(position);
        }
        self.apply_position(position);
    }

    // ------------------------------------------------------------------
    // Normalized position and scrollbar outputs
    // ------------------------------------------------------------------

    /// Scroll fractions in `[0, 1]` per axis; 0 is the left/bottom extreme.
    pub fn normalized_position(&self) -> Vec2 {
        Vec2::new(
            self.normalized_axis(Axis::Horizontal),
            self.normalized_axis(Axis::Vertical),
        )
    }

    fn normalized_axis(&self, axis: Axis) -> f32 {
        let (Some(view), Some(content)) = (self.view_bounds, self.content_bounds()) else {
            return 0.0;
        };
        let hidden = content.size().get(axis) - view.size().get(axis);
        if hidden <= 0.0 {
            0.0
        } else {
            (view.min.get(axis) - content.min.get(axis)) / hidden
        }
    }

    /// Writes the position implied by the target fraction, bypassing
    /// velocity (which is zeroed on that axis). `axis` is a raw index,
    /// 0 = horizontal, 1 = vertical.
    pub fn set_normalized_position(&mut self, value: f32, axis: usize) -> Result<(), ScrollError> {
        let axis = Axis::from_index(axis)?;
        let (Some(view), Some(content)) = (self.view_bounds, self.content_bounds()) else {
            return Ok(());
        };
        let hidden = content.size().get(axis) - view.size().get(axis);
        if hidden <= 0.0 {
            return Ok(());
        }
        let target_min = view.min.get(axis) - value * hidden;
        let shift = target_min - content.min.get(axis);
        let mut position = self.position;
        position.set(axis, position.get(axis) + shift);
        self.position = position;
        self.velocity.set(axis, 0.0);
        Ok(())
    }

    /// Scrollbar metrics for one axis: `(size, value)`. `size` is the
    /// visible fraction of the content, `value` the scroll fraction.
    pub fn scrollbar_fraction(&self, axis: usize) -> Result<(f32, f32), ScrollError> {
        let axis = Axis::from_index(axis)?;
        let (Some(view), Some(content)) = (self.view_bounds, self.content_bounds()) else {
            return Ok((1.0, 0.0));
        };
        let content_size = content.size().get(axis);
        let size = if content_size > 0.0 {
            (view.size().get(axis) / content_size).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Ok((size, self.normalized_axis(axis)))
    }

    // ------------------------------------------------------------------
    // Per-tick update
    // ------------------------------------------------------------------

    fn tick_impl(&mut self, dt: f32) {
        if dt <= 0.0 || !self.is_active() || !self.config.any_axis_enabled() {
            return;
        }

        let offset = self.offset_for_position(self.position);

        if !self.dragging && (offset != Vec2::ZERO || self.velocity != Vec2::ZERO) {
            self.integrate(offset, dt);
        }

        if self.dragging && self.config.inertia {
            self.update_drag_velocity(dt);
        }

        if !self.dragging {
            self.advance_snap(dt);
        }

        self.publish_changes();
        self.prev_position = self.position;
    }

    /// Advances position under deceleration, constant speed, or the elastic
    /// spring, then hard-clamps when the movement mode asks for it.
    fn integrate(&mut self, offset: Vec2, dt: f32) {
        let mut position = self.position;

        for axis in [Axis::Horizontal, Axis::Vertical] {
            if !self.axis_enabled(axis) {
                continue;
            }
            let edge_offset = offset.get(axis);
            let current = position.get(axis);
            let velocity = self.velocity.get(axis);

            if self.config.movement == MovementMode::Elastic && edge_offset != 0.0 {
                let (new_position, new_velocity) = inertia::spring_toward(
                    current,
                    current + edge_offset,
                    velocity,
                    self.config.elasticity,
                    dt,
                );
                position.set(axis, new_position);
                self.velocity.set(axis, new_velocity);
            } else if self.config.inertia {
                let new_velocity = if self.config.constant_speed.is_some() {
                    velocity
                } else {
                    inertia::decay_velocity(velocity, self.config.deceleration_rate, dt)
                };
                self.velocity.set(axis, new_velocity);
                position.set(axis, current + new_velocity * dt);
            } else {
                self.velocity.set(axis, 0.0);
            }
        }

        if self.config.movement == MovementMode::Clamped {
            position += self.offset_for_position(position);
        }
        self.apply_position(position);
    }

    /// Recomputes the drag velocity as the smoothed time-derivative of the
    /// per-tick position delta, then applies the configured variant.
    fn update_drag_velocity(&mut self, dt: f32) {
        let instantaneous = (self.position - self.prev_position) * (1.0 / dt);
        let mut smoothed = Vec2::new(
            inertia::smooth_velocity(self.velocity.x, instantaneous.x, dt),
            inertia::smooth_velocity(self.velocity.y, instantaneous.y, dt),
        );
        if smoothed.length() > self.config.max_velocity {
            smoothed = smoothed.normalized() * self.config.max_velocity;
        }

        if self.config.snap_enabled {
            let sign = Vec2::new(sign_or_zero(smoothed.x), sign_or_zero(smoothed.y));
            if sign.x != 0.0 {
                self.stored_sign = sign.x;
            }
            self.velocity = sign;
            self.pending_snap = true;
        } else if let Some(speed) = self.config.constant_speed {
            self.velocity = smoothed.normalized() * speed;
        } else {
            self.velocity = smoothed;
        }
    }

    fn advance_snap(&mut self, dt: f32) {
        if self.pending_snap {
            self.pending_snap = false;
            self.coasting = false;
            let target =
                self.snap_points
                    .resolve_target(self.position.x, self.stored_sign, SnapMode::Sticky);
            if self.snap_points.is_snappable() {
                self.start_seek(target);
            }
        }

        if self.coasting
            && !self.snapping
            && self.config.snap_enabled
            && self.velocity == Vec2::ZERO
        {
            self.coasting = false;
            if self.snap_points.is_snappable() {
                let target = self.snap_points.resolve_target(
                    self.position.x,
                    0.0,
                    SnapMode::NearestMidpoint,
                );
                self.start_seek(target);
            }
        }

        if self.snapping {
            let step = snap::advance(
                self.position.x,
                self.snap_target,
                self.config.slide_speed,
                dt,
            );
            let mut position = self.position;
            position.x = step.position;
            self.apply_position(position);
            if step.complete {
                self.snapping = false;
                self.velocity.x = 0.0;
            }
        }
    }

    fn start_seek(&mut self, target: f32) {
        self.snap_target = target;
        self.snapping = true;
        self.velocity = Vec2::ZERO;
    }

    /// Emits the value-changed notification when view bounds, content
    /// bounds, or position differ from the previous tick's cached values.
    fn publish_changes(&mut self) {
        let view = self.view_bounds;
        let content = self.content_bounds();
        let changed = view != self.prev_view
            || content != self.prev_content
            || (self.position - self.prev_emitted_position).length() > CHANGE_EPSILON;
        if changed {
            self.prev_view = view;
            self.prev_content = content;
            self.prev_emitted_position = self.position;
            if let Some(callback) = &self.on_value_changed {
                callback(self.normalized_position());
            }
        }
    }

    fn axis_enabled(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.config.horizontal,
            Axis::Vertical => self.config.vertical,
        }
    }

    /// Correction offset if the content were moved to `target`.
    fn offset_for_position(&self, target: Vec2) -> Vec2 {
        let (Some(view), Some(content)) = (self.view_bounds, self.content_bounds()) else {
            return Vec2::ZERO;
        };
        calculate_offset(
            view,
            content,
            self.config.horizontal,
            self.config.vertical,
            self.config.movement,
            target - self.position,
        )
    }

    /// Writes a new position, touching enabled axes only.
    fn apply_position(&mut self, new_position: Vec2) {
        if self.config.horizontal {
            self.position.x = new_position.x;
        }
        if self.config.vertical {
            self.position.y = new_position.y;
        }
    }
}

fn sign_or_zero(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Tickable for Scroller {
    fn tick(&mut self, dt: f32) {
        self.tick_impl(dt);
    }
}

impl GestureSink for Scroller {
    fn on_begin(&mut self, pointer: u64, position: Vec2) {
        if self.active_pointer.is_some() {
            return;
        }
        self.active_pointer = Some(pointer);
        self.drag_begin(position);
    }

    fn on_move(&mut self, pointer: u64, position: Vec2) {
        if self.active_pointer == Some(pointer) {
            self.drag_move(position);
        }
    }

    fn on_end(&mut self, pointer: u64) {
        if self.active_pointer == Some(pointer) {
            self.active_pointer = None;
            self.drag_end();
        }
    }
}
