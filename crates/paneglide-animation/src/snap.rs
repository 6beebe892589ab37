//! Snap-point target resolution and seek advancement.
//!
//! A snap set is an ordered list of 1-D content coordinates, descending by
//! construction (the first entry is the leftmost/topmost panel). Snapping
//! needs at least two points; degenerate sets make every operation inert.

use smallvec::SmallVec;

/// Distance (content units) within which a seek lands on the target in a
/// single step instead of continuing the exponential approach.
pub const SNAP_CAPTURE_DISTANCE: f32 = 4.0;

/// Distance below which a seek is reported complete.
pub const SNAP_EPSILON: f32 = 0.001;

/// How the active snap target is chosen from the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapMode {
    /// Pick the bracket neighbor in the direction of travel. Used when a
    /// flick re-triggers snapping from a near-aligned rest position.
    Sticky,
    /// Pick by comparing against the midpoints between consecutive points.
    /// Used after free deceleration ends away from any point.
    NearestMidpoint,
}

/// Result of one seek step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapAdvance {
    pub position: f32,
    pub complete: bool,
}

/// Ordered set of snap coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapPoints {
    points: SmallVec<[f32; 8]>,
}

impl SnapPoints {
    pub fn new(points: impl IntoIterator<Item = f32>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Builds the snap set for `panel_count` equally sized panels.
    ///
    /// Panel 0 rests centered in the viewport at
    /// `(viewport_width - panel_width) / 2`; each further panel sits one
    /// panel width to the left, so the coordinates descend.
    pub fn from_panels(panel_count: usize, panel_width: f32, viewport_width: f32) -> Self {
        let first = (viewport_width - panel_width) / 2.0;
        Self {
            points: (0..panel_count)
                .map(|i| first - i as f32 * panel_width)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.points.get(index).copied()
    }

    /// Whether the set is large enough for snapping to take effect.
    pub fn is_snappable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Index of the point closest to `position`, if any.
    pub fn nearest_index(&self, position: f32) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - position)
                    .abs()
                    .partial_cmp(&(*b - position).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }

    /// Resolves the target snap coordinate for the current position.
    ///
    /// `velocity_sign` breaks ties in sticky mode: positive picks the
    /// greater bracket neighbor, anything else the lesser. With fewer than
    /// two points the set is inert and `position` is returned unchanged.
    pub fn resolve_target(&self, position: f32, velocity_sign: f32, mode: SnapMode) -> f32 {
        if !self.is_snappable() {
            log::warn!(
                "snap requested with {} point(s); snapping is inert",
                self.points.len()
            );
            return position;
        }

        let points = &self.points;
        let last = points.len() - 1;

        match mode {
            SnapMode::Sticky => {
                if position >= points[0] {
                    return points[0];
                }
                if position <= points[last] {
                    return points[last];
                }
                for i in 0..last {
                    if position <= points[i] && position >= points[i + 1] {
                        return if velocity_sign > 0.0 {
                            points[i]
                        } else {
                            points[i + 1]
                        };
                    }
                }
                position
            }
            SnapMode::NearestMidpoint => {
                if position >= (points[0] + points[1]) / 2.0 {
                    return points[0];
                }
                if position <= (points[last - 1] + points[last]) / 2.0 {
                    return points[last];
                }
                for i in 1..last {
                    let upper = (points[i - 1] + points[i]) / 2.0;
                    let lower = (points[i] + points[i + 1]) / 2.0;
                    if position < upper && position > lower {
                        return points[i];
                    }
                }
                position
            }
        }
    }
}

/// Advances one seek step from `current` toward `target`.
///
/// The approach is exponential (`target + remaining * e^(-speed * dt)`)
/// until the remaining distance falls within [`SNAP_CAPTURE_DISTANCE`],
/// where the position jumps straight to the target. Completion is reported
/// once the remaining distance is within [`SNAP_EPSILON`]; further calls
/// with the same target leave the position unchanged.
pub fn advance(current: f32, target: f32, slide_speed: f32, dt: f32) -> SnapAdvance {
    let remaining = current - target;
    let position = if remaining.abs() <= SNAP_CAPTURE_DISTANCE {
        target
    } else {
        target + remaining * (-slide_speed * dt).exp()
    };
    SnapAdvance {
        position,
        complete: (position - target).abs() <= SNAP_EPSILON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_panels() -> SnapPoints {
        SnapPoints::new([0.0, -500.0, -1000.0])
    }

    #[test]
    fn test_from_panels_descending() {
        let points = SnapPoints::from_panels(3, 500.0, 500.0);
        assert_eq!(points.as_slice(), &[0.0, -500.0, -1000.0]);

        let centered = SnapPoints::from_panels(2, 400.0, 500.0);
        assert_eq!(centered.as_slice(), &[50.0, -350.0]);
    }

    #[test]
    fn test_sticky_follows_direction_of_travel() {
        let points = three_panels();
        assert_eq!(
            points.resolve_target(-250.0, -1.0, SnapMode::Sticky),
            -500.0
        );
        assert_eq!(points.resolve_target(-250.0, 1.0, SnapMode::Sticky), 0.0);
    }

    #[test]
    fn test_sticky_clamps_to_extremes() {
        let points = three_panels();
        assert_eq!(points.resolve_target(250.0, -1.0, SnapMode::Sticky), 0.0);
        assert_eq!(
            points.resolve_target(-1500.0, 1.0, SnapMode::Sticky),
            -1000.0
        );
    }

    #[test]
    fn test_nearest_midpoint_picks_closest_point() {
        let points = three_panels();
        assert_eq!(
            points.resolve_target(-100.0, 0.0, SnapMode::NearestMidpoint),
            0.0
        );
        assert_eq!(
            points.resolve_target(-400.0, 0.0, SnapMode::NearestMidpoint),
            -500.0
        );
        assert_eq!(
            points.resolve_target(-600.0, 0.0, SnapMode::NearestMidpoint),
            -500.0
        );
        assert_eq!(
            points.resolve_target(-900.0, 0.0, SnapMode::NearestMidpoint),
            -1000.0
        );
    }

    #[test]
    fn test_degenerate_set_is_inert() {
        let single = SnapPoints::new([0.0]);
        assert!(!single.is_snappable());
        assert_eq!(single.resolve_target(-250.0, -1.0, SnapMode::Sticky), -250.0);

        let empty = SnapPoints::default();
        assert!(!empty.is_snappable());
        assert_eq!(
            empty.resolve_target(42.0, 1.0, SnapMode::NearestMidpoint),
            42.0
        );
    }

    #[test]
    fn test_advance_exponential_then_capture() {
        let step = advance(-250.0, -500.0, 8.0, 0.1);
        assert!(!step.complete);
        assert!(step.position < -250.0 && step.position > -500.0);

        // Within the capture band the seek lands exactly.
        let capture = advance(-497.0, -500.0, 8.0, 0.1);
        assert_eq!(capture.position, -500.0);
        assert!(capture.complete);
    }

    #[test]
    fn test_advance_idempotent_once_complete() {
        let done = advance(-500.0, -500.0, 8.0, 0.1);
        assert!(done.complete);
        assert_eq!(done.position, -500.0);

        let again = advance(done.position, -500.0, 8.0, 0.1);
        assert_eq!(again.position, done.position);
        assert!(again.complete);
    }

    #[test]
    fn test_nearest_index() {
        let points = three_panels();
        assert_eq!(points.nearest_index(-100.0), Some(0));
        assert_eq!(points.nearest_index(-700.0), Some(1));
        assert_eq!(points.nearest_index(-9999.0), Some(2));
        assert_eq!(SnapPoints::default().nearest_index(0.0), None);
    }
}
