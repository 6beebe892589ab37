//! Out-of-bounds offset calculation and content bounds expansion.
//!
//! Pure geometry over immutable inputs; the scroller façade calls
//! [`calculate_offset`] several times per tick with different deltas.

use paneglide_core::{Bounds, MovementMode, Vec2};

/// Tolerance for edge-alignment comparisons.
const EDGE_EPSILON: f32 = 0.001;

/// Computes the correction needed to bring content back inside the viewport.
///
/// The content bounds are evaluated as if shifted by `delta`. At most one
/// edge correction fires per axis per call. Edge precedence differs between
/// the axes: horizontal checks the near (min) edge first, vertical the far
/// (max) edge first. Callers rely on this exact ordering; do not "fix" it.
pub fn calculate_offset(
    view: Bounds,
    content: Bounds,
    horizontal: bool,
    vertical: bool,
    movement: MovementMode,
    delta: Vec2,
) -> Vec2 {
    let mut offset = Vec2::ZERO;
    if movement == MovementMode::Unrestricted {
        return offset;
    }

    if horizontal {
        let min = content.min.x + delta.x;
        let max = content.max.x + delta.x;
        if min > view.min.x + EDGE_EPSILON {
            offset.x = view.min.x - min;
        } else if max < view.max.x - EDGE_EPSILON {
            offset.x = view.max.x - max;
        }
    }

    if vertical {
        let min = content.min.y + delta.y;
        let max = content.max.y + delta.y;
        if max < view.max.y - EDGE_EPSILON {
            offset.y = view.max.y - max;
        } else if min > view.min.y + EDGE_EPSILON {
            offset.y = view.min.y - min;
        }
    }

    offset
}

/// Expands content bounds so they are never smaller than the viewport on an
/// enabled axis.
///
/// Where the viewport exceeds the content, the content size grows to match
/// and its center shifts by `excess * (pivot - 0.5)`, so the pivot decides
/// which side absorbs the padding. Content already at least viewport-sized
/// is returned untouched on that axis.
pub fn adjust_bounds(
    view: Bounds,
    pivot: Vec2,
    content: Bounds,
    horizontal: bool,
    vertical: bool,
) -> Bounds {
    let view_size = view.size();
    let mut size = content.size();
    let mut center = content.center();

    if horizontal && view_size.x > size.x {
        let excess = view_size.x - size.x;
        center.x += excess * (pivot.x - 0.5);
        size.x = view_size.x;
    }
    if vertical && view_size.y > size.y {
        let excess = view_size.y - size.y;
        center.y += excess * (pivot.y - 0.5);
        size.y = view_size.y;
    }

    Bounds::from_center_size(center, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Bounds {
        Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(500.0, 300.0))
    }

    #[test]
    fn test_unrestricted_never_corrects() {
        let content = Bounds::new(Vec2::new(400.0, 0.0), Vec2::new(1900.0, 300.0));
        let offset = calculate_offset(
            view(),
            content,
            true,
            true,
            MovementMode::Unrestricted,
            Vec2::ZERO,
        );
        assert_eq!(offset, Vec2::ZERO);
    }

    #[test]
    fn test_near_edge_correction_horizontal() {
        // Content drifted right: a gap opened at the left edge.
        let content = Bounds::new(Vec2::new(100.0, 0.0), Vec2::new(1600.0, 300.0));
        let offset = calculate_offset(
            view(),
            content,
            true,
            false,
            MovementMode::Clamped,
            Vec2::ZERO,
        );
        assert_eq!(offset.x, -100.0);
        assert_eq!(offset.y, 0.0);
    }

    #[test]
    fn test_far_edge_correction_horizontal() {
        // Content drifted left past the right edge.
        let content = Bounds::new(Vec2::new(-1200.0, 0.0), Vec2::new(300.0, 300.0));
        let offset = calculate_offset(
            view(),
            content,
            true,
            false,
            MovementMode::Clamped,
            Vec2::ZERO,
        );
        assert_eq!(offset.x, 200.0);
    }

    #[test]
    fn test_delta_is_applied_before_checking() {
        let content = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(1500.0, 300.0));
        let offset = calculate_offset(
            view(),
            content,
            true,
            false,
            MovementMode::Clamped,
            Vec2::new(250.0, 0.0),
        );
        assert_eq!(offset.x, -250.0);
    }

    #[test]
    fn test_disabled_axis_yields_zero() {
        let content = Bounds::new(Vec2::new(100.0, 50.0), Vec2::new(1600.0, 350.0));
        let offset = calculate_offset(
            view(),
            content,
            false,
            false,
            MovementMode::Clamped,
            Vec2::ZERO,
        );
        assert_eq!(offset, Vec2::ZERO);
    }

    #[test]
    fn test_vertical_checks_far_edge_first() {
        // Content smaller than the viewport violates both edges at once on
        // the vertical axis; the far-edge rule must win there, while the
        // same situation horizontally resolves by the near edge.
        let content = Bounds::new(Vec2::new(100.0, 100.0), Vec2::new(400.0, 250.0));
        let offset = calculate_offset(
            view(),
            content,
            true,
            true,
            MovementMode::Clamped,
            Vec2::ZERO,
        );
        // Horizontal: near edge aligns min (100 -> 0).
        assert_eq!(offset.x, -100.0);
        // Vertical: far edge aligns max (250 -> 300).
        assert_eq!(offset.y, 50.0);
    }

    #[test]
    fn test_adjust_bounds_grows_to_viewport() {
        let content = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(200.0, 300.0));
        let adjusted = adjust_bounds(view(), Vec2::new(0.5, 0.5), content, true, true);
        assert_eq!(adjusted.size(), Vec2::new(500.0, 300.0));
        // Centered pivot pads both sides equally.
        assert_eq!(adjusted.center().x, content.center().x);
    }

    #[test]
    fn test_adjust_bounds_pivot_shifts_padding() {
        let content = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(200.0, 300.0));
        // Pivot 1.0 keeps the min edge fixed; the padding grows rightward.
        let adjusted = adjust_bounds(view(), Vec2::new(1.0, 0.5), content, true, true);
        assert_eq!(adjusted.size().x, 500.0);
        assert!((adjusted.min.x - 0.0).abs() < 1e-4);
        assert!((adjusted.max.x - 500.0).abs() < 1e-4);
    }

    #[test]
    fn test_adjust_bounds_leaves_large_content_alone() {
        let content = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(1500.0, 300.0));
        let adjusted = adjust_bounds(view(), Vec2::new(0.5, 0.5), content, true, true);
        assert_eq!(adjusted, content);
    }
}
