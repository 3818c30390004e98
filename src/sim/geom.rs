//! Point/segment distance, the primitive behind slice hit-testing
//!
//! A slice gesture is a polyline; a fruit is hit when its center comes
//! within its radius of any segment of that polyline.

use glam::Vec2;

/// Distance from `p` to the closest point on the finite segment `ab`.
///
/// Degenerates to plain point distance when `a == b`. Callers supply the
/// hit threshold; no tolerance is built in.
#[inline]
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.length_squared();

    if len_sq == 0.0 {
        return ap.length();
    }

    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_on_segment_is_zero() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(point_segment_distance(Vec2::new(5.0, 0.0), a, b) < 1e-6);
        assert!(point_segment_distance(a, a, b) < 1e-6);
        assert!(point_segment_distance(b, a, b) < 1e-6);
    }

    #[test]
    fn test_degenerate_segment() {
        let a = Vec2::new(3.0, 4.0);
        let p = Vec2::new(0.0, 0.0);
        assert!((point_segment_distance(p, a, a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Beyond b: closest point is b itself
        let d = point_segment_distance(Vec2::new(13.0, 4.0), a, b);
        assert!((d - 5.0).abs() < 1e-6);
        // Before a: closest point is a
        let d = point_segment_distance(Vec2::new(-3.0, 4.0), a, b);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_perpendicular_distance() {
        let a = Vec2::new(100.0, 80.0);
        let b = Vec2::new(100.0, 130.0);
        let d = point_segment_distance(Vec2::new(100.0, 100.0), a, b);
        assert!(d < 1e-6);
        // Segment entirely above the point
        let d = point_segment_distance(Vec2::new(100.0, 100.0), a, Vec2::new(100.0, 85.0));
        assert!((d - 15.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn distance_symmetric_under_swap(
            px in -1e3f32..1e3, py in -1e3f32..1e3,
            ax in -1e3f32..1e3, ay in -1e3f32..1e3,
            bx in -1e3f32..1e3, by in -1e3f32..1e3,
        ) {
            let p = Vec2::new(px, py);
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let d1 = point_segment_distance(p, a, b);
            let d2 = point_segment_distance(p, b, a);
            prop_assert!((d1 - d2).abs() <= 1e-2 * d1.abs().max(1.0));
        }

        #[test]
        fn distance_bounded_by_endpoints(
            px in -1e3f32..1e3, py in -1e3f32..1e3,
            ax in -1e3f32..1e3, ay in -1e3f32..1e3,
            bx in -1e3f32..1e3, by in -1e3f32..1e3,
        ) {
            let p = Vec2::new(px, py);
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let d = point_segment_distance(p, a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= (p - a).length() + 1e-3);
            prop_assert!(d <= (p - b).length() + 1e-3);
        }
    }
}
