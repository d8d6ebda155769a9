use super::types::Point2;

/// Twice the signed area of triangle `(a, b, c)`; positive for a left turn.
#[inline]
pub(crate) fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Largest absolute coordinate over all points (0 for an empty slice).
pub(crate) fn coord_magnitude(points: &[Point2]) -> f64 {
    points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max)
}

/// Index of the first vertex that is NaN or infinite.
pub(crate) fn first_non_finite(points: &[Point2]) -> Option<usize> {
    points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
}

/// Position of `v` in `cycle` within `eps` (component-wise), if any.
pub(crate) fn find_close(cycle: &[Point2], v: Point2, eps: f64) -> Option<usize> {
    cycle
        .iter()
        .position(|w| (w.x - v.x).abs() <= eps && (w.y - v.y).abs() <= eps)
}
