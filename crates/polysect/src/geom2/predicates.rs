//! Orientation and segment predicates with explicit tolerances.
//!
//! - `orient2d`: sign of the cross product; points within `tol.dist` of the
//!   line count as collinear.
//! - `point_on_segment`: closed-segment membership.
//! - `segment_contact`: classify how two closed segments meet.
//!
//! All predicates are symmetric in their segment arguments: swapping `s` and `t`
//! evaluates the same four orientations in a different order.

use super::types::{Point2, Segment2, Tol};
use super::util::cross;

/// Turn direction of `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Orientation of `c` relative to the directed line `a → b`.
///
/// The cross product is `|b - a|` times the distance of `c` to the line, so
/// the band is scaled by the segment length.
#[inline]
pub fn orient2d(a: Point2, b: Point2, c: Point2, tol: Tol) -> Orientation {
    let d = cross(a, b, c);
    let band = tol.dist * (b - a).norm();
    if d > band {
        Orientation::CounterClockwise
    } else if d < -band {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// How two closed segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentContact {
    /// No common point.
    Disjoint,
    /// A single common point that is an endpoint of at least one segment.
    Touch,
    /// Proper crossing at a point interior to both segments.
    Cross,
    /// Collinear with a common sub-segment of positive length.
    Overlap,
}

impl SegmentContact {
    #[inline]
    pub fn is_disjoint(&self) -> bool {
        matches!(self, SegmentContact::Disjoint)
    }
    #[inline]
    pub fn meets(&self) -> bool {
        !self.is_disjoint()
    }
}

/// Closed-segment membership. Zero-length segments behave as points.
#[inline]
pub fn point_on_segment(p: Point2, s: Segment2, tol: Tol) -> bool {
    if s.is_degenerate(tol) {
        return (p - s.a).norm() <= tol.dist;
    }
    orient2d(s.a, s.b, p, tol) == Orientation::Collinear && within_box(p, s, tol)
}

#[inline]
fn within_box(p: Point2, s: Segment2, tol: Tol) -> bool {
    s.aabb().contains_eps(p, tol.dist)
}

/// Classify the contact between segments `s` and `t`.
pub fn segment_contact(s: Segment2, t: Segment2, tol: Tol) -> SegmentContact {
    match (s.is_degenerate(tol), t.is_degenerate(tol)) {
        (true, true) => {
            return if (s.a - t.a).norm() <= tol.dist {
                SegmentContact::Touch
            } else {
                SegmentContact::Disjoint
            };
        }
        (true, false) => return touch_if(point_on_segment(s.a, t, tol)),
        (false, true) => return touch_if(point_on_segment(t.a, s, tol)),
        (false, false) => {}
    }

    use Orientation::Collinear;
    let o1 = orient2d(s.a, s.b, t.a, tol);
    let o2 = orient2d(s.a, s.b, t.b, tol);
    let o3 = orient2d(t.a, t.b, s.a, tol);
    let o4 = orient2d(t.a, t.b, s.b, tol);

    if (o1 == Collinear && o2 == Collinear) || (o3 == Collinear && o4 == Collinear) {
        return collinear_contact(s, t, tol);
    }
    if o1 != Collinear && o2 != Collinear && o1 != o2 && o3 != Collinear && o4 != Collinear && o3 != o4
    {
        return SegmentContact::Cross;
    }
    let touches = (o1 == Collinear && within_box(t.a, s, tol))
        || (o2 == Collinear && within_box(t.b, s, tol))
        || (o3 == Collinear && within_box(s.a, t, tol))
        || (o4 == Collinear && within_box(s.b, t, tol));
    touch_if(touches)
}

#[inline]
fn touch_if(hit: bool) -> SegmentContact {
    if hit {
        SegmentContact::Touch
    } else {
        SegmentContact::Disjoint
    }
}

/// Both segments lie on (nearly) one line. Measure along the longer one,
/// after checking that the shorter one really sits on its line.
fn collinear_contact(s: Segment2, t: Segment2, tol: Tol) -> SegmentContact {
    let (long, short) = if key(&s) >= key(&t) { (s, t) } else { (t, s) };
    let len = long.length();
    let dir = long.direction() / len;
    let offset = |p: Point2| {
        let d = p - long.a;
        (dir.x * d.y - dir.y * d.x).abs()
    };
    if offset(short.a) > tol.dist || offset(short.b) > tol.dist {
        // not on one line after all; only endpoint contact is possible
        return touch_if(
            point_on_segment(short.a, long, tol)
                || point_on_segment(short.b, long, tol)
                || point_on_segment(long.a, short, tol)
                || point_on_segment(long.b, short, tol),
        );
    }
    let ta = (short.a - long.a).dot(&dir);
    let tb = (short.b - long.a).dot(&dir);
    let overlap = len.min(ta.max(tb)) - ta.min(tb).max(0.0);
    if overlap < -tol.dist {
        SegmentContact::Disjoint
    } else if overlap <= tol.dist {
        SegmentContact::Touch
    } else {
        SegmentContact::Overlap
    }
}

/// Total order on segments used to pick the reference line, so that swapping
/// the arguments of `collinear_contact` picks the same one.
#[inline]
fn key(s: &Segment2) -> (f64, f64, f64, f64, f64) {
    (s.length(), s.a.x, s.a.y, s.b.x, s.b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::GeomCfg;
    use nalgebra::vector;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment2 {
        Segment2::new(vector![ax, ay], vector![bx, by])
    }

    fn tol() -> Tol {
        GeomCfg::default().tol_for_scale(1.0)
    }

    #[test]
    fn orientation_with_band() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert_eq!(orient2d(a, b, vector![0.5, 1.0], tol()), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, b, vector![0.5, -1.0], tol()), Orientation::Clockwise);
        assert_eq!(orient2d(a, b, vector![0.5, 1e-12], tol()), Orientation::Collinear);
        assert_eq!(
            orient2d(a, b, vector![0.5, 1e-12], Tol::EXACT),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn proper_crossing() {
        let s = seg(0.0, 0.0, 1.0, 1.0);
        let t = seg(0.0, 1.0, 1.0, 0.0);
        assert_eq!(segment_contact(s, t, tol()), SegmentContact::Cross);
        assert_eq!(segment_contact(t, s, tol()), SegmentContact::Cross);
    }

    #[test]
    fn touching_cases() {
        // shared endpoint
        let s = seg(0.0, 0.0, 1.0, 0.0);
        let t = seg(1.0, 0.0, 2.0, 1.0);
        assert_eq!(segment_contact(s, t, tol()), SegmentContact::Touch);
        // T-junction: endpoint of t in the middle of s
        let t2 = seg(0.5, 0.0, 0.5, 1.0);
        assert_eq!(segment_contact(s, t2, tol()), SegmentContact::Touch);
        assert_eq!(segment_contact(t2, s, tol()), SegmentContact::Touch);
        // nearly touching, within floating noise
        let t3 = seg(0.5, 1e-13, 0.5, 1.0);
        assert_eq!(segment_contact(s, t3, tol()), SegmentContact::Touch);
        // clearly apart
        let t4 = seg(0.5, 1e-3, 0.5, 1.0);
        assert_eq!(segment_contact(s, t4, tol()), SegmentContact::Disjoint);
    }

    #[test]
    fn collinear_cases() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(
            segment_contact(s, seg(1.0, 0.0, 3.0, 0.0), tol()),
            SegmentContact::Overlap
        );
        assert_eq!(
            segment_contact(s, seg(3.0, 0.0, 2.0, 0.0), tol()),
            SegmentContact::Touch
        );
        assert_eq!(
            segment_contact(s, seg(2.5, 0.0, 3.0, 0.0), tol()),
            SegmentContact::Disjoint
        );
        // vertical collinear overlap uses the y extent
        let v = seg(0.0, 0.0, 0.0, 2.0);
        assert_eq!(
            segment_contact(v, seg(0.0, 1.0, 0.0, 0.5), tol()),
            SegmentContact::Overlap
        );
        // parallel but offset
        assert_eq!(
            segment_contact(s, seg(0.0, 0.5, 2.0, 0.5), tol()),
            SegmentContact::Disjoint
        );
    }

    #[test]
    fn degenerate_segments_act_as_points() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        let p_on = seg(1.0, 0.0, 1.0, 0.0);
        let p_off = seg(1.0, 0.1, 1.0, 0.1);
        assert_eq!(segment_contact(s, p_on, tol()), SegmentContact::Touch);
        assert_eq!(segment_contact(p_on, s, tol()), SegmentContact::Touch);
        assert_eq!(segment_contact(s, p_off, tol()), SegmentContact::Disjoint);
        assert_eq!(segment_contact(p_on, p_on, tol()), SegmentContact::Touch);
        assert_eq!(segment_contact(p_on, p_off, tol()), SegmentContact::Disjoint);
        assert!(point_on_segment(vector![1.0, 0.0], p_on, tol()));
    }

    #[test]
    fn short_segment_does_not_widen_the_collinear_band() {
        // long enough not to be degenerate, but far shorter than its distance to t
        let s = seg(0.8 + 1.5e-9, 0.1, 0.8, 0.1);
        let t = seg(-1.0, -0.5, 1.0, 0.5);
        let tol = GeomCfg::default().tol_for_scale(1.2);
        assert!(!s.is_degenerate(tol));
        assert_ne!(orient2d(s.a, s.b, t.a, tol), Orientation::Collinear);
        assert_eq!(segment_contact(s, t, tol), SegmentContact::Disjoint);
        assert_eq!(segment_contact(t, s, tol), SegmentContact::Disjoint);
    }

    #[test]
    fn parallel_offset_beyond_tolerance_is_disjoint() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        let t = seg(0.2, 1e-6, 0.8, 1e-6);
        assert_eq!(segment_contact(s, t, tol()), SegmentContact::Disjoint);
        let close = seg(0.2, 1e-12, 0.8, 1e-12);
        assert_eq!(segment_contact(s, close, tol()), SegmentContact::Overlap);
        assert_eq!(segment_contact(close, s, tol()), SegmentContact::Overlap);
    }

    #[test]
    fn contact_predicates() {
        assert!(SegmentContact::Disjoint.is_disjoint());
        assert!(SegmentContact::Touch.meets());
        assert!(SegmentContact::Overlap.meets());
    }
}
