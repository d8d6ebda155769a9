//! Basic 2D types and tolerances used by the predicates.
//!
//! - `GeomCfg`: relative collinearity epsilon plus the bbox prefilter switch.
//! - `Tol`: absolute thresholds derived from `GeomCfg` for a concrete input.
//! - `Segment2`, `Aabb2`: transient edge and box values.
//! - `Aff2`: 2D affine map used to move polygons around in tests and samplers.

use nalgebra::{Matrix2, Vector2};

/// A point in the plane.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// `eps_orient` is relative: a point counts as lying on a line when its
/// distance to it is at most `eps_orient * s`, with `s` the largest coordinate
/// magnitude of the inputs. Scaling every input by the same factor never
/// changes an answer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_orient: f64,
    pub bbox_prefilter: bool,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_orient: 1e-9,
            bbox_prefilter: true,
        }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps_orient = eps.abs();
        self
    }

    /// Absolute thresholds for inputs whose coordinates are bounded by `scale`.
    /// A zero or non-finite scale (all points at the origin) uses unit scale.
    #[inline]
    pub fn tol_for_scale(&self, scale: f64) -> Tol {
        let s = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Tol {
            dist: self.eps_orient * s,
        }
    }
}

/// Absolute tolerance for one predicate evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tol {
    /// Lengths and point-to-line distances with `|x| <= dist` count as zero.
    pub dist: f64,
}

impl Tol {
    /// Zero tolerance (exact arithmetic semantics).
    pub const EXACT: Tol = Tol { dist: 0.0 };
}

/// Closed segment `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub a: Point2,
    pub b: Point2,
}

impl Segment2 {
    #[inline]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
    #[inline]
    pub fn is_degenerate(&self, tol: Tol) -> bool {
        self.length() <= tol.dist
    }
    #[inline]
    pub fn aabb(&self) -> Aabb2 {
        Aabb2::from_points([self.a, self.b].iter().copied()).unwrap_or(Aabb2 {
            min: self.a,
            max: self.a,
        })
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    /// Smallest box around `points`; `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point2>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut min = first;
        let mut max = first;
        for p in it {
            min = min.inf(&p);
            max = max.sup(&p);
        }
        Some(Self { min, max })
    }

    /// Overlap test with both boxes inflated by `pad`.
    #[inline]
    pub fn overlaps_eps(&self, other: &Aabb2, pad: f64) -> bool {
        self.min.x <= other.max.x + pad
            && other.min.x <= self.max.x + pad
            && self.min.y <= other.max.y + pad
            && other.min.y <= self.max.y + pad
    }

    #[inline]
    pub fn contains_eps(&self, p: Point2, pad: f64) -> bool {
        p.x >= self.min.x - pad
            && p.x <= self.max.x + pad
            && p.y >= self.min.y - pad
            && p.y <= self.max.y + pad
    }

    /// Largest absolute coordinate of the box corners.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.min.abs().max().max(self.max.abs().max())
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aff2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Aff2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    /// Uniform scaling by `s` about `center`.
    #[inline]
    pub fn scaling_about(center: Point2, s: f64) -> Self {
        Self {
            m: Matrix2::identity() * s,
            t: center * (1.0 - s),
        }
    }
    #[inline]
    pub fn rotation(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        self.m * p + self.t
    }
    /// `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Aff2) -> Aff2 {
        Aff2 {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn tolerances_scale_with_magnitude() {
        let cfg = GeomCfg::default();
        let unit = cfg.tol_for_scale(1.0);
        assert_eq!(unit.dist, 1e-9);
        let small = cfg.tol_for_scale(1e-5);
        assert!((small.dist - 1e-14).abs() < 1e-28);
        let big = cfg.tol_for_scale(1e3);
        assert!((big.dist - 1e-6).abs() < 1e-18);
        // NaN or zero scale falls back to unit scale
        assert_eq!(cfg.tol_for_scale(f64::NAN), unit);
        assert_eq!(cfg.tol_for_scale(0.0), unit);
    }

    #[test]
    fn aabb_overlap_is_inclusive() {
        let a = Aabb2::from_points([vector![0.0, 0.0], vector![1.0, 1.0]]).unwrap();
        let b = Aabb2::from_points([vector![1.0, 0.5], vector![2.0, 2.0]]).unwrap();
        let c = Aabb2::from_points([vector![1.5, 0.0], vector![2.0, 2.0]]).unwrap();
        assert!(a.overlaps_eps(&b, 0.0));
        assert!(!a.overlaps_eps(&c, 0.0));
        assert!(a.overlaps_eps(&c, 0.5));
        assert!(Aabb2::from_points(std::iter::empty()).is_none());
        assert_eq!(c.magnitude(), 2.0);
    }

    #[test]
    fn affine_roundtrip_and_scaling() {
        let f = Aff2::rotation(0.3).compose(&Aff2::translation(vector![1.0, -2.0]));
        let g = f.inverse().unwrap();
        let p = vector![0.7, 0.1];
        assert!((g.apply(f.apply(p)) - p).norm() < 1e-12);
        assert!(f.is_orientation_preserving());

        let s = Aff2::scaling_about(vector![1.0, 1.0], 0.5);
        assert!((s.apply(vector![3.0, 1.0]) - vector![2.0, 1.0]).norm() < 1e-12);
        assert!((s.apply(vector![1.0, 1.0]) - vector![1.0, 1.0]).norm() < 1e-12);
    }
}
