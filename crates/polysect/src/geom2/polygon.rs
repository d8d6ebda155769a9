//! Validated polygon value type (V-representation).
//!
//! Invariants:
//! - At least three vertices.
//! - All coordinates finite.
//!
//! Simplicity (no self-crossing edges) and distinct consecutive vertices are
//! the caller's responsibility. Violating them never panics: the predicates
//! treat zero-length edges as points and still return a defined answer.

use std::fmt;

use super::predicates::point_on_segment;
use super::types::{Aabb2, Aff2, GeomCfg, Point2, Segment2, Tol};
use super::util::{coord_magnitude, cross, find_close, first_non_finite};
use crate::error::InvalidPolygonError;

/// Where a point lies relative to a closed polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    OnBoundary,
    Outside,
}

impl PointLocation {
    /// Boundary-inclusive membership.
    #[inline]
    pub fn is_covered(&self) -> bool {
        !matches!(self, PointLocation::Outside)
    }
}

/// Closed simple polygon; edges join consecutive vertices, last to first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point2>) -> Result<Self, InvalidPolygonError> {
        if vertices.len() < 3 {
            return Err(InvalidPolygonError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if let Some(index) = first_non_finite(&vertices) {
            return Err(InvalidPolygonError::NonFiniteCoordinate { index });
        }
        Ok(Self { vertices })
    }

    pub fn from_slice(vertices: &[Point2]) -> Result<Self, InvalidPolygonError> {
        Self::new(vertices.to_vec())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in vertex order, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment2> + '_ {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| Segment2::new(a, b))
    }

    /// Shoelace area; positive for counter-clockwise order.
    pub fn signed_area(&self) -> f64 {
        let o = self.vertices[0];
        self.edges().map(|e| cross(o, e.a, e.b)).sum::<f64>() * 0.5
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Area centroid; the vertex mean when the area vanishes.
    pub fn centroid(&self) -> Point2 {
        let o = self.vertices[0];
        let mut a2 = 0.0;
        let mut acc = Point2::zeros();
        for e in self.edges() {
            let w = cross(o, e.a, e.b);
            a2 += w;
            acc += (o + e.a + e.b) * w;
        }
        let scale = coord_magnitude(&self.vertices);
        if a2.abs() <= 1e-12 * scale * scale {
            let n = self.vertices.len() as f64;
            return self.vertices.iter().fold(Point2::zeros(), |s, v| s + v) / n;
        }
        acc / (3.0 * a2)
    }

    pub fn aabb(&self) -> Aabb2 {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.inf(v);
            max = max.sup(v);
        }
        Aabb2 { min, max }
    }

    /// Same loop traversed in the opposite direction.
    pub fn reversed(&self) -> Polygon {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Polygon { vertices }
    }

    /// Image under an affine map. Fails only if the map overflows a coordinate.
    pub fn map(&self, f: &Aff2) -> Result<Polygon, InvalidPolygonError> {
        Polygon::new(self.vertices.iter().map(|&v| f.apply(v)).collect())
    }

    /// Point location with the default tolerances.
    #[inline]
    pub fn locate(&self, p: Point2) -> PointLocation {
        self.locate_cfg(p, GeomCfg::default())
    }

    pub fn locate_cfg(&self, p: Point2, cfg: GeomCfg) -> PointLocation {
        let scale = coord_magnitude(&self.vertices).max(p.x.abs().max(p.y.abs()));
        self.locate_with_tol(p, cfg.tol_for_scale(scale))
    }

    /// Winding-number rule with an explicit boundary check first.
    pub(crate) fn locate_with_tol(&self, p: Point2, tol: Tol) -> PointLocation {
        if self.edges().any(|e| point_on_segment(p, e, tol)) {
            return PointLocation::OnBoundary;
        }
        let mut winding = 0i64;
        for e in self.edges() {
            if e.a.y <= p.y {
                if e.b.y > p.y && cross(e.a, e.b, p) > 0.0 {
                    winding += 1;
                }
            } else if e.b.y <= p.y && cross(e.a, e.b, p) < 0.0 {
                winding -= 1;
            }
        }
        if winding != 0 {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }

    /// Boundary-inclusive membership.
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        self.locate(p).is_covered()
    }

    /// Same vertex cycle (within `eps`) up to a cyclic shift and reversal.
    pub fn coincides(&self, other: &Polygon, eps: f64) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        let Some(start) = find_close(&self.vertices, other.vertices[0], eps) else {
            return false;
        };
        let close = |a: Point2, b: Point2| (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps;
        let forward = (0..n).all(|k| close(self.vertices[(start + k) % n], other.vertices[k]));
        let backward =
            (0..n).all(|k| close(self.vertices[(start + n - k) % n], other.vertices[k]));
        forward || backward
    }

    /// Boundary-inclusive overlap test with the default tolerances.
    #[inline]
    pub fn intersects(&self, other: &Polygon) -> bool {
        super::intersect::intersects(self, other, GeomCfg::default())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon(")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", v.x, v.y)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<Point2>> for Polygon {
    type Error = InvalidPolygonError;

    fn try_from(vertices: Vec<Point2>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}
