//! Explicit 3D → 2D projection onto coordinate planes.
//!
//! The predicate only ever sees 2D polygons. Callers holding 3D point triples
//! choose a plane here (dropping z is `Plane::Xy`) before building a `Polygon`.

use nalgebra::Vector3;

use crate::error::InvalidPolygonError;
use crate::geom2::{Point2, Polygon};

/// Coordinate plane to project onto; the remaining axis is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Drop z.
    #[default]
    Xy,
    /// Drop y.
    Xz,
    /// Drop x.
    Yz,
}

impl Plane {
    #[inline]
    pub fn project(&self, p: Vector3<f64>) -> Point2 {
        match self {
            Plane::Xy => Point2::new(p.x, p.y),
            Plane::Xz => Point2::new(p.x, p.z),
            Plane::Yz => Point2::new(p.y, p.z),
        }
    }

    /// Plane that best preserves the loop `points`: the one orthogonal to the
    /// largest component of its Newell normal. Ties prefer `Xy`, then `Xz`.
    ///
    /// `None` for fewer than three points or a (numerically) zero normal.
    pub fn dominant(points: &[Vector3<f64>]) -> Option<Plane> {
        if points.len() < 3 {
            return None;
        }
        let n = newell_normal(points);
        let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
        let m = ax.max(ay).max(az);
        if !m.is_finite() || m <= 0.0 {
            return None;
        }
        Some(if az >= ay && az >= ax {
            Plane::Xy
        } else if ay >= ax {
            Plane::Xz
        } else {
            Plane::Yz
        })
    }
}

impl std::str::FromStr for Plane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xy" => Ok(Plane::Xy),
            "xz" => Ok(Plane::Xz),
            "yz" => Ok(Plane::Yz),
            other => Err(format!("unknown plane '{other}' (expected xy, xz or yz)")),
        }
    }
}

/// Area-weighted normal of a closed 3D loop (twice the vector area).
pub fn newell_normal(points: &[Vector3<f64>]) -> Vector3<f64> {
    let mut n = Vector3::zeros();
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        n.x += (p.y - q.y) * (p.z + q.z);
        n.y += (p.z - q.z) * (p.x + q.x);
        n.z += (p.x - q.x) * (p.y + q.y);
    }
    n
}

pub fn project_points(points: &[Vector3<f64>], plane: Plane) -> Vec<Point2> {
    points.iter().map(|&p| plane.project(p)).collect()
}

impl Polygon {
    /// Project `points` onto `plane` and validate the result as a polygon.
    pub fn from_points3(
        points: &[Vector3<f64>],
        plane: Plane,
    ) -> Result<Polygon, InvalidPolygonError> {
        Polygon::new(project_points(points, plane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn tilted_triangle() -> Vec<Vector3<f64>> {
        vec![
            vector![-2.5, -2.5, 0.0],
            vector![2.5, -2.5, 0.0],
            vector![0.0, 0.0, 5.0],
        ]
    }

    #[test]
    fn drops_the_named_axis() {
        let p = vector![1.0, 2.0, 3.0];
        assert_eq!(Plane::Xy.project(p), vector![1.0, 2.0]);
        assert_eq!(Plane::Xz.project(p), vector![1.0, 3.0]);
        assert_eq!(Plane::Yz.project(p), vector![2.0, 3.0]);
        assert_eq!(Plane::default(), Plane::Xy);
    }

    #[test]
    fn polygon_from_triples_drops_z() {
        let poly = Polygon::from_points3(&tilted_triangle(), Plane::Xy).unwrap();
        assert_eq!(
            poly.vertices(),
            &[vector![-2.5, -2.5], vector![2.5, -2.5], vector![0.0, 0.0]]
        );
        let short = Polygon::from_points3(&tilted_triangle()[..2], Plane::Xy);
        assert_eq!(
            short,
            Err(InvalidPolygonError::TooFewVertices { count: 2 })
        );
    }

    #[test]
    fn dominant_plane_follows_newell_normal() {
        // normal (0, -25, 12.5): y dominates
        assert_eq!(Plane::dominant(&tilted_triangle()), Some(Plane::Xz));
        let flat = vec![
            vector![0.0, 0.0, 1.0],
            vector![1.0, 0.0, 1.0],
            vector![0.0, 1.0, 1.0],
        ];
        assert_eq!(Plane::dominant(&flat), Some(Plane::Xy));
        let wall = vec![
            vector![0.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
            vector![0.0, 0.0, 1.0],
        ];
        assert_eq!(Plane::dominant(&wall), Some(Plane::Yz));
        let line = vec![
            vector![0.0, 0.0, 0.0],
            vector![1.0, 1.0, 1.0],
            vector![2.0, 2.0, 2.0],
        ];
        assert_eq!(Plane::dominant(&line), None);
        assert_eq!(Plane::dominant(&flat[..2]), None);
    }

    #[test]
    fn parses_plane_names() {
        assert_eq!("XZ".parse::<Plane>(), Ok(Plane::Xz));
        assert_eq!(" yz ".parse::<Plane>(), Ok(Plane::Yz));
        assert!("xw".parse::<Plane>().is_err());
    }
}
