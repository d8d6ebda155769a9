//! Boundary-inclusive intersection test for simple polygons in the plane.
//!
//! Overview
//! - `geom2`: points, segments, polygons and the predicates on them.
//! - `project`: explicit 3D → 2D projection done by callers before testing.
//! - `error`: `InvalidPolygonError`, the only failure the predicate reports.
//!
//! All operations are pure functions of their inputs; every public type is a
//! plain value and safe to share across threads.

pub mod error;
pub mod geom2;
pub mod project;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::InvalidPolygonError;
pub use geom2::{intersects, intersects_points, GeomCfg, Point2, Polygon};
pub use project::Plane;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::InvalidPolygonError;
    pub use crate::geom2::rand::{
        draw_pair, draw_polygon_radial, regular_polygon, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        intersects, intersects_points, orient2d, segment_contact, Aabb2, Aff2, GeomCfg,
        Orientation, Point2, PointLocation, Polygon, Segment2, SegmentContact, Tol,
    };
    pub use crate::project::{project_points, Plane};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

/// Build a `Result<Polygon, InvalidPolygonError>` from `x, y` pairs.
///
/// ```
/// let tri = polysect::polygon![0, 0; 1, 0; 0.5, 1].unwrap();
/// assert_eq!(tri.len(), 3);
/// assert!(polysect::polygon![0, 0; 1, 1].is_err());
/// ```
#[macro_export]
macro_rules! polygon {
    ($($x:expr, $y:expr);+ $(;)?) => {
        $crate::geom2::Polygon::new(::std::vec![
            $($crate::geom2::Point2::new(($x) as f64, ($y) as f64)),+
        ])
    };
}
