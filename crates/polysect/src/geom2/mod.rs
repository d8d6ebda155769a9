//! Planar polygon geometry (V-representation only).
//!
//! Purpose
//! - Decide whether two simple polygons share a point (interior or boundary).
//! - Keep the numerics explicit: every predicate takes a `Tol` derived from
//!   `GeomCfg` and the input magnitude.
//!
//! Layout
//! - `types`: `GeomCfg`, `Tol`, `Segment2`, `Aabb2`, `Aff2`.
//! - `predicates`: orientation, point-on-segment, segment contact.
//! - `polygon`: validated `Polygon` with point location.
//! - `intersect`: the polygon/polygon predicate.
//! - `rand`: reproducible random simple polygons.

mod intersect;
mod polygon;
mod predicates;
pub mod rand;
mod types;
mod util;

pub use intersect::{first_edge_contact, intersects, intersects_points, shared_tol};
pub use polygon::{PointLocation, Polygon};
pub use predicates::{orient2d, point_on_segment, segment_contact, Orientation, SegmentContact};
pub use types::{Aabb2, Aff2, GeomCfg, Point2, Segment2, Tol};
