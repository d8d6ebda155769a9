//! Boundary-inclusive intersection test for two simple polygons.
//!
//! Algorithm
//! - Optional prefilter: tolerance-inflated bounding boxes must overlap.
//! - Edge pairs: any crossing, touch or collinear overlap means the closed
//!   regions meet.
//! - Containment: with no boundary contact, either one polygon lies inside the
//!   other or they are disjoint. One vertex of each, located in the other,
//!   decides which.
//!
//! Tolerances come from `GeomCfg`, scaled by the largest coordinate of both
//! inputs. The same `Tol` is used for every sub-test, so the result is
//! symmetric in its arguments.

use super::polygon::Polygon;
use super::predicates::{segment_contact, SegmentContact};
use super::types::{GeomCfg, Point2, Tol};
use crate::error::InvalidPolygonError;

/// Do the closed regions of `a` and `b` share at least one point?
pub fn intersects(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> bool {
    let tol = shared_tol(a, b, cfg);
    if cfg.bbox_prefilter && !a.aabb().overlaps_eps(&b.aabb(), tol.dist) {
        return false;
    }
    if first_edge_contact(a, b, tol).is_some() {
        return true;
    }
    a.locate_with_tol(b.vertices()[0], tol).is_covered()
        || b.locate_with_tol(a.vertices()[0], tol).is_covered()
}

/// Slice-level entry point: validate both vertex lists, then test with defaults.
pub fn intersects_points(a: &[Point2], b: &[Point2]) -> Result<bool, InvalidPolygonError> {
    let pa = Polygon::from_slice(a)?;
    let pb = Polygon::from_slice(b)?;
    Ok(intersects(&pa, &pb, GeomCfg::default()))
}

/// First pair of edges (indices into `a` and `b`) whose closed segments meet.
pub fn first_edge_contact(
    a: &Polygon,
    b: &Polygon,
    tol: Tol,
) -> Option<(usize, usize, SegmentContact)> {
    for (i, ea) in a.edges().enumerate() {
        let box_a = ea.aabb();
        for (j, eb) in b.edges().enumerate() {
            if !box_a.overlaps_eps(&eb.aabb(), tol.dist) {
                continue;
            }
            let contact = segment_contact(ea, eb, tol);
            if contact.meets() {
                return Some((i, j, contact));
            }
        }
    }
    None
}

/// Absolute tolerances for the pair `(a, b)`.
pub fn shared_tol(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> Tol {
    let scale = a.aabb().magnitude().max(b.aabb().magnitude());
    cfg.tol_for_scale(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn poly(pts: &[(f64, f64)]) -> Polygon {
        Polygon::new(pts.iter().map(|&(x, y)| vector![x, y]).collect()).unwrap()
    }

    #[test]
    fn prefilter_does_not_change_answers() {
        let a = poly(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);
        let b = poly(&[(1.0, 0.0), (2.0, 0.0), (1.5, 1.0)]);
        let c = poly(&[(1.5, 0.0), (2.0, 0.0), (1.75, 1.0)]);
        let off = GeomCfg {
            bbox_prefilter: false,
            ..GeomCfg::default()
        };
        for (p, q) in [(&a, &b), (&a, &c), (&b, &c)] {
            assert_eq!(
                intersects(p, q, GeomCfg::default()),
                intersects(p, q, off)
            );
        }
        assert!(intersects(&a, &b, off));
        assert!(!intersects(&a, &c, off));
    }

    #[test]
    fn edge_contact_reports_kind() {
        let a = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let b = poly(&[(2.0, 0.5), (3.0, 0.5), (3.0, 1.5), (2.0, 1.5)]);
        let tol = shared_tol(&a, &b, GeomCfg::default());
        let (i, j, kind) = first_edge_contact(&a, &b, tol).expect("shared wall");
        assert_eq!(kind, SegmentContact::Touch);
        assert_eq!(i, 1);
        assert_eq!(j, 0);
        let far = a.map(&crate::geom2::Aff2::translation(vector![10.0, 0.0])).unwrap();
        assert!(first_edge_contact(&a, &far, tol).is_none());
    }

    #[test]
    fn slice_entry_point_validates() {
        let tri = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let two = [vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(intersects_points(&tri, &tri), Ok(true));
        assert_eq!(
            intersects_points(&tri, &two),
            Err(InvalidPolygonError::TooFewVertices { count: 2 })
        );
        assert_eq!(
            intersects_points(&two, &tri),
            Err(InvalidPolygonError::TooFewVertices { count: 2 })
        );
    }

    #[test]
    fn large_coordinates_use_scaled_tolerance() {
        let s = 1e6;
        let a = poly(&[(0.0, 0.0), (s, 0.0), (s, s)]);
        // touches the hypotenuse up to rounding noise
        let b = poly(&[(0.5 * s, 0.5 * s + 1e-7), (0.0, s), (-s, s)]);
        assert!(intersects(&a, &b, GeomCfg::default()));
        assert!(intersects(&b, &a, GeomCfg::default()));
    }
}
