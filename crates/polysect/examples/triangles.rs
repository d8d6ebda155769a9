//! Two tilted triangles from 3D triples, projected and tested.
//!
//! Usage:
//!   cargo run -p polysect --example triangles -- xy
//!   cargo run -p polysect --example triangles -- dominant
//!
//! - `xy` (default): drop z, as the scripted workflow does.
//! - `xz` / `yz`: drop y / x instead.
//! - `dominant`: pick the plane from each triangle's Newell normal.

use nalgebra::{vector, Vector3};
use polysect::{GeomCfg, Plane, Polygon};

fn main() {
    let p1: [Vector3<f64>; 3] = [
        vector![-2.5, -2.5, 0.0],
        vector![2.5, -2.5, 0.0],
        vector![0.0, 0.0, 5.0],
    ];
    let p2: [Vector3<f64>; 3] = [
        vector![2.5, -2.5, 0.0],
        vector![2.5, 2.5, 0.0],
        vector![0.0, 0.0, 5.0],
    ];
    let mode = std::env::args().nth(1).unwrap_or_else(|| "xy".to_string());
    let plane = if mode == "dominant" {
        // both triangles should agree on the plane for the comparison to mean anything
        let a = Plane::dominant(&p1);
        let b = Plane::dominant(&p2);
        if a != b {
            eprintln!("dominant planes differ: {a:?} vs {b:?}; falling back to xy");
        }
        a.filter(|_| a == b).unwrap_or_default()
    } else {
        match mode.parse::<Plane>() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("usage: triangles [xy|xz|yz|dominant] ({e})");
                return;
            }
        }
    };

    let (polygon1, polygon2) = match (
        Polygon::from_points3(&p1, plane),
        Polygon::from_points3(&p2, plane),
    ) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            return;
        }
    };
    let cfg = GeomCfg::default();
    println!("plane={plane:?}");
    println!("polygon1={polygon1}");
    println!("polygon2={polygon2}");
    println!(
        "Do polygons intersect {}",
        polysect::intersects(&polygon1, &polygon2, cfg)
    );
    println!(
        "Does polygon2 intersect itself {}",
        polysect::intersects(&polygon2, &polygon2, cfg)
    );
}
