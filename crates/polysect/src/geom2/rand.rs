//! Random simple polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Reproducible inputs for property tests, benches and the CLI `sample`
//!   command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the points in angle order. Sorting by angle
//!   around the center yields a star-shaped, hence simple, polygon (convex only
//!   if the jitter happens to allow it).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::polygon::Polygon;
use super::types::{Aff2, Point2};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius around `center`.
    pub base_radius: f64,
    pub center: Point2,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            center: Vector2::zeros(),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    /// Token at the same index in an independent stream numbered `lane`.
    #[inline]
    pub fn substream(self, lane: u64) -> Self {
        Self {
            seed: mix(self.seed ^ mix(lane.wrapping_mul(0x9e3779b97f4a7c15))),
            index: self.index,
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

// SplitMix64-style mixing, cheap and stable.
#[inline]
fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

const LANE_SECOND: u64 = 1;
const LANE_OFFSET: u64 = 2;

/// Draw a random star-shaped simple polygon in counter-clockwise order.
///
/// Every angular gap stays below π, so `cfg.center` is strictly inside.
/// Returns `None` only if a vertex is not finite (e.g. a non-finite `center`).
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    // gap <= Δ(1 + 2aj) < π  <=>  aj < (n - 2) / 4
    let aj = cfg
        .angle_jitter_frac
        .clamp(0.0, 0.49)
        .min((n as f64 - 2.0) / 4.0 - 0.01);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = if cfg.base_radius.is_finite() {
        cfg.base_radius.abs().max(1e-9)
    } else {
        1.0
    };
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    // jitter stays below Δ/2, so angles remain strictly increasing
    let pts: Vec<Point2> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    debug_assert!(pts.len() >= 3);
    Polygon::new(pts).ok()
}

/// Regular `n`-gon (n ≥ 3) of circumradius `r` around `center`, CCW.
pub fn regular_polygon(n: usize, r: f64, center: Point2) -> Option<Polygon> {
    let n = n.max(3);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let pts = (0..n)
        .map(|k| {
            let th = (k as f64) * delta;
            center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::new(pts).ok()
}

/// A pair of polygons for one token, the second placed at a random offset
/// within `spread` of the first. The second polygon and the offset come from
/// separate substreams, so pairs at neighbouring indices share no draws.
pub fn draw_pair(cfg: RadialCfg, tok: ReplayToken, spread: f64) -> Option<(Polygon, Polygon)> {
    let a = draw_polygon_radial(cfg, tok)?;
    let mut rng = tok.substream(LANE_OFFSET).to_std_rng();
    let off = Vector2::new(
        (rng.gen::<f64>() * 2.0 - 1.0) * spread,
        (rng.gen::<f64>() * 2.0 - 1.0) * spread,
    );
    let b = draw_polygon_radial(cfg, tok.substream(LANE_SECOND))?
        .map(&Aff2::translation(off))
        .ok()?;
    Some((a, b))
}
