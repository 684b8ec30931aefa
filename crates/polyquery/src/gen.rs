//! Random lattice polygons (fixtures, benchmarks, `gen` subcommand).
//!
//! Model
//! - Draw `n` distinct integer points in `[-span, span]²`, then order them by
//!   angle around their centroid. The result is star-shaped, so every draw is a
//!   valid `Polygon` (>= 3 distinct vertices).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::collections::BTreeSet;
use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{Point, Polygon, MIN_VERTICES};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(MIN_VERTICES),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(MIN_VERTICES);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Lattice sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LatticeCfg {
    pub vertex_count: VertexCount,
    /// Coordinates are drawn from `[-span, span]`; widened if too small for `n` points.
    pub span: i32,
}

impl Default for LatticeCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 8 },
            span: 20,
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
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Smallest span whose `(2·span+1)²` lattice holds `n` points with room to spare.
fn span_for(n: usize, requested: i32) -> i32 {
    let mut span = requested.max(1);
    while (2 * i128::from(span) + 1).pow(2) < 2 * n as i128 {
        span = span.saturating_mul(2);
    }
    span
}

/// Draw one polygon for `tok`.
///
/// Always `Some` in practice; `None` would mean the sampler broke the `Polygon` invariants.
pub fn draw_lattice_polygon(cfg: LatticeCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let span = span_for(n, cfg.span);
    let mut set = BTreeSet::new();
    while set.len() < n {
        set.insert(Point::new(
            rng.gen_range(-span..=span),
            rng.gen_range(-span..=span),
        ));
    }
    let pts: Vec<Point> = set.into_iter().collect();
    let (sx, sy) = pts.iter().fold((0.0f64, 0.0f64), |(sx, sy), p| {
        (sx + f64::from(p.x), sy + f64::from(p.y))
    });
    let (cx, cy) = (sx / n as f64, sy / n as f64);
    let mut keyed: Vec<(f64, Point)> = pts
        .into_iter()
        .map(|p| ((f64::from(p.y) - cy).atan2(f64::from(p.x) - cx), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    let ordered = keyed.into_iter().map(|(_, p)| p).collect();
    Polygon::new(ordered).ok()
}

/// Draw `count` polygons with indices `0..count` under `seed`.
pub fn draw_collection(cfg: LatticeCfg, seed: u64, count: usize) -> Vec<Polygon> {
    (0..count as u64)
        .filter_map(|index| draw_lattice_polygon(cfg, ReplayToken { seed, index }))
        .collect()
}

/// Write polygons one per line in the load format.
pub fn write_polygon_file<W: Write>(polys: &[Polygon], mut out: W) -> io::Result<()> {
    for p in polys {
        writeln!(out, "{p}")?;
    }
    out.flush()
}
