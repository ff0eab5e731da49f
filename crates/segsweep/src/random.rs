//! Random inputs: star-shaped rings and segment soups.
//!
//! Purpose
//! - Deterministic, parameterizable generators for property tests and
//!   benchmarks. Every draw is keyed by a replay token `(seed, index)`.
//!
//! Model
//! - Rings: `n` equally spaced angles, each jittered by less than half the
//!   spacing, so the angles stay strictly increasing without sorting. Radii are
//!   jittered around a base radius. With every angular gap below π the
//!   vertices bound a star-shaped, hence simple, polygon.
//! - Soups: segment midpoints uniform in a square, uniform direction, length
//!   uniform in `[min_len, max_len]`.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::primitives::{Point, Polygon, Segment};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(4),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(4);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-shaped ring configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    /// At least 4 vertices are drawn, which keeps every angular gap below π.
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, `u ∈ [-radial_jitter, radial_jitter]`. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point<f64>,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Point::new(0.0, 0.0),
        }
    }
}

/// Segment soup configuration.
#[derive(Clone, Copy, Debug)]
pub struct SoupCfg {
    pub count: usize,
    /// Midpoints are drawn from `[-half_extent, half_extent]²`.
    pub half_extent: f64,
    pub min_len: f64,
    pub max_len: f64,
}

impl Default for SoupCfg {
    fn default() -> Self {
        Self {
            count: 64,
            half_extent: 100.0,
            min_len: 0.5,
            max_len: 5.0,
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

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over (seed, index)
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

/// Draw a closed star-shaped ring around `cfg.center`.
pub fn draw_star_ring(cfg: RingCfg, tok: ReplayToken) -> Polygon<f64> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = TAU / (n as f64);
    let phase = rng.gen::<f64>() * TAU;
    let c: Vector2<f64> = cfg.center.into();

    let ring: Vec<Point<f64>> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let theta = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Point::from(c + Vector2::new(theta.cos(), theta.sin()) * r)
        })
        .collect();
    debug_assert!(delta * (1.0 + 2.0 * aj) < PI);
    Polygon::from_ring(ring)
}

/// Draw `cfg.count` random segments.
pub fn draw_segment_soup(cfg: SoupCfg, tok: ReplayToken) -> Vec<Segment<f64>> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.abs().max(1e-9);
    let lo = cfg.min_len.max(0.0);
    let hi = cfg.max_len.max(lo);
    (0..cfg.count)
        .map(|_| {
            let mid = Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h));
            let theta = rng.gen::<f64>() * TAU;
            let len = rng.gen_range(lo..=hi);
            let half = Vector2::new(theta.cos(), theta.sin()) * (0.5 * len);
            Segment::new(Point::from(mid - half), Point::from(mid + half))
        })
        .collect()
}
