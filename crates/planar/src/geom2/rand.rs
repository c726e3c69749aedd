//! Random valid shapes (replay tokens).
//!
//! Purpose
//! - Deterministic samplers for radial shapes and squares used by property
//!   tests and benchmarks. Every draw goes through the validating constructors.
//!
//! Model
//! - Radial: `n` equally spaced angles on [0, 2π) with bounded angular jitter
//!   (angles stay distinct), a random global phase, a common radius, and a
//!   random center inside `[-extent, extent]²`.
//! - Square: random centroid, half-diagonal and phase; corners in boundary order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::InvalidShapeError;
use super::radial::RadialShape;
use super::square::SquareShape;
use super::types::Point;

/// Neighbor count distribution.
#[derive(Clone, Copy, Debug)]
pub enum NeighborCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl NeighborCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            NeighborCount::Fixed(n) => n,
            NeighborCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Radial sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub neighbor_count: NeighborCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.45].
    pub angle_jitter_frac: f64,
    pub r_min: f64,
    pub r_max: f64,
    /// Center coordinates are drawn from `[-extent, extent]`.
    pub extent: f64,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            neighbor_count: NeighborCount::Uniform { min: 0, max: 12 },
            angle_jitter_frac: 0.3,
            r_min: 0.5,
            r_max: 5.0,
            extent: 10.0,
        }
    }
}

/// Square sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SquareCfg {
    /// Half-diagonal range (distance from centroid to a corner).
    pub r_min: f64,
    pub r_max: f64,
    pub extent: f64,
}
impl Default for SquareCfg {
    fn default() -> Self {
        Self {
            r_min: 0.5,
            r_max: 5.0,
            extent: 10.0,
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
        // SplitMix64 finalizer
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

/// Point at distance `r` and angle `theta` from the origin.
#[inline]
pub fn polar(r: f64, theta: f64) -> Vector2<f64> {
    let (s, c) = theta.sin_cos();
    Vector2::new(r * c, r * s)
}

fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

fn draw_center<R: Rng>(rng: &mut R, extent: f64) -> Vector2<f64> {
    let e = extent.abs();
    Vector2::new(uniform(rng, -e, e), uniform(rng, -e, e))
}

/// Draw a radial shape. Neighbors are named `n0, n1, ...` in counterclockwise order.
pub fn draw_radial(cfg: RadialCfg, tok: ReplayToken) -> Result<RadialShape, InvalidShapeError> {
    let mut rng = tok.to_std_rng();
    let n = cfg.neighbor_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.45);
    let r = uniform(&mut rng, cfg.r_min.max(1e-6), cfg.r_max);
    let center = draw_center(&mut rng, cfg.extent);
    let delta = TAU / n.max(1) as f64;
    let phase = rng.gen::<f64>() * TAU;
    let neighbors = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + k as f64 * delta + jitter;
            Point::from_pos(format!("n{k}"), center + polar(r, th))
        })
        .collect();
    RadialShape::new(Point::from_pos("center", center), neighbors)
}

/// Draw a square with corners `A, B, C, D` in counterclockwise boundary order.
pub fn draw_square(cfg: SquareCfg, tok: ReplayToken) -> Result<SquareShape, InvalidShapeError> {
    let mut rng = tok.to_std_rng();
    let r = uniform(&mut rng, cfg.r_min.max(1e-6), cfg.r_max);
    let o = draw_center(&mut rng, cfg.extent);
    let phase = rng.gen::<f64>() * TAU;
    let corner = |k: usize, name: &str| {
        Point::from_pos(name, o + polar(r, phase + k as f64 * FRAC_PI_2))
    };
    SquareShape::new(corner(0, "A"), corner(1, "B"), corner(2, "C"), corner(3, "D"))
}
