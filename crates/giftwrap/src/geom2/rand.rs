//! Random point clouds in 2D (box/disk sampling + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for hull inputs used by property
//!   tests, benches, and `cli sample`. Draws are reproducible from a replay
//!   token `(seed, index)` mixed into a single RNG.
//!
//! Model
//! - Uniform in an axis-aligned box `[-h, h]²` or in a disk of radius `h`,
//!   then shifted by `center`.
//! - Optional grid snapping rounds coordinates to multiples of `grid`, which
//!   produces duplicates and collinear runs on purpose.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::PointSet;
use crate::HullError;

/// Sampling region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Box,
    Disk,
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Box half-width or disk radius. Clamped to at least 1e-9.
    pub half_extent: f64,
    pub center: Vector2<f64>,
    /// Snap coordinates to multiples of `grid` when set and positive.
    pub grid: Option<f64>,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            shape: CloudShape::Box,
            half_extent: 1.0,
            center: Vector2::zeros(),
            grid: None,
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
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw `cfg.count` points. Fails only if `center` or `half_extent` make a
/// coordinate non-finite.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Result<PointSet, HullError> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.max(1e-9);
    let grid = cfg.grid.filter(|g| *g > 0.0);
    let pts = (0..cfg.count)
        .map(|_| {
            let p = match cfg.shape {
                CloudShape::Box => {
                    Vector2::new(rng.gen_range(-1.0..=1.0) * h, rng.gen_range(-1.0..=1.0) * h)
                }
                CloudShape::Disk => {
                    let r = h * rng.gen::<f64>().sqrt();
                    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
                    Vector2::new(r * theta.cos(), r * theta.sin())
                }
            };
            let p = p + cfg.center;
            match grid {
                Some(g) => p.map(|c| (c / g).round() * g),
                None => p,
            }
        })
        .collect();
    PointSet::new(pts)
}
