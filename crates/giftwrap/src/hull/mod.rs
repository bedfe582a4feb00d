//! Jarvis march: start-vertex selection and the wrapping loop.
//!
//! Purpose
//! - Turn a validated `PointSet` into its CCW hull boundary, starting at the
//!   leftmost-lowest point, in O(n·h).
//!
//! Conventions
//! - From each hull vertex the next one is the candidate with no point strictly
//!   to the right of `current → candidate`; collinear ties go to the farthest
//!   point, so interior collinear points never become vertices.
//! - Points coinciding with the current vertex are never chosen, and the wrap
//!   stops when it reaches a point equal to the start by value. Duplicates of
//!   the start therefore close the loop instead of cycling.
//! - Inputs with fewer than three points are returned unchanged.
//!
//! Code cross-refs: `geom2::{orientation, squared_distance, PointSet, Hull}`

mod select;
mod wrap;

pub use select::select_start;

use crate::geom2::{Hull, PointSet};
use crate::HullError;
use nalgebra::Vector2;

/// Wrapping loop configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct WrapCfg {
    /// Upper bound on hull vertices before giving up with
    /// `HullError::WrapDidNotClose`. `None` uses the number of input points,
    /// which exact arithmetic never exceeds.
    pub max_steps: Option<usize>,
}

/// Convex hull with the default step bound.
pub fn convex_hull(points: &PointSet) -> Result<Hull, HullError> {
    convex_hull_with(points, WrapCfg::default())
}

pub fn convex_hull_with(points: &PointSet, cfg: WrapCfg) -> Result<Hull, HullError> {
    let pts = points.as_slice();
    if pts.len() < 3 {
        return Ok(Hull::from_parts(pts.to_vec(), (0..pts.len()).collect()));
    }
    let start = select_start(pts)?;
    wrap::wrap(pts, start, cfg.max_steps.unwrap_or(pts.len()))
}

/// Validate a raw slice and compute its hull.
pub fn convex_hull_of(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    let set = PointSet::new(points.to_vec())?;
    convex_hull(&set)
}
