//! 2D points, hulls, and exact predicates.
//!
//! Purpose
//! - Hold the value types the wrapping loop works on (`PointSet`, `Hull`) and
//!   the two primitives it calls on every scan step.
//!
//! Conventions
//! - Points are `Vector2<f64>`; equality is exact coordinate equality.
//! - Predicates use exact sign tests, no epsilon. Near-collinear inputs are
//!   classified by whatever the floating-point cross product yields.
//!
//! Code cross-refs: `crate::hull::{select_start, convex_hull}`

mod predicates;
pub mod rand;
mod types;

pub use predicates::{orientation, squared_distance, Turn};
pub use types::{Hull, PointSet};

#[cfg(test)]
mod tests;
