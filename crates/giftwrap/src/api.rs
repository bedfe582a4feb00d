//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is the import surface for the CLI, the
//!   Python bindings, and benches. Breaking changes are allowed and expected.

// Predicates and types
pub use crate::geom2::{orientation, squared_distance, Hull, PointSet, Turn};
pub use nalgebra::Vector2 as Vec2;
// Random point clouds
pub use crate::geom2::rand::{draw_point_cloud, CloudCfg, CloudShape, ReplayToken};
// Jarvis march
pub use crate::hull::{convex_hull, convex_hull_of, convex_hull_with, select_start, WrapCfg};
pub use crate::HullError;
