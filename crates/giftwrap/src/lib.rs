//! Gift-wrapping (Jarvis march) convex hulls in 2D.
//!
//! Layout
//! - `geom2`: points, point sets, hulls, and the exact orientation predicates.
//! - `hull`: start-vertex selection and the wrapping loop.
//! - `geom2::rand`: reproducible point clouds for tests, benches, and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer the
//!   re-exports in `api` and `prelude` from callers.

pub mod api;
pub mod error;
pub mod geom2;
pub mod hull;

pub use error::HullError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::geom2::rand::{draw_point_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{orientation, squared_distance, Hull, PointSet, Turn};
    pub use crate::hull::{convex_hull, convex_hull_of, convex_hull_with, select_start, WrapCfg};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert_eq!(parallelogram_area(a, b), 2.5);
        assert_eq!(parallelogram_area(b, a), -2.5);
    }

    #[test]
    fn area_is_antisymmetric_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let a = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let b = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            assert_eq!(parallelogram_area(a, b), -parallelogram_area(b, a));
        }
    }
}
