//! PyO3 bindings for the `giftwrap` hull routines.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as
//!   `(x, y)` tuples, errors become `ValueError`.

mod common;

use common::{map_hull_err, points_from_py};
use nalgebra::Vector2;
use pyo3::prelude::*;

/// Cross product of (b - a) and (c - a); positive for a counter-clockwise turn.
#[pyfunction]
fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    giftwrap::api::orientation(
        Vector2::new(a.0, a.1),
        Vector2::new(b.0, b.1),
        Vector2::new(c.0, c.1),
    )
}

/// Index of the leftmost point (lowest y among equal x).
#[pyfunction]
fn leftmost_index(points: Vec<(f64, f64)>) -> PyResult<usize> {
    let set = points_from_py(points)?;
    giftwrap::api::select_start(set.as_slice()).map_err(map_hull_err)
}

/// Convex hull in counter-clockwise order, starting at the leftmost point.
/// Fewer than three points are returned unchanged.
#[pyfunction]
fn convex_hull(points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    let set = points_from_py(points)?;
    let hull = giftwrap::api::convex_hull(&set).map_err(map_hull_err)?;
    Ok(hull.vertices().iter().map(|p| (p.x, p.y)).collect())
}

#[pymodule]
fn giftwrap_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(orientation, m)?)?;
    m.add_function(wrap_pyfunction!(leftmost_index, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    Ok(())
}
