use giftwrap::api::{HullError, PointSet};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(points: Vec<(f64, f64)>) -> PyResult<PointSet> {
    PointSet::from_xy(points).map_err(map_hull_err)
}

pub fn map_hull_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
