//! CSV point files (`x`,`y` header columns) read and written via Polars.
//!
//! Every data row is one point. A missing column, an empty cell, or a cell
//! that does not parse as a number fails the whole read with the row number;
//! the core never sees partially valid input.

use anyhow::{Context, Result};
use giftwrap::api::PointSet;
use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Read `path` into a validated point set, preserving row order.
///
/// `x` and `y` are read as text and cast afterwards, so type inference on
/// the leading rows never decides how later cells parse.
pub fn read_points_csv(path: &Path) -> Result<PointSet> {
    let coords = Schema::from_iter([
        Field::new("x".into(), DataType::String),
        Field::new("y".into(), DataType::String),
    ]);
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .with_dtype_overwrite(Some(Arc::new(coords)))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = numeric_column(&df, "x")?;
    let ys = numeric_column(&df, "y")?;
    tracing::debug!(rows = df.height(), cols = df.width(), "points_csv_shape");
    Ok(PointSet::from_xy(xs.into_iter().zip(ys))?)
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    let cast = series
        .cast(&DataType::Float64)
        .with_context(|| format!("column `{name}` is not numeric"))?;
    let values = cast.f64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.with_context(|| format!("row {}: `{name}` is missing or not a number", row + 1))
        })
        .collect()
}

/// Write `points` as an `x,y` CSV with a header row.
pub fn write_points_csv(path: &Path, points: &PointSet) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
