//! Point sets and hull polygons.
//!
//! - `PointSet`: ordered, validated input (finite coordinates, duplicates kept).
//! - `Hull`: CCW vertex sequence plus the input index of each vertex.

use nalgebra::Vector2;

use super::predicates::{orientation, squared_distance};
use crate::{parallelogram_area, HullError};

/// Ordered collection of finite points.
///
/// Invariants:
/// - Every coordinate is finite (checked on construction).
/// - Insertion order is preserved; scan order drives every tie-break.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pts: Vec<Vector2<f64>>,
}

impl PointSet {
    /// Validate and wrap `pts`. Fails on the first non-finite coordinate.
    pub fn new(pts: Vec<Vector2<f64>>) -> Result<Self, HullError> {
        if let Some((index, p)) = pts
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(HullError::InvalidPoint {
                index,
                x: p.x,
                y: p.y,
            });
        }
        Ok(Self { pts })
    }

    pub fn from_xy<I>(xy: I) -> Result<Self, HullError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(xy.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Vector2<f64>> {
        self.pts.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.pts.iter().copied()
    }
}

/// Hull boundary in counter-clockwise order, starting at the leftmost-lowest
/// input point.
///
/// Invariants:
/// - `vertices[k] == input[indices[k]]` for the input the hull was built from.
/// - With 3+ vertices, no input point lies strictly right of any edge.
/// - Inputs with fewer than 3 points pass through unchanged, so a hull may
///   hold 0, 1, or 2 vertices without being a polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    vertices: Vec<Vector2<f64>>,
    indices: Vec<usize>,
}

impl Hull {
    pub(crate) fn from_parts(vertices: Vec<Vector2<f64>>, indices: Vec<usize>) -> Self {
        debug_assert_eq!(vertices.len(), indices.len());
        Self { vertices, indices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    /// Input index of each vertex, in hull order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when the hull encloses area (three or more vertices).
    #[inline]
    pub fn is_polygon(&self) -> bool {
        self.vertices.len() >= 3
    }

    #[inline]
    pub fn first(&self) -> Option<Vector2<f64>> {
        self.vertices.first().copied()
    }

    /// Consecutive vertex pairs including the closing edge `last → first`.
    /// Empty for fewer than two vertices; a two-vertex hull yields both
    /// directions of its segment.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Vertices followed by the first vertex again.
    pub fn closed_ring(&self) -> Vec<Vector2<f64>> {
        let mut ring = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            ring.push(*first);
        }
        ring
    }

    /// Shoelace area; positive for a CCW polygon, zero below three vertices.
    pub fn signed_area(&self) -> f64 {
        if !self.is_polygon() {
            return 0.0;
        }
        0.5 * self
            .edges()
            .map(|(a, b)| parallelogram_area(a, b))
            .sum::<f64>()
    }

    /// Length of the closed boundary. A two-vertex hull counts its segment
    /// twice.
    pub fn perimeter(&self) -> f64 {
        self.edges()
            .map(|(a, b)| squared_distance(a, b).sqrt())
            .sum()
    }

    /// Closed containment test with exact orientation signs.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => *a == p,
            [a, b] => {
                orientation(*a, *b, p) == 0.0
                    && p.x >= a.x.min(b.x)
                    && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y)
                    && p.y <= a.y.max(b.y)
            }
            _ => self.edges().all(|(a, b)| orientation(a, b, p) >= 0.0),
        }
    }
}
