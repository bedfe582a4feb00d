use nalgebra::Vector2;

use crate::geom2::{orientation, squared_distance, Hull};
use crate::HullError;

/// Walk the boundary from `start` until it returns to a point equal to
/// `points[start]`. Requires `points.len() >= 2`.
pub(super) fn wrap(
    points: &[Vector2<f64>],
    start: usize,
    max_steps: usize,
) -> Result<Hull, HullError> {
    let anchor = points[start];
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut current = start;
    loop {
        if vertices.len() >= max_steps {
            return Err(HullError::WrapDidNotClose { steps: max_steps });
        }
        vertices.push(points[current]);
        indices.push(current);
        let next = next_vertex(points, current);
        if points[next] == anchor {
            break;
        }
        current = next;
    }
    Ok(Hull::from_parts(vertices, indices))
}

/// Most clockwise point seen from `points[current]`, farthest on ties.
fn next_vertex(points: &[Vector2<f64>], current: usize) -> usize {
    let p = points[current];
    let mut q = (current + 1) % points.len();
    for (r, &pr) in points.iter().enumerate() {
        if r == current || pr == p {
            continue;
        }
        // A seed sitting on `p` spans no direction; any real point beats it.
        if points[q] == p {
            q = r;
            continue;
        }
        let o = orientation(p, points[q], pr);
        if o < 0.0 || (o == 0.0 && squared_distance(p, pr) > squared_distance(p, points[q])) {
            q = r;
        }
    }
    q
}
