use nalgebra::Vector2;

use crate::HullError;

/// Index of the leftmost point, lowest among equal x. Exact duplicates keep
/// the earliest index.
pub fn select_start(points: &[Vector2<f64>]) -> Result<usize, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = i;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn empty_input_has_no_start() {
        assert_eq!(select_start(&[]), Err(HullError::EmptyInput));
    }

    #[test]
    fn smallest_x_then_smallest_y() {
        let pts = [
            vector![2.0, 0.0],
            vector![0.0, 3.0],
            vector![1.0, -5.0],
            vector![0.0, 1.0],
        ];
        assert_eq!(select_start(&pts), Ok(3));
    }

    #[test]
    fn duplicates_keep_first_scanned() {
        let pts = [
            vector![1.0, 1.0],
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![0.0, 0.5],
        ];
        assert_eq!(select_start(&pts), Ok(1));
    }
}
