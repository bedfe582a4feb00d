use nalgebra::Vector2;

/// Cross product of `b - a` and `c - a`.
///
/// Positive when `a → b → c` turns counter-clockwise, negative when it turns
/// clockwise, zero when the three points are collinear. Callers compare the
/// sign exactly.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Squared Euclidean distance; only used to rank collinear candidates.
#[inline]
pub fn squared_distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Turn direction of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Turn {
    /// Classify `a → b → c` by the exact sign of [`orientation`].
    #[inline]
    pub fn of(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        let o = orientation(a, b, c);
        if o > 0.0 {
            Turn::CounterClockwise
        } else if o < 0.0 {
            Turn::Clockwise
        } else {
            Turn::Collinear
        }
    }
}
