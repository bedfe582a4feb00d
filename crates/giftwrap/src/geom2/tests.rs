use super::*;
use crate::HullError;
use nalgebra::{vector, Vector2};

#[test]
fn orientation_sign_matches_turn_direction() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert_eq!(orientation(a, b, vector![1.0, 1.0]), 1.0);
    assert_eq!(orientation(a, b, vector![1.0, -1.0]), -1.0);
    assert_eq!(orientation(a, b, vector![5.0, 0.0]), 0.0);
    // Behind `a` on the same line is still collinear.
    assert_eq!(orientation(a, b, vector![-3.0, 0.0]), 0.0);

    assert_eq!(Turn::of(a, b, vector![0.5, 2.0]), Turn::CounterClockwise);
    assert_eq!(Turn::of(a, b, vector![0.5, -2.0]), Turn::Clockwise);
    assert_eq!(Turn::of(a, b, vector![2.0, 0.0]), Turn::Collinear);
}

#[test]
fn orientation_is_twice_the_triangle_area() {
    let a = vector![1.0, 1.0];
    let b = vector![4.0, 1.0];
    let c = vector![1.0, 5.0];
    assert_eq!(orientation(a, b, c), 12.0);
    // Swapping two arguments flips the sign.
    assert_eq!(orientation(a, c, b), -12.0);
}

#[test]
fn squared_distance_skips_the_root() {
    assert_eq!(squared_distance(vector![0.0, 0.0], vector![3.0, 4.0]), 25.0);
    assert_eq!(squared_distance(vector![2.0, 2.0], vector![2.0, 2.0]), 0.0);
    assert_eq!(
        squared_distance(vector![-1.0, 0.5], vector![1.0, -0.5]),
        squared_distance(vector![1.0, -0.5], vector![-1.0, 0.5])
    );
}

#[test]
fn point_set_rejects_non_finite_coordinates() {
    let err = PointSet::from_xy([(0.0, 0.0), (1.0, f64::NAN), (f64::INFINITY, 0.0)])
        .unwrap_err();
    assert!(matches!(err, HullError::InvalidPoint { index: 1, .. }));

    let err = PointSet::from_xy([(0.0, 0.0), (f64::NEG_INFINITY, 2.0)]).unwrap_err();
    assert!(matches!(err, HullError::InvalidPoint { index: 1, y, .. } if y == 2.0));
}

#[test]
fn point_set_keeps_order_and_duplicates() {
    let ps = PointSet::from_xy([(2.0, 1.0), (0.0, 0.0), (2.0, 1.0)]).unwrap();
    assert_eq!(ps.len(), 3);
    assert_eq!(ps.get(0), Some(vector![2.0, 1.0]));
    assert_eq!(ps.get(2), Some(vector![2.0, 1.0]));
    assert_eq!(ps.get(3), None);
    assert!(PointSet::default().is_empty());
}

fn unit_square() -> Hull {
    Hull::from_parts(
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ],
        vec![0, 1, 2, 3],
    )
}

#[test]
fn hull_ring_edges_and_area() {
    let sq = unit_square();
    assert!(sq.is_polygon());
    assert_eq!(sq.edges().count(), 4);
    let ring = sq.closed_ring();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
    assert_eq!(sq.signed_area(), 1.0);
    assert_eq!(sq.perimeter(), 4.0);
}

#[test]
fn hull_contains_is_closed() {
    let sq = unit_square();
    assert!(sq.contains(vector![0.5, 0.5]));
    assert!(sq.contains(vector![1.0, 0.5])); // on an edge
    assert!(sq.contains(vector![0.0, 0.0])); // a vertex
    assert!(!sq.contains(vector![1.5, 0.5]));
    assert!(!sq.contains(vector![-1e-9, 0.5]));
}

#[test]
fn degenerate_hulls_have_no_area() {
    let seg = Hull::from_parts(vec![vector![0.0, 0.0], vector![2.0, 2.0]], vec![0, 1]);
    assert!(!seg.is_polygon());
    assert_eq!(seg.signed_area(), 0.0);
    assert_eq!(seg.edges().count(), 2);
    assert!(seg.contains(vector![1.0, 1.0]));
    assert!(!seg.contains(vector![3.0, 3.0]));
    assert!(!seg.contains(vector![1.0, 0.0]));

    let single = Hull::from_parts(vec![Vector2::new(4.0, 4.0)], vec![0]);
    assert_eq!(single.edges().count(), 0);
    assert_eq!(single.closed_ring().len(), 2);
    assert!(single.contains(vector![4.0, 4.0]));

    let empty = Hull::default();
    assert!(empty.closed_ring().is_empty());
    assert!(!empty.contains(vector![0.0, 0.0]));
}
