//! Tests for the bounding region module

use crate::errors::RegionError;
use crate::geometry::{BoundingRegion, Point};

fn unit_cube() -> BoundingRegion {
    BoundingRegion::new(Point::from([0.0, 0.0, 0.0]), Point::from([1.0, 1.0, 1.0])).unwrap()
}

fn reversed_cube() -> BoundingRegion {
    BoundingRegion::new(Point::from([1.0, 1.0, 1.0]), Point::from([0.0, 0.0, 0.0])).unwrap()
}

#[test]
fn test_region_creation() {
    let p1 = Point::from([0.0, 0.0, 0.0]);
    let p2 = Point::from([1.0, 1.0, 1.0]);
    let region = BoundingRegion::new(p1.clone(), p2.clone()).unwrap();

    assert_eq!(region.corner_a(), &p1);
    assert_eq!(region.corner_b(), &p2);
    assert_eq!(region.extent(), &[1.0, 1.0, 1.0]);
    assert_eq!(region.dimensions(), 3);
}

#[test]
fn test_corners_kept_verbatim() {
    let region = BoundingRegion::new(Point::from([3.0, -1.0]), Point::from([-2.0, 4.0])).unwrap();
    assert_eq!(region.corner_a(), &Point::from([3.0, -1.0]));
    assert_eq!(region.corner_b(), &Point::from([-2.0, 4.0]));
    assert_eq!(region.extent(), &[5.0, 5.0]);
    assert_eq!(region.min_corner(), Point::from([-2.0, -1.0]));
    assert_eq!(region.max_corner(), Point::from([3.0, 4.0]));
    assert_eq!(region.center(), Point::from([0.5, 1.5]));
}

#[test]
fn test_contains() {
    let region = unit_cube();
    assert!(region.contains(&Point::from([0.5, 0.5, 0.5])).unwrap());
    assert!(!region.contains(&Point::from([-0.5, 0.5, 0.5])).unwrap());
}

#[test]
fn test_contains_reversed() {
    let region = reversed_cube();
    assert!(region.contains(&Point::from([0.5, 0.5, 0.5])).unwrap());
    assert!(!region.contains(&Point::from([-0.5, 0.5, 0.5])).unwrap());
}

#[test]
fn test_contains_border() {
    let region = reversed_cube();
    assert!(region.contains(&Point::from([1.0, 1.0, 1.0])).unwrap());
    assert!(region.contains(&Point::from([0.0, 0.0, 0.0])).unwrap());
    assert!(region.contains(&Point::from([1.0, 0.0, 0.5])).unwrap());
    assert!(!region.contains(&Point::from([1.0, 0.0, 1.000001])).unwrap());
}

#[test]
fn test_corner_order_independence() {
    // Mixed orientation: a is the minimum on x only
    let a = Point::from([0.0, 5.0, -1.0]);
    let b = Point::from([2.0, 1.0, -3.0]);
    let forward = BoundingRegion::new(a.clone(), b.clone()).unwrap();
    let backward = BoundingRegion::new(b, a).unwrap();

    let samples = [
        [1.0, 3.0, -2.0],
        [0.0, 1.0, -3.0],
        [2.0, 5.0, -1.0],
        [2.1, 3.0, -2.0],
        [1.0, 0.9, -2.0],
        [1.0, 3.0, -0.5],
        [-1.0, -1.0, -1.0],
    ];
    for sample in samples {
        let point = Point::from(sample);
        assert_eq!(forward.contains(&point).unwrap(), backward.contains(&point).unwrap(), "{}", point);
    }
}

#[test]
fn test_partial_axis_swap_independence() {
    // Only the y values are exchanged between the two corners
    let original = BoundingRegion::new(Point::from([0.0, 5.0]), Point::from([2.0, 1.0])).unwrap();
    let partial = BoundingRegion::new(Point::from([0.0, 1.0]), Point::from([2.0, 5.0])).unwrap();

    assert_eq!(original.extent(), partial.extent());
    assert_eq!(original.min_corner(), partial.min_corner());
    assert_eq!(original.max_corner(), partial.max_corner());

    let samples = [[1.0, 3.0], [0.0, 1.0], [2.0, 5.0], [0.0, 5.0], [2.0, 1.0], [1.0, 0.5], [2.5, 3.0]];
    for sample in samples {
        let point = Point::from(sample);
        assert_eq!(original.contains(&point).unwrap(), partial.contains(&point).unwrap(), "{}", point);
    }
}

#[test]
fn test_center_of_extreme_finite_corners() {
    let region = BoundingRegion::new(Point::from([-f64::MAX, 0.0]), Point::from([f64::MAX, 2.0])).unwrap();
    let center = region.center();

    assert_eq!(center, Point::from([0.0, 1.0]));
    assert!(region.contains(&center).unwrap());

    let high = BoundingRegion::new(Point::from([f64::MAX]), Point::from([f64::MAX / 2.0])).unwrap();
    assert!(high.center().component(0).unwrap().is_finite());
    assert!(high.contains(&high.center()).unwrap());
}

#[test]
fn test_corners_always_contained() {
    let regions = [
        (vec![0.0], vec![0.0]),
        (vec![-3.0, 7.0], vec![4.0, -7.0]),
        (vec![f64::NEG_INFINITY, 1.0], vec![f64::INFINITY, 1.0]),
        (vec![1e300, -1e-300, 0.0, 2.0], vec![-1e300, 1e-300, 0.0, -2.0]),
    ];
    for (a, b) in regions {
        let region = BoundingRegion::new(Point::new(a).unwrap(), Point::new(b).unwrap()).unwrap();
        assert!(region.contains(region.corner_a()).unwrap());
        assert!(region.contains(region.corner_b()).unwrap());
    }
}

#[test]
fn test_degenerate_axis() {
    let region = BoundingRegion::new(Point::from([2.0, 0.0]), Point::from([2.0, 1.0])).unwrap();
    assert_eq!(region.extent(), &[0.0, 1.0]);
    assert!(region.contains(&Point::from([2.0, 0.5])).unwrap());
    assert!(!region.contains(&Point::from([2.0000001, 0.5])).unwrap());
}

#[test]
fn test_nan_is_never_contained() {
    let region = unit_cube();
    assert!(!region.contains(&Point::from([f64::NAN, 0.5, 0.5])).unwrap());

    let nan_corner = BoundingRegion::new(Point::from([f64::NAN, 0.0]), Point::from([1.0, 1.0])).unwrap();
    assert!(nan_corner.extent()[0].is_nan());
    assert!(!nan_corner.contains(&Point::from([1.0, 0.5])).unwrap());
    assert!(!nan_corner.contains(&Point::from([0.5, 0.5])).unwrap());

    let nan_other = BoundingRegion::new(Point::from([0.0, 0.0]), Point::from([f64::NAN, 1.0])).unwrap();
    assert!(!nan_other.contains(&Point::from([0.0, 0.5])).unwrap());
}

#[test]
fn test_construction_dimension_mismatch() {
    let result = BoundingRegion::new(Point::from([0.0, 0.0]), Point::from([1.0, 1.0, 1.0]));
    assert!(matches!(result, Err(RegionError::DimensionMismatch { expected: 2, found: 3 })));
}

#[test]
fn test_query_dimension_mismatch() {
    let region = unit_cube();
    let result = region.contains(&Point::from([0.5, 0.5]));
    assert!(matches!(result, Err(RegionError::DimensionMismatch { expected: 3, found: 2 })));
}

#[test]
fn test_contains_all() {
    let region = unit_cube();
    let inside = [Point::from([0.0, 0.0, 0.0]), Point::from([0.25, 0.5, 1.0])];
    assert!(region.contains_all(&inside).unwrap());

    let mixed = [Point::from([0.5, 0.5, 0.5]), Point::from([2.0, 0.5, 0.5])];
    assert!(!region.contains_all(&mixed).unwrap());

    let bad = [Point::from([0.5, 0.5, 0.5]), Point::from([0.5])];
    assert!(matches!(region.contains_all(&bad), Err(RegionError::DimensionMismatch { .. })));
}

#[test]
fn test_from_strings() {
    let region = BoundingRegion::from_strings("1,1,1", "(0, 0, 0)").unwrap();
    assert_eq!(region, reversed_cube());
    assert_eq!(region.to_string(), "(1, 1, 1) -> (0, 0, 0)");
}

#[test]
fn test_region_shared_across_threads() {
    let region = std::sync::Arc::new(unit_cube());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let region = std::sync::Arc::clone(&region);
            std::thread::spawn(move || {
                let t = i as f64 / 4.0;
                region.contains(&Point::from([t, t, t])).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
