use approx::assert_abs_diff_eq;
use chart_cursor::core::Point;
use chart_cursor::core::math::distance;
use chart_cursor::render::path::{ArcOptions, arc, rectangle};
use chart_cursor::render::path_to_points;

#[test]
fn samples_a_rectangle_outline_evenly() {
    let points = path_to_points(&rectangle(100.0, 50.0, 0.0, 0.0), 6).expect("sampled");
    assert_eq!(points.len(), 6);
    let expected = [
        (0.0, 0.0),
        (50.0, 0.0),
        (100.0, 0.0),
        (100.0, 50.0),
        (50.0, 50.0),
        (0.0, 50.0),
    ];
    for (point, (x, y)) in points.iter().zip(expected) {
        assert_abs_diff_eq!(point.x, x, epsilon = 1e-6);
        assert_abs_diff_eq!(point.y, y, epsilon = 1e-6);
    }
}

#[test]
fn samples_stay_on_a_circle() {
    let ring = arc(0.0, 360.0, 100.0, ArcOptions::default());
    let points = path_to_points(&ring, 16).expect("sampled");
    for point in &points {
        assert_abs_diff_eq!(distance(Point::ORIGIN, *point), 100.0, epsilon = 0.5);
    }
}

#[test]
fn consecutive_samples_are_equally_spaced_on_a_line() {
    let points = path_to_points(" M0,0  L90,0 ", 3).expect("sampled");
    assert_abs_diff_eq!(points[1].x - points[0].x, 30.0, epsilon = 1e-6);
    assert_abs_diff_eq!(points[2].x - points[1].x, 30.0, epsilon = 1e-6);
}

#[test]
fn unusable_paths_yield_none() {
    assert!(path_to_points("not a path", 4).is_none());
    assert!(path_to_points("", 4).is_none());
    assert!(path_to_points(" M5,5 ", 4).is_none());
}

#[test]
fn zero_samples_is_empty() {
    assert_eq!(path_to_points(" M0,0  L10,0 ", 0), Some(Vec::new()));
}
