//! Degree-based geometry helpers shared by the path builders and cursors.

use crate::core::Point;

pub const RADIANS: f64 = std::f64::consts::PI / 180.0;
pub const DEGREES: f64 = 180.0 / std::f64::consts::PI;

/// Rounds `value` to `precision` decimal digits.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid emitting "-0" into path strings.
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[must_use]
pub fn fit_to_range(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[must_use]
pub fn cos_deg(angle: f64) -> f64 {
    (angle * RADIANS).cos()
}

#[must_use]
pub fn sin_deg(angle: f64) -> f64 {
    (angle * RADIANS).sin()
}

/// Distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Distance of `point` from the origin.
#[must_use]
pub fn distance_from_origin(point: Point) -> f64 {
    point.x.hypot(point.y)
}

/// Angle of `point` around the origin in degrees, `(-180, 180]`.
#[must_use]
pub fn angle_of(point: Point) -> f64 {
    point.y.atan2(point.x) * DEGREES
}

/// Maps any angle into `[0, 360)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Fits `value` into the angular span `[start, end]`.
///
/// Angles outside the span snap to whichever edge is angularly closer. Spans
/// of 360 degrees or more accept every angle after unwrapping it into the
/// span.
#[must_use]
pub fn fit_angle_to_range(value: f64, start: f64, end: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    if end - start >= 360.0 {
        return start + normalize_angle(value - start);
    }

    let offset = normalize_angle(value - start);
    let span = end - start;
    if offset <= span {
        return start + offset;
    }
    // Outside: pick the closer edge across the gap.
    let past_end = offset - span;
    let before_start = 360.0 - offset;
    if past_end < before_start { end } else { start }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_to_trims_float_noise() {
        assert_relative_eq!(round_to(0.1 + 0.2, 4), 0.3);
        assert_eq!(round_to(-0.00001, 4), 0.0);
        assert_eq!(round_to(12.345_67, 1), 12.3);
    }

    #[test]
    fn fit_angle_to_range_unwraps_into_span() {
        assert_relative_eq!(fit_angle_to_range(180.0, -90.0, 270.0), 180.0);
        assert_relative_eq!(fit_angle_to_range(-170.0, -90.0, 270.0), 190.0);
        assert_relative_eq!(fit_angle_to_range(-90.0, -90.0, 270.0), -90.0);
    }

    #[test]
    fn fit_angle_to_range_clamps_to_nearest_edge() {
        // Gauge spanning 180..360: 90 degrees sits in the gap.
        assert_relative_eq!(fit_angle_to_range(100.0, 180.0, 360.0), 180.0);
        assert_relative_eq!(fit_angle_to_range(10.0, 180.0, 360.0), 360.0);
        assert_relative_eq!(fit_angle_to_range(-45.0, 180.0, 360.0), 315.0);
    }

    #[test]
    fn angle_and_distance_follow_screen_axes() {
        assert_relative_eq!(angle_of(Point::new(0.0, 10.0)), 90.0);
        assert_relative_eq!(distance_from_origin(Point::new(3.0, 4.0)), 5.0);
        assert_relative_eq!(distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0)), 5.0);
    }
}
