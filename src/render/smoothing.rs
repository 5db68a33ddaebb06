//! Point-sequence smoothing strategies.

use crate::core::Point;
use crate::core::math::{distance, round_to};
use crate::render::path::{close_path, cubic_curve_to, line_to, move_to, polyline};

/// Turns an ordered point sequence into a smooth path string.
pub trait Smoothing {
    fn smooth(&self, points: &[Point]) -> String;
}

/// Consecutive points closer than this on both axes are merged.
const DUPLICATE_EPSILON: f64 = 0.1;

/// Cubic spline whose tangents come from a monotone slope estimate, scaled
/// down by a per-axis tension.
///
/// Tension `0` gives the full curve, tension `1` a straight polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tension {
    tension_x: f64,
    tension_y: f64,
}

impl Tension {
    #[must_use]
    pub fn new(tension_x: f64, tension_y: f64) -> Self {
        Self {
            tension_x: clamp_tension(tension_x),
            tension_y: clamp_tension(tension_y),
        }
    }

    #[must_use]
    pub fn tension_x(&self) -> f64 {
        self.tension_x
    }

    #[must_use]
    pub fn tension_y(&self) -> f64 {
        self.tension_y
    }
}

impl Default for Tension {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

fn clamp_tension(tension: f64) -> f64 {
    if tension.is_finite() {
        tension.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

impl Smoothing for Tension {
    fn smooth(&self, points: &[Point]) -> String {
        let points = merge_duplicates(points);
        if points.len() < 3 || (self.tension_x >= 1.0 && self.tension_y >= 1.0) {
            return polyline(&points);
        }

        let count = points.len();
        let first = points[0];
        let last = points[count - 1];
        let closed = round_to(first.x, 3) == round_to(last.x, 3)
            && round_to(first.y, 3) == round_to(last.y, 3);

        let chords: Vec<f64> = points.windows(2).map(|w| distance(w[0], w[1])).collect();
        let tangents = tangents(&points, &chords, closed);

        let keep_x = 1.0 - self.tension_x;
        let keep_y = 1.0 - self.tension_y;

        let mut path = move_to(first);
        for index in 0..count - 1 {
            let p1 = points[index];
            let p2 = points[index + 1];
            let (t1x, t1y) = tangents[index];
            let (t2x, t2y) = tangents[index + 1];
            let third = chords[index] / 3.0;
            let control_a = Point::new(p1.x + third * t1x * keep_x, p1.y + third * t1y * keep_y);
            let control_b = Point::new(p2.x - third * t2x * keep_x, p2.y - third * t2y * keep_y);
            path.push_str(&cubic_curve_to(p2, control_a, control_b));
        }
        path
    }
}

fn merge_duplicates(points: &[Point]) -> Vec<Point> {
    let mut merged: Vec<Point> = Vec::with_capacity(points.len());
    for &point in points {
        if !point.is_finite() {
            continue;
        }
        if let Some(previous) = merged.last() {
            if (previous.x - point.x).abs() < DUPLICATE_EPSILON
                && (previous.y - point.y).abs() < DUPLICATE_EPSILON
            {
                continue;
            }
        }
        merged.push(point);
    }
    merged
}

/// Per-point tangents (d/dlength for x and y) along the chord parameterization.
fn tangents(points: &[Point], chords: &[f64], closed: bool) -> Vec<(f64, f64)> {
    let count = points.len();
    let interior = |prev: Point, h0: f64, current: Point, h1: f64, next: Point| {
        (
            slope3(h0, h1, prev.x, current.x, next.x),
            slope3(h0, h1, prev.y, current.y, next.y),
        )
    };

    let mut result = vec![(0.0, 0.0); count];
    for index in 1..count - 1 {
        result[index] = interior(
            points[index - 1],
            chords[index - 1],
            points[index],
            chords[index],
            points[index + 1],
        );
    }

    if closed {
        // The seam point sees its wrapped neighbours on both sides.
        let seam = interior(
            points[count - 2],
            chords[count - 2],
            points[0],
            chords[0],
            points[1],
        );
        result[0] = seam;
        result[count - 1] = seam;
    } else {
        let (next_tx, next_ty) = result[1];
        let h = chords[0];
        result[0] = (
            slope2(h, points[0].x, points[1].x, next_tx),
            slope2(h, points[0].y, points[1].y, next_ty),
        );
        let (prev_tx, prev_ty) = result[count - 2];
        let h = chords[count - 2];
        result[count - 1] = (
            slope2(h, points[count - 2].x, points[count - 1].x, prev_tx),
            slope2(h, points[count - 2].y, points[count - 1].y, prev_ty),
        );
    }
    result
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Interior tangent: weighted mean of the neighbouring secants, clamped so
/// the curve cannot overshoot a local extremum.
fn slope3(h0: f64, h1: f64, c0: f64, c1: f64, c2: f64) -> f64 {
    let s0 = (c1 - c0) / h0;
    let s1 = (c2 - c1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let value = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if value.is_finite() { value } else { 0.0 }
}

/// Edge tangent derived from the one available secant and the neighbour's tangent.
fn slope2(h: f64, c0: f64, c1: f64, neighbour: f64) -> f64 {
    if h != 0.0 {
        (3.0 * (c1 - c0) / h - neighbour) / 2.0
    } else {
        neighbour
    }
}

/// Uniform cubic B-spline through a four-point sliding window.
///
/// Open curves reach their first and last points through straight boundary
/// segments; closed curves form a seamless loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Basis {
    pub closed: bool,
}

impl Basis {
    #[must_use]
    pub fn new(closed: bool) -> Self {
        Self { closed }
    }
}

impl Smoothing for Basis {
    fn smooth(&self, points: &[Point]) -> String {
        if self.closed {
            basis_closed(points)
        } else {
            basis_open(points)
        }
    }
}

fn basis_segment(p0: Point, p1: Point, p: Point) -> String {
    cubic_curve_to(
        Point::new((p0.x + 4.0 * p1.x + p.x) / 6.0, (p0.y + 4.0 * p1.y + p.y) / 6.0),
        Point::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0),
        Point::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0),
    )
}

fn basis_open(points: &[Point]) -> String {
    match points {
        [] => String::new(),
        [only] => move_to(*only),
        [first, second] => {
            let mut path = move_to(*first);
            path.push_str(&line_to(*second));
            path
        }
        [first, second, rest @ ..] => {
            let mut path = move_to(*first);
            path.push_str(&line_to(Point::new(
                (5.0 * first.x + second.x) / 6.0,
                (5.0 * first.y + second.y) / 6.0,
            )));
            let mut p0 = *first;
            let mut p1 = *second;
            for &point in rest {
                path.push_str(&basis_segment(p0, p1, point));
                p0 = p1;
                p1 = point;
            }
            path.push_str(&basis_segment(p0, p1, p1));
            path.push_str(&line_to(p1));
            path
        }
    }
}

fn basis_closed(points: &[Point]) -> String {
    match points {
        [] => String::new(),
        [only] => {
            let mut path = move_to(*only);
            path.push_str(&close_path());
            path
        }
        [a, b] => {
            let mut path = move_to(Point::new((a.x + 2.0 * b.x) / 3.0, (a.y + 2.0 * b.y) / 3.0));
            path.push_str(&line_to(Point::new(
                (b.x + 2.0 * a.x) / 3.0,
                (b.y + 2.0 * a.y) / 3.0,
            )));
            path.push_str(&close_path());
            path
        }
        [a, b, c, rest @ ..] => {
            let mut path = move_to(Point::new(
                (a.x + 4.0 * b.x + c.x) / 6.0,
                (a.y + 4.0 * b.y + c.y) / 6.0,
            ));
            let mut p0 = *b;
            let mut p1 = *c;
            // Wrap around by replaying the first three points.
            for &point in rest.iter().chain([a, b, c]) {
                path.push_str(&basis_segment(p0, p1, point));
                p0 = p1;
                p1 = point;
            }
            path.push_str(&close_path());
            path
        }
    }
}
