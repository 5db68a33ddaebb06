//! Path string construction.
//!
//! Every builder returns a fragment of an SVG-compatible path mini-language.
//! Coordinates are rounded to four decimal digits; fragments concatenate into
//! complete paths. Degenerate geometry produces an empty string, never an
//! error.

use std::fmt::Write;

use smallvec::SmallVec;

use crate::core::Point;
use crate::core::math::{DEGREES, RADIANS, cos_deg, distance, fit_to_range, round_to, sin_deg};

/// Decimal digits kept in emitted coordinates.
pub const PATH_PRECISION: u32 = 4;

/// Default minimum distance between consecutive polyline vertices.
pub const DEFAULT_MIN_POLYLINE_STEP: f64 = 0.5;

/// Arcs wider than this are split into several arc commands.
const MAX_ARC_SEGMENT_DEG: f64 = 180.0;

fn r(value: f64) -> f64 {
    round_to(value, PATH_PRECISION)
}

#[must_use]
pub fn move_to(point: Point) -> String {
    format!(" M{},{} ", r(point.x), r(point.y))
}

#[must_use]
pub fn line_to(point: Point) -> String {
    format!(" L{},{} ", r(point.x), r(point.y))
}

#[must_use]
pub fn close_path() -> String {
    " Z".to_owned()
}

#[must_use]
pub fn quadratic_curve_to(end: Point, control: Point) -> String {
    format!(
        " Q{},{} {},{}",
        r(control.x),
        r(control.y),
        r(end.x),
        r(end.y)
    )
}

#[must_use]
pub fn cubic_curve_to(end: Point, control_a: Point, control_b: Point) -> String {
    format!(
        " C{},{} {},{} {},{}",
        r(control_a.x),
        r(control_a.y),
        r(control_b.x),
        r(control_b.y),
        r(end.x),
        r(end.y)
    )
}

/// Polyline through `points` using [`DEFAULT_MIN_POLYLINE_STEP`] decimation.
#[must_use]
pub fn polyline(points: &[Point]) -> String {
    polyline_with_step(points, DEFAULT_MIN_POLYLINE_STEP)
}

/// Polyline that skips vertices closer than `min_step` to the last emitted one.
#[must_use]
pub fn polyline_with_step(points: &[Point], min_step: f64) -> String {
    let Some((&first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut path = move_to(first);
    let mut previous = first;
    for &point in rest {
        if distance(point, previous) > min_step {
            path.push_str(&line_to(point));
            previous = point;
        }
    }
    path
}

/// Elliptical arc relative to the current point.
///
/// The current point is expected to sit on the arc at `start_angle`. Arcs
/// wider than 180 degrees are emitted as several relative arc commands.
/// A nearly flat arc (`|arc| < 0.5` deg) on a very large radius degrades to
/// an absolute line to the arc's end, taking the arc center as the origin.
#[must_use]
pub fn arc_to(start_angle: f64, arc: f64, radius: f64, radius_y: Option<f64>) -> String {
    if arc == 0.0 || !arc.is_finite() || !radius.is_finite() {
        return String::new();
    }
    let radius_y = radius_y.unwrap_or(radius);

    if arc.abs() < 0.5 && radius > 3000.0 {
        let end_angle = start_angle + arc;
        return line_to(Point::new(
            cos_deg(end_angle) * radius,
            sin_deg(end_angle) * radius_y,
        ));
    }

    let segments = (arc.abs() / MAX_ARC_SEGMENT_DEG).ceil().max(1.0) as usize;
    let sweep = if arc < 0.0 { 0 } else { 1 };
    let start_x = cos_deg(start_angle) * radius;
    let start_y = sin_deg(start_angle) * radius_y;

    let mut path = String::new();
    let mut emitted_x = 0.0;
    let mut emitted_y = 0.0;
    for index in 0..segments {
        let end_angle = start_angle + arc / segments as f64 * (index + 1) as f64;
        // Offsets relative to the previous segment's emitted end.
        let dx = r(cos_deg(end_angle) * radius - start_x - emitted_x);
        let dy = r(sin_deg(end_angle) * radius_y - start_y - emitted_y);
        let _ = write!(path, " a{},{},0,0,{},{},{}", radius, radius_y, sweep, dx, dy);
        emitted_x += dx;
        emitted_y += dy;
    }
    path
}

/// Absolute elliptical arc to a known destination.
///
/// A zero radius yields an empty string, which is how corner rounding is
/// switched off.
#[must_use]
pub fn arc_to_point(
    point: Point,
    radius: f64,
    radius_y: Option<f64>,
    sweep: bool,
    large_arc: bool,
    x_axis_rotation: f64,
) -> String {
    if radius == 0.0 {
        return String::new();
    }
    let radius_y = radius_y.unwrap_or(radius);
    format!(
        " A{},{},{},{},{},{},{}",
        radius,
        radius_y,
        x_axis_rotation,
        u8::from(large_arc),
        u8::from(sweep),
        r(point.x),
        r(point.y)
    )
}

/// Optional geometry of an annular sector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArcOptions {
    pub inner_radius: f64,
    pub radius_y: Option<f64>,
    pub corner_radius: f64,
    /// Defaults to `corner_radius`.
    pub inner_corner_radius: Option<f64>,
}

impl ArcOptions {
    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    #[must_use]
    pub fn with_radius_y(mut self, radius_y: f64) -> Self {
        self.radius_y = Some(radius_y);
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_inner_corner_radius(mut self, inner_corner_radius: f64) -> Self {
        self.inner_corner_radius = Some(inner_corner_radius);
        self
    }
}

/// Closed annular sector ("donut slice") centred on the origin.
///
/// `arc` is clamped to 360 degrees; a full ring cannot carry rounded
/// corners, so corner radii are dropped there.
#[must_use]
pub fn arc(start_angle: f64, arc: f64, radius: f64, options: ArcOptions) -> String {
    if arc == 0.0 || !arc.is_finite() || !start_angle.is_finite() {
        return String::new();
    }
    let mut radius = radius;
    let mut inner_radius = if options.inner_radius.is_finite() {
        options.inner_radius
    } else {
        0.0
    };
    if radius == 0.0 && inner_radius <= 0.0 {
        return String::new();
    }
    let mut radius_y = options.radius_y;
    if radius < inner_radius {
        std::mem::swap(&mut radius, &mut inner_radius);
        if let Some(ry) = radius_y {
            // Keep the ellipse ratio relative to the new outer radius.
            radius_y = (inner_radius != 0.0).then(|| ry / inner_radius * radius);
        }
    }

    let arc = arc.min(360.0);
    let full = arc == 360.0;
    let mut corner_radius = if full { 0.0 } else { options.corner_radius.max(0.0) };
    let mut inner_corner_radius = if full {
        0.0
    } else {
        options.inner_corner_radius.unwrap_or(corner_radius).max(0.0)
    };

    let end_angle = start_angle + arc;
    let cr_sin = sin_deg(arc.abs().min(45.0) / 2.0);
    let radius_y = radius_y.unwrap_or(radius);
    let ratio = radius_y / radius;

    let mut inner_radius_y = ratio * inner_radius;
    let mut corner_radius_y = ratio * corner_radius;
    let mut inner_corner_radius_y = ratio * inner_corner_radius;

    corner_radius = fit_to_range(corner_radius, 0.0, (radius - inner_radius) / 2.0);
    corner_radius_y = fit_to_range(corner_radius_y, 0.0, (radius_y - inner_radius_y) / 2.0);
    inner_corner_radius = fit_to_range(inner_corner_radius, 0.0, (radius - inner_radius) / 2.0);
    inner_corner_radius_y =
        fit_to_range(inner_corner_radius_y, 0.0, (radius_y - inner_radius_y) / 2.0);

    corner_radius = r(fit_to_range(corner_radius, 0.0, radius * cr_sin));
    corner_radius_y = r(fit_to_range(corner_radius_y, 0.0, radius_y * cr_sin));
    inner_corner_radius = r(fit_to_range(inner_corner_radius, 0.0, inner_radius * cr_sin));
    inner_corner_radius_y = r(fit_to_range(inner_corner_radius_y, 0.0, inner_radius_y * cr_sin));

    let cr_angle = corner_angle(corner_radius, radius);
    let cr_angle_y = corner_angle(corner_radius_y, radius_y);

    if inner_radius < inner_corner_radius {
        inner_radius = inner_corner_radius;
    }
    if inner_radius_y < inner_corner_radius_y {
        inner_radius_y = inner_corner_radius_y;
    }
    let cr_inner_angle = corner_angle(inner_corner_radius, inner_radius);
    let cr_inner_angle_y = corner_angle(inner_corner_radius_y, inner_radius_y);

    let middle_angle = start_angle + arc / 2.0;
    let m_point = Point::new(
        r(cos_deg(middle_angle) * inner_radius),
        sin_deg(middle_angle) * inner_radius_y,
    );

    // Anchors: a/d sit on the inner edge, b/c on the outer edge.
    let a0 = Point::new(
        cos_deg(start_angle) * (inner_radius + inner_corner_radius),
        sin_deg(start_angle) * (inner_radius_y + inner_corner_radius_y),
    );
    let b0 = Point::new(
        cos_deg(start_angle) * (radius - corner_radius),
        sin_deg(start_angle) * (radius_y - corner_radius_y),
    );
    let c0 = Point::new(
        cos_deg(end_angle) * (radius - corner_radius),
        sin_deg(end_angle) * (radius_y - corner_radius_y),
    );
    let d0 = Point::new(
        cos_deg(end_angle) * (inner_radius + inner_corner_radius),
        sin_deg(end_angle) * (inner_radius_y + inner_corner_radius_y),
    );
    let b1 = Point::new(
        cos_deg(start_angle + cr_angle) * radius,
        sin_deg(start_angle + cr_angle_y) * radius_y,
    );
    let mut d1 = Point::new(
        cos_deg(end_angle - cr_inner_angle) * inner_radius,
        sin_deg(end_angle - cr_inner_angle_y) * inner_radius_y,
    );

    inner_corner_radius += inner_corner_radius * sin_deg(cr_inner_angle / 2.0);
    inner_corner_radius_y += inner_corner_radius_y * sin_deg(cr_inner_angle_y / 2.0);

    if cr_inner_angle > (end_angle - start_angle) / 2.0 {
        d1 = m_point;
    }

    let mut path = String::new();
    if full {
        path.push_str(&move_to(b0));
    } else {
        path.push_str(&move_to(a0));
        path.push_str(&line_to(b0));
        path.push_str(&arc_to_point(b1, corner_radius, Some(corner_radius_y), true, false, 0.0));
    }

    path.push_str(&arc_to(
        start_angle + cr_angle,
        arc - 2.0 * cr_angle,
        radius,
        Some(radius_y),
    ));

    if inner_radius != 0.0 {
        if full && corner_radius == 0.0 {
            path.push_str(&move_to(a0));
        } else {
            path.push_str(&arc_to_point(c0, corner_radius, Some(corner_radius_y), true, false, 0.0));
            path.push_str(&line_to(d0));
            path.push_str(&arc_to_point(
                d1,
                inner_corner_radius,
                Some(inner_corner_radius_y),
                true,
                false,
                0.0,
            ));
        }
        path.push_str(&arc_to(
            end_angle - cr_inner_angle,
            -(arc - 2.0 * cr_inner_angle),
            inner_radius,
            Some(inner_radius_y),
        ));
        if !full || corner_radius > 0.0 {
            path.push_str(&arc_to_point(
                a0,
                inner_corner_radius,
                Some(inner_corner_radius_y),
                true,
                false,
                0.0,
            ));
        }
        path.push_str(&line_to(a0));
    } else {
        path.push_str(&arc_to_point(c0, corner_radius, Some(corner_radius_y), true, false, 0.0));
        if !full {
            path.push_str(&line_to(a0));
        }
    }
    path
}

/// Angular width (degrees) consumed by a rounded corner of `corner_radius`.
fn corner_angle(corner_radius: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    let angle = (corner_radius / radius / 2.0).asin() * DEGREES * 2.0;
    if angle.is_finite() { angle } else { 0.0 }
}

/// Closed rectangle with its top-left corner at `(x, y)`.
#[must_use]
pub fn rectangle(width: f64, height: f64, x: f64, y: f64) -> String {
    let mut path = move_to(Point::new(x, y));
    path.push_str(&line_to(Point::new(x + width, y)));
    path.push_str(&line_to(Point::new(x + width, y + height)));
    path.push_str(&line_to(Point::new(x, y + height)));
    path.push_str(&close_path());
    path
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Closed rectangle path; `ccw` reverses the winding.
#[must_use]
pub fn rect_to_path(rect: Rect, ccw: bool) -> String {
    let Rect {
        x,
        y,
        width,
        height,
    } = rect;
    let corners: SmallVec<[Point; 4]> = if ccw {
        SmallVec::from_buf([
            Point::new(x, y),
            Point::new(x, y + height),
            Point::new(x + width, y + height),
            Point::new(x + width, y),
        ])
    } else {
        SmallVec::from_buf([
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    };
    let mut path = move_to(corners[0]);
    for &corner in &corners[1..] {
        path.push_str(&line_to(corner));
    }
    path.push_str(&close_path());
    path
}

/// Parameters of [`spiral_points`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralSpec {
    pub cx: f64,
    pub cy: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    pub inner_radius: f64,
    /// Distance between consecutive points along the local arc.
    pub step: f64,
    /// Radial growth per full turn.
    pub radius_step: f64,
    pub start_angle: f64,
    /// Defaults to `start_angle`.
    pub end_angle: Option<f64>,
}

/// Hard cap protecting callers from pathological spiral parameters.
const MAX_SPIRAL_POINTS: usize = 1_000_000;

/// Discrete points along an Archimedean spiral growing from `inner_radius`
/// out to `radius_x`, spaced `step` pixels apart.
#[must_use]
pub fn spiral_points(spec: SpiralSpec) -> Vec<Point> {
    let SpiralSpec {
        cx,
        cy,
        radius_x,
        radius_y,
        inner_radius,
        step,
        radius_step,
        start_angle,
        end_angle,
    } = spec;
    if !(step > 0.0 && radius_step > 0.0 && radius_x > 0.0) {
        return Vec::new();
    }
    let end_angle = end_angle.unwrap_or(start_angle);
    let angle_limit = end_angle + (radius_x - inner_radius) / radius_step * 360.0;

    let mut radius = inner_radius + 0.01;
    let mut angle = start_angle * RADIANS;
    let mut points = Vec::new();

    while radius < radius_x + radius_step && points.len() < MAX_SPIRAL_POINTS {
        let mut step_size = step;
        if step_size / 2.0 > radius {
            step_size = 2.0 * radius;
        }
        angle += 2.0 * (step_size / 2.0 / radius).asin();
        let degrees = angle * DEGREES;
        if degrees > angle_limit {
            break;
        }
        points.push(Point::new(
            cx + radius * angle.cos(),
            cy + radius * radius_y / radius_x * angle.sin(),
        ));
        radius = inner_radius + degrees / 360.0 * radius_step;
    }

    if !points.is_empty() {
        points.remove(0);
    }
    points
}
