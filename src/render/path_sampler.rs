//! Equal arc-length sampling of path strings.
//!
//! Works analytically on the parsed path instead of querying a live drawing
//! surface: arcs are approximated by cubic Béziers and lengths are integrated
//! to [`ARCLEN_ACCURACY`].

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg};
use tracing::debug;

use crate::core::Point;

/// Absolute arc-length tolerance in pixels.
pub const ARCLEN_ACCURACY: f64 = 1e-3;

/// Samples `count` points spaced evenly along `path` by arc length.
///
/// The first sample sits at the path start; samples cover `[0, length)` so
/// closed outlines do not repeat their start point. Returns `None` when the
/// path cannot be parsed or has no length.
#[must_use]
pub fn path_to_points(path: &str, count: usize) -> Option<Vec<Point>> {
    let parsed = match BezPath::from_svg(path.trim()) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(error = %err, "path sampling unavailable for unparsable path");
            return None;
        }
    };

    let segments: Vec<(PathSeg, f64)> = parsed
        .segments()
        .map(|segment| (segment, segment.arclen(ARCLEN_ACCURACY)))
        .collect();
    let total: f64 = segments.iter().map(|(_, length)| length).sum();
    if segments.is_empty() || !total.is_finite() || total <= 0.0 {
        return None;
    }

    let mut points = Vec::with_capacity(count);
    let mut segment_index = 0;
    let mut consumed = 0.0;
    for sample in 0..count {
        let target = sample as f64 / count as f64 * total;
        while segment_index + 1 < segments.len() && consumed + segments[segment_index].1 < target
        {
            consumed += segments[segment_index].1;
            segment_index += 1;
        }
        let (segment, length) = segments[segment_index];
        let local = (target - consumed).clamp(0.0, length);
        let t = if length > 0.0 {
            segment.inv_arclen(local, ARCLEN_ACCURACY)
        } else {
            0.0
        };
        let point = segment.eval(t);
        points.push(Point::new(point.x, point.y));
    }
    Some(points)
}
