use serde::{Deserialize, Serialize};

use crate::core::math::round_to;

/// Pixel coordinate in a cursor's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle (or ellipse when `radius_y` differs) around the origin.
    #[must_use]
    pub fn polar(angle_deg: f64, radius: f64, radius_y: f64) -> Self {
        Self {
            x: crate::core::math::cos_deg(angle_deg) * radius,
            y: crate::core::math::sin_deg(angle_deg) * radius_y,
        }
    }

    #[must_use]
    pub fn rounded(self, precision: u32) -> Self {
        Self {
            x: round_to(self.x, precision),
            y: round_to(self.y, precision),
        }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Normalized `0..1` interval along one axis dimension.
///
/// Panning ranges may leave `0..1` because they carry a signed shift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub const FULL: Range = Range {
        start: 0.0,
        end: 1.0,
    };

    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Builds a range with `start <= end` regardless of argument order.
    #[must_use]
    pub fn ordered(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::FULL
    }
}

/// Length expressed either in absolute pixels or as a percentage of a
/// reference length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeValue {
    Pixels(f64),
    /// Percentage in `0..=100` of the reference length.
    Percent(f64),
}

impl RelativeValue {
    /// Resolves the value against `full`.
    ///
    /// Negative pixel values count back from `full`.
    #[must_use]
    pub fn resolve(self, full: f64) -> f64 {
        match self {
            Self::Percent(percent) => full * percent / 100.0,
            Self::Pixels(px) if px < 0.0 => full + px,
            Self::Pixels(px) => px,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Percent(value) | Self::Pixels(value) => value.is_finite(),
        }
    }
}

/// Placement of a cursor's local frame inside document space.
///
/// XY cursors put `origin` at the plot area's top-left corner; radar cursors
/// put it at the polar center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub origin: Point,
    pub size: Size,
}

impl PlotFrame {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Translates a document-space point into this frame.
    #[must_use]
    pub fn document_to_local(self, point: Point) -> Point {
        Point::new(point.x - self.origin.x, point.y - self.origin.y)
    }

    #[must_use]
    pub fn local_to_document(self, point: Point) -> Point {
        Point::new(point.x + self.origin.x, point.y + self.origin.y)
    }
}
