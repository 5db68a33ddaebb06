//! Axis and series hooks that drive guide lines from outside the cursor.

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::render::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisDimension {
    X,
    Y,
}

/// Axis a guide line follows instead of the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRef {
    pub id: AxisId,
    /// Whether the axis tooltip (and thus its position events) is active.
    pub tooltip_enabled: bool,
}

impl AxisRef {
    #[must_use]
    pub fn new(id: AxisId) -> Self {
        Self {
            id,
            tooltip_enabled: true,
        }
    }
}

/// Pixel span of the axis item (category or cell) under the tooltip.
///
/// Cartesian spans use `start.x..end.x` or `start.y..end.y`; polar spans use
/// `x` as an angle in degrees and `y` as a radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSpan {
    pub start: Point,
    pub end: Point,
}

impl ItemSpan {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Axis tooltip moved; `position` is in the cursor's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTooltipEvent {
    pub axis: AxisId,
    pub position: Point,
    pub visible: bool,
    pub current_item: Option<ItemSpan>,
}

/// Series tooltip moved to a data item; `point` is in the cursor's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesTooltipEvent {
    pub series: SeriesId,
    pub point: Point,
    pub duration_ms: f64,
    pub easing: Easing,
}

/// Series the cursor snaps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRef {
    pub id: SeriesId,
    pub hidden: bool,
}

impl SeriesRef {
    #[must_use]
    pub fn new(id: SeriesId) -> Self {
        Self { id, hidden: false }
    }
}

/// Axis bindings, full-width flags and snap targets of one cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisBindings {
    pub(crate) x_axis: Option<AxisRef>,
    pub(crate) y_axis: Option<AxisRef>,
    pub(crate) full_width_line_x: bool,
    pub(crate) full_width_line_y: bool,
    pub(crate) snap_to_series: Vec<SeriesRef>,
}

impl AxisBindings {
    #[must_use]
    pub fn x_axis(&self) -> Option<AxisRef> {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> Option<AxisRef> {
        self.y_axis
    }

    #[must_use]
    pub fn full_width_line_x(&self) -> bool {
        self.full_width_line_x
    }

    #[must_use]
    pub fn full_width_line_y(&self) -> bool {
        self.full_width_line_y
    }

    #[must_use]
    pub fn snap_to_series(&self) -> &[SeriesRef] {
        &self.snap_to_series
    }

    /// Whether the pointer drives the guide line of `dimension`.
    ///
    /// A bound axis with an active tooltip takes the line over.
    #[must_use]
    pub fn pointer_drives(&self, dimension: AxisDimension) -> bool {
        let axis = match dimension {
            AxisDimension::X => self.x_axis,
            AxisDimension::Y => self.y_axis,
        };
        !axis.is_some_and(|axis| axis.tooltip_enabled)
    }

    /// Dimension bound to `axis`, if any.
    #[must_use]
    pub fn dimension_of(&self, axis: AxisId) -> Option<AxisDimension> {
        if self.x_axis.is_some_and(|bound| bound.id == axis) {
            Some(AxisDimension::X)
        } else if self.y_axis.is_some_and(|bound| bound.id == axis) {
            Some(AxisDimension::Y)
        } else {
            None
        }
    }

    /// Pointer-driven line updates are suppressed while snapping to a
    /// visible series.
    #[must_use]
    pub fn snapping_active(&self) -> bool {
        self.snap_to_series.iter().any(|series| !series.hidden)
    }

    #[must_use]
    pub fn snaps_to(&self, series: SeriesId) -> bool {
        self.snap_to_series.iter().any(|entry| entry.id == series)
    }

    pub(crate) fn set_series_hidden(&mut self, series: SeriesId, hidden: bool) -> bool {
        match self.snap_to_series.iter_mut().find(|entry| entry.id == series) {
            Some(entry) => {
                entry.hidden = hidden;
                true
            }
            None => false,
        }
    }
}
