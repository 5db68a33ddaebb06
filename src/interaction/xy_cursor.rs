//! Cartesian cursor over a rectangular plot area.
//!
//! Local coordinates put the origin at the plot's top-left corner. The X
//! position grows left to right, the Y position bottom to top.

use crate::api::CursorConfig;
use crate::core::math::{fit_to_range, round_to};
use crate::core::{PlotFrame, Point, Range};
use crate::error::ChartResult;
use crate::interaction::{
    AxisBindings, AxisDimension, AxisTooltipEvent, Cursor, CursorElements, CursorGeometry,
    CursorState, SeriesTooltipEvent, SurfaceId,
};
use crate::render::path::{line_to, move_to, rectangle};
use crate::render::{AnimatedProperty, PathElement};

/// Decimal digits kept in gesture ranges.
const RANGE_PRECISION: u32 = 5;

/// Rectangular cursor geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cartesian {
    position_precision: u32,
}

pub type XyCursor = Cursor<Cartesian>;

impl Cursor<Cartesian> {
    pub fn new(config: CursorConfig, surface: SurfaceId, frame: PlotFrame) -> ChartResult<Self> {
        let geometry = Cartesian::new(config.position_precision);
        Self::with_geometry(config, surface, frame, geometry)
    }
}

impl Cartesian {
    #[must_use]
    pub fn new(position_precision: u32) -> Self {
        Self { position_precision }
    }

    /// Clamps `point` into the plot rectangle.
    #[must_use]
    pub fn fix_point(&self, state: &CursorState, point: Point) -> Point {
        Point::new(
            fit_to_range(point.x, 0.0, state.width()),
            fit_to_range(point.y, 0.0, state.height()),
        )
    }

    fn vertical_line(state: &CursorState) -> String {
        move_to(Point::ORIGIN) + &line_to(Point::new(0.0, state.height()))
    }

    fn horizontal_line(state: &CursorState) -> String {
        move_to(Point::ORIGIN) + &line_to(Point::new(state.width(), 0.0))
    }
}

impl CursorGeometry for Cartesian {
    fn fits_to_bounds(&self, state: &CursorState, point: Point) -> bool {
        (0.0..=state.width()).contains(&point.x) && (0.0..=state.height()).contains(&point.y)
    }

    fn positions(&self, state: &CursorState, point: Point) -> (f64, f64) {
        (
            round_to(point.x / state.width(), self.position_precision),
            round_to(1.0 - point.y / state.height(), self.position_precision),
        )
    }

    fn update_size(&self, state: &CursorState, _axes: &AxisBindings, elements: &mut CursorElements) {
        if let Some(line) = elements.line_x.as_mut() {
            line.set_path(Self::vertical_line(state));
        }
        if let Some(line) = elements.line_y.as_mut() {
            line.set_path(Self::horizontal_line(state));
        }
    }

    fn update_lines(&self, state: &CursorState, axes: &AxisBindings, elements: &mut CursorElements) {
        let point = self.fix_point(state, state.point());
        if axes.pointer_drives(AxisDimension::X) {
            if let Some(line) = elements.line_x.as_mut() {
                line.set_x(point.x);
            }
        }
        if axes.pointer_drives(AxisDimension::Y) {
            if let Some(line) = elements.line_y.as_mut() {
                line.set_y(point.y);
            }
        }
    }

    /// Gesture points follow the guide lines, which may be clamped or
    /// snapped to an axis.
    fn update_point(&self, _state: &CursorState, elements: &CursorElements, point: Point) -> Point {
        Point::new(
            elements.line_x.as_ref().map_or(point.x, PathElement::x),
            elements.line_y.as_ref().map_or(point.y, PathElement::y),
        )
    }

    fn begin_selection(&self, state: &CursorState, elements: &mut CursorElements) {
        let (Some(selection), Some(down_point)) = (elements.selection.as_mut(), state.down_point())
        else {
            return;
        };
        selection.move_to(down_point);
        selection.set_path(rectangle(0.0, 0.0, 0.0, 0.0));
        selection.show();
    }

    fn update_selection(&self, state: &CursorState, elements: &mut CursorElements) {
        let behavior = state.behavior();
        let Some(down_point) = state.down_point() else {
            return;
        };
        if !behavior.uses_selection() {
            return;
        }
        let current = self.update_point(state, elements, self.fix_point(state, state.point()));
        let Some(selection) = elements.selection.as_mut() else {
            return;
        };

        let mut x = down_point.x.min(current.x);
        let mut y = down_point.y.min(current.y);
        let mut width = round_to((current.x - down_point.x).abs(), self.position_precision);
        let mut height = round_to((current.y - down_point.y).abs(), self.position_precision);
        if behavior.is_x_only() {
            y = 0.0;
            height = state.height();
        }
        if behavior.is_y_only() {
            x = 0.0;
            width = state.width();
        }
        selection.move_to(Point::new(x, y));
        selection.set_path(rectangle(width, height, 0.0, 0.0));
    }

    fn ranges(&self, state: &CursorState, down: Point, up: Point) -> (Range, Range) {
        let behavior = state.behavior();
        let x_range = if behavior.is_y_only() {
            Range::FULL
        } else {
            Range::ordered(
                round_to(down.x / state.width(), RANGE_PRECISION),
                round_to(up.x / state.width(), RANGE_PRECISION),
            )
        };
        let y_range = if behavior.is_x_only() {
            Range::FULL
        } else {
            Range::ordered(
                round_to(1.0 - down.y / state.height(), RANGE_PRECISION),
                round_to(1.0 - up.y / state.height(), RANGE_PRECISION),
            )
        };
        (x_range, y_range)
    }

    fn panning_ranges(&self, state: &CursorState, down: Point, current: Point) -> (Range, Range) {
        let behavior = state.behavior();
        let delta_x = round_to(down.x / state.width(), RANGE_PRECISION)
            - round_to(current.x / state.width(), RANGE_PRECISION);
        let delta_y = round_to(current.y / state.height(), RANGE_PRECISION)
            - round_to(down.y / state.height(), RANGE_PRECISION);
        let x_range = if behavior.is_y_only() {
            Range::FULL
        } else {
            Range::new(delta_x, 1.0 + delta_x)
        };
        let y_range = if behavior.is_x_only() {
            Range::FULL
        } else {
            Range::new(delta_y, 1.0 + delta_y)
        };
        (x_range, y_range)
    }

    fn follow_axis_tooltip(
        &self,
        state: &CursorState,
        axes: &AxisBindings,
        elements: &mut CursorElements,
        dimension: AxisDimension,
        event: &AxisTooltipEvent,
    ) {
        let Some(line) = elements.line_mut(dimension) else {
            return;
        };
        if !event.visible {
            line.hide();
            return;
        }
        line.show();
        match dimension {
            AxisDimension::X => {
                line.set_x(event.position.x);
                let path = match event.current_item {
                    Some(item) if axes.full_width_line_x() => {
                        let width = (item.end.x - item.start.x).abs();
                        rectangle(width, state.height(), -width / 2.0, 0.0)
                    }
                    _ => Self::vertical_line(state),
                };
                line.set_path(path);
            }
            AxisDimension::Y => {
                line.set_y(event.position.y);
                let path = match event.current_item {
                    Some(item) if axes.full_width_line_y() => {
                        let height = (item.end.y - item.start.y).abs();
                        rectangle(state.width(), height, 0.0, -height / 2.0)
                    }
                    _ => Self::horizontal_line(state),
                };
                line.set_path(path);
            }
        }
    }

    fn snap_lines(
        &self,
        state: &CursorState,
        axes: &AxisBindings,
        elements: &mut CursorElements,
        event: &SeriesTooltipEvent,
    ) {
        let point = self.fix_point(state, event.point);
        if axes.pointer_drives(AxisDimension::X) {
            if let Some(line) = elements.line_x.as_mut() {
                line.animate(AnimatedProperty::X, point.x, event.duration_ms, event.easing);
            }
        }
        if axes.pointer_drives(AxisDimension::Y) {
            if let Some(line) = elements.line_y.as_mut() {
                line.animate(AnimatedProperty::Y, point.y, event.duration_ms, event.easing);
            }
        }
    }
}
