use crate::core::{Point, Range};
use crate::interaction::{AxisBindings, AxisDimension, AxisTooltipEvent, CursorState, SeriesTooltipEvent};
use crate::render::PathElement;

/// Visual parts a cursor draws; any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorElements {
    pub line_x: Option<PathElement>,
    pub line_y: Option<PathElement>,
    pub selection: Option<PathElement>,
}

impl CursorElements {
    pub(crate) fn line_mut(&mut self, dimension: AxisDimension) -> Option<&mut PathElement> {
        match dimension {
            AxisDimension::X => self.line_x.as_mut(),
            AxisDimension::Y => self.line_y.as_mut(),
        }
    }

    /// Advances element animations; returns whether any is still running.
    pub(crate) fn step(&mut self, delta_ms: f64) -> bool {
        let mut running = false;
        for element in [
            self.line_x.as_mut(),
            self.line_y.as_mut(),
            self.selection.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            running |= element.step(delta_ms);
        }
        running
    }
}

/// Coordinate system plugged into [`crate::interaction::Cursor`].
///
/// Implementations answer hit tests, map points to normalized positions and
/// ranges, and shape the guide lines and selection overlay. They never
/// dispatch events or touch gesture state.
pub trait CursorGeometry {
    /// Whether `point` lies in the interactive area.
    fn fits_to_bounds(&self, state: &CursorState, point: Point) -> bool;

    /// Normalized `(x, y)` positions of `point`.
    fn positions(&self, state: &CursorState, point: Point) -> (f64, f64);

    /// Rebuilds guide-line paths after the plot area changed size.
    fn update_size(&self, state: &CursorState, axes: &AxisBindings, elements: &mut CursorElements);

    /// Moves the pointer-driven guide lines to the current point.
    fn update_lines(&self, state: &CursorState, axes: &AxisBindings, elements: &mut CursorElements);

    /// Gesture end point derived from `point`, e.g. snapped to the guide lines.
    fn update_point(&self, _state: &CursorState, _elements: &CursorElements, point: Point) -> Point {
        point
    }

    /// Seeds the selection overlay at the down point.
    fn begin_selection(&self, state: &CursorState, elements: &mut CursorElements);

    /// Reshapes the selection overlay for the active gesture.
    fn update_selection(&self, state: &CursorState, elements: &mut CursorElements);

    /// Normalized ranges swept between `down` and `up`.
    fn ranges(&self, state: &CursorState, down: Point, up: Point) -> (Range, Range);

    /// Signed range shift of a pan from `down` to `current`.
    fn panning_ranges(&self, state: &CursorState, down: Point, current: Point) -> (Range, Range);

    /// Moves the guide line of `dimension` to a bound axis tooltip.
    fn follow_axis_tooltip(
        &self,
        state: &CursorState,
        axes: &AxisBindings,
        elements: &mut CursorElements,
        dimension: AxisDimension,
        event: &AxisTooltipEvent,
    );

    /// Moves pointer-driven guide lines to a snapped series tooltip.
    fn snap_lines(
        &self,
        state: &CursorState,
        axes: &AxisBindings,
        elements: &mut CursorElements,
        event: &SeriesTooltipEvent,
    );
}
