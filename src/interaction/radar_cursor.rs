//! Polar cursor over a radar plot.
//!
//! Local coordinates put the origin at the polar center. X maps to the
//! angular axis and Y to the radial one, so the X guide line is a radial
//! segment and the Y guide line a circular arc.

use crate::api::{CursorConfig, RadarCursorConfig};
use crate::core::math::{
    angle_of, distance_from_origin, fit_angle_to_range, fit_to_range, round_to,
};
use crate::core::{PlotFrame, Point, Range, RelativeValue};
use crate::error::ChartResult;
use crate::interaction::{
    AxisBindings, AxisDimension, AxisTooltipEvent, Cursor, CursorElements, CursorGeometry,
    CursorState, GeneralBehavior, ItemSpan, SeriesTooltipEvent, SurfaceId,
};
use crate::render::path::{ArcOptions, arc, arc_to, line_to, move_to};

const RANGE_PRECISION: u32 = 5;

/// Radius tolerance (px) of the hit test.
const BOUNDS_TOLERANCE_PX: f64 = 1.0;

/// Annular cursor geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    radius: RelativeValue,
    inner_radius: RelativeValue,
    start_angle: f64,
    end_angle: f64,
    inner_radius_modifier: f64,
    position_precision: u32,
}

pub type RadarCursor = Cursor<Polar>;

impl Cursor<Polar> {
    pub fn new(config: CursorConfig, surface: SurfaceId, frame: PlotFrame) -> ChartResult<Self> {
        let geometry = Polar::new(&config.radar, config.position_precision);
        Self::with_geometry(config, surface, frame, geometry)
    }

    pub fn set_radius(&mut self, radius: RelativeValue) {
        self.geometry.radius = radius;
        self.config.radar.radius = radius;
        self.refresh_size();
    }

    pub fn set_inner_radius(&mut self, inner_radius: RelativeValue) {
        self.geometry.inner_radius = inner_radius;
        self.config.radar.inner_radius = inner_radius;
        self.refresh_size();
    }

    /// Sets the angular span; equal angles are ignored.
    pub fn set_angles(&mut self, start_angle: f64, end_angle: f64) {
        if !start_angle.is_finite() || !end_angle.is_finite() || start_angle == end_angle {
            return;
        }
        self.geometry.start_angle = start_angle;
        self.geometry.end_angle = end_angle;
        self.config.radar.start_angle = start_angle;
        self.config.radar.end_angle = end_angle;
        self.refresh_size();
    }

    pub fn set_inner_radius_modifier(&mut self, modifier: f64) {
        if modifier.is_finite() && modifier >= 0.0 {
            self.geometry.inner_radius_modifier = modifier;
            self.config.radar.inner_radius_modifier = modifier;
            self.refresh_size();
        }
    }
}

impl Polar {
    #[must_use]
    pub fn new(config: &RadarCursorConfig, position_precision: u32) -> Self {
        Self {
            radius: config.radius,
            inner_radius: config.inner_radius,
            start_angle: config.start_angle,
            end_angle: config.end_angle,
            inner_radius_modifier: config.inner_radius_modifier,
            position_precision,
        }
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Largest radius fitting the plot area.
    #[must_use]
    pub fn true_pixel_radius(&self, state: &CursorState) -> f64 {
        state.width().min(state.height()) / 2.0
    }

    #[must_use]
    pub fn pixel_radius(&self, state: &CursorState) -> f64 {
        self.radius.resolve(self.true_pixel_radius(state)).max(0.0)
    }

    /// Inner radius; percentages are scaled by the inner radius modifier.
    #[must_use]
    pub fn pixel_inner_radius(&self, state: &CursorState) -> f64 {
        let inner_radius = match self.inner_radius {
            RelativeValue::Percent(percent) => {
                RelativeValue::Percent(percent * self.inner_radius_modifier)
            }
            pixels => pixels,
        };
        inner_radius.resolve(self.true_pixel_radius(state)).max(0.0)
    }

    fn arc_span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    fn fit_angle(&self, point: Point) -> f64 {
        fit_angle_to_range(angle_of(point), self.start_angle, self.end_angle)
    }

    fn angle_fraction(&self, point: Point) -> f64 {
        round_to(
            (self.fit_angle(point) - self.start_angle) / self.arc_span(),
            RANGE_PRECISION,
        )
    }

    fn radius_fraction(&self, state: &CursorState, point: Point) -> f64 {
        let radius = self.pixel_radius(state);
        if radius <= 0.0 {
            return 0.0;
        }
        round_to(
            fit_to_range(distance_from_origin(point), 0.0, radius) / radius,
            RANGE_PRECISION,
        )
    }

    /// Radial segment from the inner to the outer radius at `angle`.
    fn radial_line(&self, state: &CursorState, angle: f64) -> String {
        let inner_radius = self.pixel_inner_radius(state);
        let radius = self.pixel_radius(state);
        move_to(Point::polar(angle, inner_radius, inner_radius))
            + &line_to(Point::polar(angle, radius, radius))
    }

    /// Arc at `radius` across the whole angular span.
    fn circular_line(&self, radius: f64) -> String {
        move_to(Point::polar(self.start_angle, radius, radius))
            + &arc_to(self.start_angle, self.arc_span(), radius, None)
    }

    fn line_x_path(
        &self,
        state: &CursorState,
        axes: &AxisBindings,
        point: Point,
        item: Option<ItemSpan>,
    ) -> String {
        let angle = self.fit_angle(point);
        match item {
            Some(item) if axes.full_width_line_x() => {
                let width = (item.end.x - item.start.x).abs();
                sector(
                    angle - width / 2.0,
                    width,
                    self.pixel_radius(state),
                    self.pixel_inner_radius(state),
                )
            }
            _ => self.radial_line(state, angle),
        }
    }

    fn line_y_path(
        &self,
        state: &CursorState,
        axes: &AxisBindings,
        point: Point,
        item: Option<ItemSpan>,
    ) -> String {
        match item {
            Some(item) if axes.full_width_line_y() => {
                let outer = item.start.y.max(item.end.y);
                let inner = item.start.y.min(item.end.y);
                sector(self.start_angle, self.arc_span(), outer, inner)
            }
            _ => {
                let radius = fit_to_range(
                    distance_from_origin(point),
                    0.0,
                    self.true_pixel_radius(state),
                );
                self.circular_line(radius)
            }
        }
    }

    fn place_lines(
        &self,
        state: &CursorState,
        axes: &AxisBindings,
        elements: &mut CursorElements,
        point: Point,
    ) {
        if axes.pointer_drives(AxisDimension::X) {
            if let Some(line) = elements.line_x.as_mut() {
                line.set_path(self.line_x_path(state, axes, point, None));
            }
        }
        if axes.pointer_drives(AxisDimension::Y) {
            if let Some(line) = elements.line_y.as_mut() {
                line.set_path(self.line_y_path(state, axes, point, None));
            }
        }
    }
}

/// Annular sector normalized to a non-negative sweep.
fn sector(start_angle: f64, sweep: f64, radius: f64, inner_radius: f64) -> String {
    let (start_angle, sweep) = if sweep < 0.0 {
        (start_angle + sweep, -sweep)
    } else {
        (start_angle, sweep)
    };
    arc(
        start_angle,
        sweep,
        radius,
        ArcOptions::default().with_inner_radius(inner_radius),
    )
}

impl CursorGeometry for Polar {
    /// Inside the ring, boundaries included within one pixel.
    fn fits_to_bounds(&self, state: &CursorState, point: Point) -> bool {
        let distance = distance_from_origin(point);
        distance < self.pixel_radius(state) + BOUNDS_TOLERANCE_PX
            && distance > self.pixel_inner_radius(state) - BOUNDS_TOLERANCE_PX
    }

    fn positions(&self, state: &CursorState, point: Point) -> (f64, f64) {
        let x = (self.fit_angle(point) - self.start_angle) / self.arc_span();
        let radius = self.pixel_radius(state);
        let y = if radius > 0.0 {
            fit_to_range(distance_from_origin(point), 0.0, radius) / radius
        } else {
            0.0
        };
        (
            round_to(x, self.position_precision),
            round_to(y, self.position_precision),
        )
    }

    fn update_size(&self, state: &CursorState, axes: &AxisBindings, elements: &mut CursorElements) {
        self.place_lines(state, axes, elements, state.point());
    }

    fn update_lines(&self, state: &CursorState, axes: &AxisBindings, elements: &mut CursorElements) {
        self.place_lines(state, axes, elements, state.point());
    }

    fn begin_selection(&self, _state: &CursorState, elements: &mut CursorElements) {
        if let Some(selection) = elements.selection.as_mut() {
            selection.move_to(Point::ORIGIN);
            selection.set_path(String::new());
            selection.show();
        }
    }

    fn update_selection(&self, state: &CursorState, elements: &mut CursorElements) {
        let behavior = state.behavior();
        let Some(down_point) = state.down_point() else {
            return;
        };
        if !behavior.uses_selection() {
            return;
        }
        let Some(selection) = elements.selection.as_mut() else {
            return;
        };
        if distance_from_origin(down_point) >= self.true_pixel_radius(state) + 0.5 {
            return;
        }

        let radius = self.pixel_radius(state);
        let inner_radius = self.pixel_inner_radius(state);
        let point = state.point();
        let down_angle = self.fit_angle(down_point);
        let angle = self.fit_angle(point);
        let down_radius = fit_to_range(distance_from_origin(down_point), inner_radius, radius);
        let current_radius = fit_to_range(distance_from_origin(point), inner_radius, radius);

        let path = if behavior.is_x_only() {
            sector(down_angle, angle - down_angle, radius, inner_radius)
        } else if behavior.is_y_only() {
            sector(self.start_angle, self.arc_span(), current_radius, down_radius)
        } else {
            sector(down_angle, angle - down_angle, current_radius, down_radius)
        };
        selection.set_path(path);
    }

    fn ranges(&self, state: &CursorState, down: Point, up: Point) -> (Range, Range) {
        let behavior = state.behavior();
        let zooms_or_selects = matches!(
            behavior.general(),
            Some(GeneralBehavior::Zoom | GeneralBehavior::Select)
        );
        let x_range = if zooms_or_selects && behavior.affects_x() {
            Range::ordered(self.angle_fraction(down), self.angle_fraction(up))
        } else {
            Range::FULL
        };
        let y_range = if zooms_or_selects && behavior.affects_y() {
            Range::ordered(
                self.radius_fraction(state, down),
                self.radius_fraction(state, up),
            )
        } else {
            Range::FULL
        };
        (x_range, y_range)
    }

    fn panning_ranges(&self, state: &CursorState, down: Point, current: Point) -> (Range, Range) {
        let behavior = state.behavior();
        let delta_x = self.angle_fraction(down) - self.angle_fraction(current);
        let delta_y = self.radius_fraction(state, down) - self.radius_fraction(state, current);
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
        let path = match dimension {
            AxisDimension::X => self.line_x_path(state, axes, event.position, event.current_item),
            AxisDimension::Y => self.line_y_path(state, axes, event.position, event.current_item),
        };
        let Some(line) = elements.line_mut(dimension) else {
            return;
        };
        if !event.visible {
            line.hide();
            return;
        }
        line.show();
        line.set_path(path);
    }

    fn snap_lines(
        &self,
        state: &CursorState,
        axes: &AxisBindings,
        elements: &mut CursorElements,
        event: &SeriesTooltipEvent,
    ) {
        self.place_lines(state, axes, elements, event.point);
    }
}
