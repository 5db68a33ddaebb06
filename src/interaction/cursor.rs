use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::api::CursorConfig;
use crate::core::math::{distance, round_to};
use crate::core::{PlotFrame, Point, Range};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{CursorEvent, CursorListener};
use crate::interaction::{
    AxisBindings, AxisRef, AxisTooltipEvent, CursorBehavior, CursorElements, CursorGeometry,
    CursorState, GeneralBehavior, InputEffects, InputSource, MouseCursorStyle, PointerEvent,
    PointerEventKind, PointerHandler, SeriesId, SeriesRef, SeriesTooltipEvent, StickMode,
    Subscription, SurfaceId,
};
use crate::render::{CursorFrame, ElementRole, PathElement};

/// Pointer-driven cursor over a plot area.
///
/// The driver owns gesture state, visibility and the event bus; `G` decides
/// what "in bounds", positions and ranges mean and how the guide lines and
/// selection are shaped.
pub struct Cursor<G: CursorGeometry> {
    pub(crate) config: CursorConfig,
    surface: SurfaceId,
    pub(crate) state: CursorState,
    pub(crate) elements: CursorElements,
    pub(crate) axes: AxisBindings,
    pub(crate) geometry: G,
    pub(crate) listeners: Vec<Box<dyn CursorListener>>,
    subscription: Option<Subscription>,
    disposed: bool,
}

impl<G: CursorGeometry> Cursor<G> {
    /// Builds a detached cursor; it starts hidden.
    pub fn with_geometry(
        config: CursorConfig,
        surface: SurfaceId,
        frame: PlotFrame,
        geometry: G,
    ) -> ChartResult<Self> {
        config.validate()?;
        if !frame.size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: frame.size.width,
                height: frame.size.height,
            });
        }

        let line_style = |full_width: bool| {
            if full_width {
                config.full_width_line_style()
            } else {
                config.line_style()
            }
        };
        let mut selection = PathElement::new(config.selection_style());
        selection.hide();
        let elements = CursorElements {
            line_x: config
                .line_x_enabled
                .then(|| PathElement::new(line_style(config.full_width_line_x))),
            line_y: config
                .line_y_enabled
                .then(|| PathElement::new(line_style(config.full_width_line_y))),
            selection: Some(selection),
        };
        let axes = AxisBindings {
            full_width_line_x: config.full_width_line_x,
            full_width_line_y: config.full_width_line_y,
            ..AxisBindings::default()
        };

        let mut cursor = Self {
            state: CursorState::new(frame, config.behavior),
            config,
            surface,
            elements,
            axes,
            geometry,
            listeners: Vec::new(),
            subscription: None,
            disposed: false,
        };
        cursor.refresh_size();
        Ok(cursor)
    }

    /// Wraps the cursor for shared ownership and subscribes it to `input`.
    pub fn into_shared(self, input: &impl InputSource) -> Rc<RefCell<Self>>
    where
        G: 'static,
    {
        let cursor = Rc::new(RefCell::new(self));
        Self::attach(&cursor, input);
        cursor
    }

    /// Subscribes a shared cursor to `input`, replacing any previous
    /// subscription.
    pub fn attach(cursor: &Rc<RefCell<Self>>, input: &impl InputSource)
    where
        G: 'static,
    {
        let handler: Rc<RefCell<dyn PointerHandler>> = cursor.clone();
        let subscription = input.subscribe(Rc::downgrade(&handler));
        let mut cursor = cursor.borrow_mut();
        cursor.subscription = Some(subscription);
        cursor.disposed = false;
    }

    /// Drops the input subscription and all listeners.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
        self.listeners.clear();
        self.disposed = true;
        debug!(surface = self.surface, "cursor disposed");
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    #[must_use]
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    #[must_use]
    pub fn state(&self) -> &CursorState {
        &self.state
    }

    #[must_use]
    pub fn axes(&self) -> &AxisBindings {
        &self.axes
    }

    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    #[must_use]
    pub fn elements(&self) -> &CursorElements {
        &self.elements
    }

    #[must_use]
    pub fn line_x(&self) -> Option<&PathElement> {
        self.elements.line_x.as_ref()
    }

    #[must_use]
    pub fn line_y(&self) -> Option<&PathElement> {
        self.elements.line_y.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&PathElement> {
        self.elements.selection.as_ref()
    }

    #[must_use]
    pub fn point(&self) -> Point {
        self.state.point
    }

    #[must_use]
    pub fn down_point(&self) -> Option<Point> {
        self.state.down_point
    }

    #[must_use]
    pub fn up_point(&self) -> Option<Point> {
        self.state.up_point
    }

    #[must_use]
    pub fn x_position(&self) -> f64 {
        self.state.x_position
    }

    #[must_use]
    pub fn y_position(&self) -> f64 {
        self.state.y_position
    }

    #[must_use]
    pub fn x_range(&self) -> Option<Range> {
        self.state.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> Option<Range> {
        self.state.y_range
    }

    #[must_use]
    pub fn behavior(&self) -> CursorBehavior {
        self.state.behavior
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    #[must_use]
    pub fn is_hiding(&self) -> bool {
        self.state.is_hiding()
    }

    pub fn set_behavior(&mut self, behavior: CursorBehavior) {
        if self.state.behavior == behavior {
            return;
        }
        debug!(?behavior, "cursor behavior changed");
        self.state.behavior = behavior;
        self.config.behavior = behavior;
        if !behavior.uses_selection() {
            if let Some(selection) = self.elements.selection.as_mut() {
                selection.hide();
            }
        }
    }

    pub fn set_hit_tolerance(&mut self, hit_tolerance_px: f64) {
        if hit_tolerance_px.is_finite() && hit_tolerance_px >= 0.0 {
            self.config.hit_tolerance_px = hit_tolerance_px;
        }
    }

    pub fn set_interactions_enabled(&mut self, enabled: bool) {
        self.config.interactions_enabled = enabled;
    }

    pub fn set_touch_protected(&mut self, touch_protected: bool) {
        self.config.touch_protected = touch_protected;
    }

    /// Moves or resizes the plot area and rebuilds the guide lines.
    pub fn set_frame(&mut self, frame: PlotFrame) -> ChartResult<()> {
        if !frame.size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: frame.size.width,
                height: frame.size.height,
            });
        }
        if self.state.frame != frame {
            self.state.frame = frame;
            self.refresh_size();
        }
        Ok(())
    }

    /// Replaces the X guide line; the previous element is returned.
    pub fn set_line_x(&mut self, line: Option<PathElement>) -> Option<PathElement> {
        let previous = std::mem::replace(&mut self.elements.line_x, line);
        self.refresh_size();
        previous
    }

    /// Replaces the Y guide line; the previous element is returned.
    pub fn set_line_y(&mut self, line: Option<PathElement>) -> Option<PathElement> {
        let previous = std::mem::replace(&mut self.elements.line_y, line);
        self.refresh_size();
        previous
    }

    /// Replaces the selection overlay; the previous element is returned.
    pub fn set_selection(&mut self, selection: Option<PathElement>) -> Option<PathElement> {
        let mut selection = selection;
        if let Some(selection) = selection.as_mut() {
            if self.state.down_point.is_none() {
                selection.hide();
            }
        }
        let previous = std::mem::replace(&mut self.elements.selection, selection);
        self.geometry
            .update_selection(&self.state, &mut self.elements);
        previous
    }

    pub fn set_x_axis(&mut self, axis: Option<AxisRef>) {
        debug!(axis = ?axis.map(|axis| axis.id), "cursor x axis bound");
        self.axes.x_axis = axis;
        self.refresh_lines();
    }

    pub fn set_y_axis(&mut self, axis: Option<AxisRef>) {
        debug!(axis = ?axis.map(|axis| axis.id), "cursor y axis bound");
        self.axes.y_axis = axis;
        self.refresh_lines();
    }

    /// Draws guide lines as bands over the bound axis's current item.
    pub fn set_full_width_lines(&mut self, x: bool, y: bool) {
        self.axes.full_width_line_x = x;
        self.axes.full_width_line_y = y;
        self.config.full_width_line_x = x;
        self.config.full_width_line_y = y;
        let x_style = if x {
            self.config.full_width_line_style()
        } else {
            self.config.line_style()
        };
        let y_style = if y {
            self.config.full_width_line_style()
        } else {
            self.config.line_style()
        };
        if let Some(line) = self.elements.line_x.as_mut() {
            line.set_style(x_style);
        }
        if let Some(line) = self.elements.line_y.as_mut() {
            line.set_style(y_style);
        }
        self.refresh_size();
    }

    pub fn set_snap_to_series(&mut self, series: Vec<SeriesRef>) {
        debug!(count = series.len(), "cursor snap targets changed");
        self.axes.snap_to_series = series;
    }

    /// Marks a snap target hidden or shown; returns whether it is a target.
    pub fn set_series_hidden(&mut self, series: SeriesId, hidden: bool) -> bool {
        self.axes.set_series_hidden(series, hidden)
    }

    /// Clears any stick override.
    pub fn release_stick(&mut self) {
        if self.state.stick != StickMode::None {
            debug!("cursor stick released");
        }
        self.state.stick = StickMode::None;
        self.state.stick_point = None;
    }

    pub fn show(&mut self) {
        self.state.show_now();
    }

    /// Hides the cursor, fading over `duration_ms` (or the configured
    /// duration). Ignored while a stick override holds the cursor.
    pub fn hide(&mut self, duration_ms: Option<f64>) {
        let duration_ms = duration_ms.unwrap_or(self.config.hide_duration_ms);
        if !self.state.begin_hide(duration_ms) {
            trace!("hide ignored: cursor is stuck");
        }
    }

    /// Advances fades and element animations; returns whether any is running.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        let fading = self.state.step_fade(delta_ms);
        let animating = self.elements.step(delta_ms);
        fading || animating
    }

    /// Materializes the visible elements for a renderer.
    #[must_use]
    pub fn frame(&self) -> CursorFrame {
        let mut frame = CursorFrame::new(self.state.frame);
        frame.opacity = self.state.opacity;
        if !self.state.visible {
            return frame;
        }
        for (role, element) in [
            (ElementRole::LineX, &self.elements.line_x),
            (ElementRole::LineY, &self.elements.line_y),
            (ElementRole::Selection, &self.elements.selection),
        ] {
            if let Some(element) = element.as_ref().filter(|element| element.is_visible()) {
                frame = frame.with_element(role, element.clone());
            }
        }
        frame
    }

    /// Programmatic pointer move in local coordinates.
    ///
    /// `stick` changes the stick mode; soft or hard sticking records the
    /// point as the stick point. `force` re-processes an unchanged point.
    pub fn trigger_move(&mut self, point: Point, stick: Option<StickMode>, force: bool) {
        let point = round_point(point);
        if let Some(stick) = stick {
            if stick != self.state.stick {
                debug!(?stick, "cursor stick mode changed");
            }
            self.state.stick = stick;
            self.state.stick_point = stick.sticks().then_some(point);
        }
        self.trigger_move_real(point, force);
    }

    /// Programmatic gesture start in local coordinates.
    pub fn trigger_down(&mut self, point: Point) -> InputEffects {
        let point = round_point(point);
        let mut effects = InputEffects::default();
        self.state.down_point_orig = Some(point);
        self.trigger_down_real(point, &mut effects);
        effects
    }

    /// Programmatic gesture end in local coordinates.
    pub fn trigger_up(&mut self, point: Point) -> InputEffects {
        let point = round_point(point);
        let mut effects = InputEffects::default();
        self.state.up_point_orig = Some(point);
        self.trigger_up_real(point, &mut effects);
        effects
    }

    /// Body-level pointer move; returns the local point that was applied.
    pub fn handle_cursor_move(&mut self, event: &PointerEvent) -> Option<Point> {
        if !self.accepts(event) {
            return None;
        }
        // An active gesture keeps tracking past the surface edge.
        if self.state.down_point.is_none() && !event.is_over(self.surface) {
            if self.state.visible && !self.state.is_hiding() {
                self.hide(None);
            }
            return None;
        }

        let mut local = self.to_local(event.point);
        if let Some(stick_point) = self.state.stick_point {
            match self.state.stick {
                StickMode::Hard => local = stick_point,
                StickMode::Soft if !self.geometry.fits_to_bounds(&self.state, local) => {
                    local = stick_point;
                }
                _ => {}
            }
        }
        self.trigger_move(local, None, false);
        Some(local)
    }

    pub fn handle_cursor_down(&mut self, event: &PointerEvent, effects: &mut InputEffects) {
        if !self.accepts(event) || !event.is_over(self.surface) || self.hard_stuck() {
            return;
        }
        let local = self.to_local(event.point);
        self.state.down_point_orig = Some(local);
        if event.cancelable
            && self.config.prevent_gestures
            && self.geometry.fits_to_bounds(&self.state, local)
        {
            effects.prevent_default = true;
        }
        self.trigger_move(local, None, false);
        self.trigger_down_real(local, effects);
    }

    pub fn handle_cursor_up(&mut self, event: &PointerEvent, effects: &mut InputEffects) {
        if !self.accepts(event) {
            return;
        }
        let Some(down_point) = self.state.down_point else {
            return;
        };
        if !self.geometry.fits_to_bounds(&self.state, down_point) || self.hard_stuck() {
            return;
        }
        let local = self.to_local(event.point);
        self.state.up_point_orig = Some(local);
        self.trigger_move(local, None, false);
        self.trigger_up_real(local, effects);
    }

    /// A bound axis tooltip moved; its guide line follows.
    pub fn handle_axis_tooltip(&mut self, event: &AxisTooltipEvent) {
        let Some(dimension) = self.axes.dimension_of(event.axis) else {
            return;
        };
        if self.axes.pointer_drives(dimension) {
            return;
        }
        self.geometry.follow_axis_tooltip(
            &self.state,
            &self.axes,
            &mut self.elements,
            dimension,
            event,
        );
    }

    /// A snapped series' tooltip moved; the cursor jumps to the data item
    /// unless a gesture is active.
    pub fn handle_series_tooltip(&mut self, event: &SeriesTooltipEvent) {
        if self.state.down_point.is_some() || !self.axes.snaps_to(event.series) {
            return;
        }
        trace!(series = event.series.0, "cursor snapped to series");
        self.state.point = event.point;
        self.state.position_revision += 1;
        self.update_positions();
        self.geometry
            .snap_lines(&self.state, &self.axes, &mut self.elements, event);
    }

    fn trigger_move_real(&mut self, point: Point, force: bool) {
        if self.state.point != point || force {
            self.state.point = point;
            self.state.position_revision += 1;
            if self.geometry.fits_to_bounds(&self.state, point) {
                self.state.show_now();
            } else if self.state.down_point.is_none() {
                self.hide(None);
            }
            self.update_positions();
        }

        if self.state.down_point.is_some() || !self.axes.snapping_active() {
            self.geometry
                .update_lines(&self.state, &self.axes, &mut self.elements);
        }
        self.geometry
            .update_selection(&self.state, &mut self.elements);
        self.emit_panning();
    }

    fn trigger_down_real(&mut self, point: Point, effects: &mut InputEffects) {
        if !self.state.visible || self.state.is_hiding() {
            return;
        }
        if self.geometry.fits_to_bounds(&self.state, point) {
            self.state.down_point = Some(point);
            self.state.up_point = None;
            self.state.point = point;
            let behavior = self.state.behavior;
            if behavior.uses_selection() {
                self.geometry
                    .begin_selection(&self.state, &mut self.elements);
            }
            let started = match behavior.general() {
                Some(GeneralBehavior::Zoom) => Some(CursorEvent::ZoomStarted),
                Some(GeneralBehavior::Select) => Some(CursorEvent::SelectStarted),
                Some(GeneralBehavior::Pan) => {
                    effects.global_style = Some(MouseCursorStyle::Grabbing);
                    Some(CursorEvent::PanStarted)
                }
                None => None,
            };
            debug!(?behavior, x = point.x, y = point.y, "cursor gesture started");
            if let Some(event) = started {
                self.emit(event);
            }
        } else {
            self.state.down_point = None;
        }
        self.geometry
            .update_selection(&self.state, &mut self.elements);
    }

    fn trigger_up_real(&mut self, point: Point, effects: &mut InputEffects) {
        let Some(down_point) = self.state.down_point else {
            return;
        };
        let behavior = self.state.behavior;
        let travelled = match (self.state.down_point_orig, self.state.up_point_orig) {
            (Some(down), Some(up)) => distance(down, up),
            _ => distance(down_point, point),
        };
        let moved = travelled >= self.config.hit_tolerance_px;

        let up_point = self
            .geometry
            .update_point(&self.state, &self.elements, point);
        self.state.up_point = Some(up_point);
        let (x_range, y_range) = if behavior.general() == Some(GeneralBehavior::Pan) {
            self.geometry
                .panning_ranges(&self.state, down_point, up_point)
        } else {
            self.geometry.ranges(&self.state, down_point, up_point)
        };
        self.state.x_range = Some(x_range);
        self.state.y_range = Some(y_range);

        if let Some(general) = behavior.general() {
            let event = if moved {
                debug!(?behavior, ?x_range, ?y_range, "cursor gesture ended");
                match general {
                    GeneralBehavior::Zoom => CursorEvent::ZoomEnded { x_range, y_range },
                    GeneralBehavior::Select => CursorEvent::SelectEnded { x_range, y_range },
                    GeneralBehavior::Pan => CursorEvent::PanEnded { x_range, y_range },
                }
            } else {
                debug!(?behavior, travelled, "cursor gesture canceled within hit tolerance");
                CursorEvent::BehaviorCanceled
            };
            self.emit(event);
            if general == GeneralBehavior::Pan {
                effects.global_style = Some(MouseCursorStyle::Default);
            }
        }

        if behavior.general() != Some(GeneralBehavior::Select) || !moved {
            if let Some(selection) = self.elements.selection.as_mut() {
                selection.hide();
            }
        }
        self.state.down_point = None;
        self.geometry
            .update_selection(&self.state, &mut self.elements);
    }

    fn emit_panning(&mut self) {
        if self.state.behavior.general() != Some(GeneralBehavior::Pan) {
            return;
        }
        let Some(down_point) = self.state.down_point else {
            return;
        };
        let point = self.state.point;
        if distance(down_point, point) <= self.config.pan_threshold_px {
            return;
        }
        let (x_range, y_range) = self
            .geometry
            .panning_ranges(&self.state, down_point, point);
        self.state.x_range = Some(x_range);
        self.state.y_range = Some(y_range);
        self.emit(CursorEvent::Panning { x_range, y_range });
    }

    fn update_positions(&mut self) {
        if !self.state.visible {
            return;
        }
        let (x_position, y_position) = self.geometry.positions(&self.state, self.state.point);
        self.state.x_position = x_position;
        self.state.y_position = y_position;
        self.emit(CursorEvent::CursorPositionChanged {
            x_position,
            y_position,
        });
    }

    pub(crate) fn refresh_size(&mut self) {
        self.geometry
            .update_size(&self.state, &self.axes, &mut self.elements);
        self.refresh_lines();
    }

    fn refresh_lines(&mut self) {
        self.geometry
            .update_lines(&self.state, &self.axes, &mut self.elements);
    }

    fn accepts(&self, event: &PointerEvent) -> bool {
        !self.disposed
            && self.config.interactions_enabled
            && !(self.config.touch_protected && event.touch)
    }

    fn hard_stuck(&self) -> bool {
        self.state.stick == StickMode::Hard && self.state.stick_point.is_some()
    }

    fn to_local(&self, point: Point) -> Point {
        round_point(self.state.frame.document_to_local(point))
    }
}

impl<G: CursorGeometry> PointerHandler for Cursor<G> {
    fn handle_pointer(&mut self, event: &PointerEvent, effects: &mut InputEffects) {
        match event.kind {
            PointerEventKind::Down => self.handle_cursor_down(event, effects),
            PointerEventKind::Move => {
                self.handle_cursor_move(event);
            }
            PointerEventKind::Up => self.handle_cursor_up(event, effects),
        }
    }
}

fn round_point(point: Point) -> Point {
    Point::new(round_to(point.x, 1), round_to(point.y, 1))
}
