use crate::core::{PlotFrame, Point, Range, Size};
use crate::interaction::{CursorBehavior, StickMode};
use crate::render::{AnimatedProperty, Easing, Transition};

/// Gesture and visibility state shared by every cursor geometry.
///
/// Points are in the cursor's local frame; positions and ranges are
/// normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorState {
    pub(crate) frame: PlotFrame,
    pub(crate) behavior: CursorBehavior,
    pub(crate) point: Point,
    pub(crate) down_point: Option<Point>,
    pub(crate) up_point: Option<Point>,
    pub(crate) down_point_orig: Option<Point>,
    pub(crate) up_point_orig: Option<Point>,
    pub(crate) stick: StickMode,
    pub(crate) stick_point: Option<Point>,
    pub(crate) x_position: f64,
    pub(crate) y_position: f64,
    pub(crate) x_range: Option<Range>,
    pub(crate) y_range: Option<Range>,
    pub(crate) visible: bool,
    pub(crate) opacity: f64,
    pub(crate) fade: Option<Transition>,
    pub(crate) position_revision: u64,
}

impl CursorState {
    pub(crate) fn new(frame: PlotFrame, behavior: CursorBehavior) -> Self {
        Self {
            frame,
            behavior,
            point: Point::ORIGIN,
            down_point: None,
            up_point: None,
            down_point_orig: None,
            up_point_orig: None,
            stick: StickMode::None,
            stick_point: None,
            x_position: 0.0,
            y_position: 0.0,
            x_range: None,
            y_range: None,
            visible: false,
            opacity: 1.0,
            fade: None,
            position_revision: 0,
        }
    }

    #[must_use]
    pub fn frame(&self) -> PlotFrame {
        self.frame
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.frame.size
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.frame.size.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.frame.size.height
    }

    #[must_use]
    pub fn behavior(&self) -> CursorBehavior {
        self.behavior
    }

    /// Latest pointer position, rounded to one decimal.
    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Where the active gesture started; `None` when no gesture is active.
    #[must_use]
    pub fn down_point(&self) -> Option<Point> {
        self.down_point
    }

    #[must_use]
    pub fn up_point(&self) -> Option<Point> {
        self.up_point
    }

    #[must_use]
    pub fn stick(&self) -> StickMode {
        self.stick
    }

    #[must_use]
    pub fn stick_point(&self) -> Option<Point> {
        self.stick_point
    }

    #[must_use]
    pub fn x_position(&self) -> f64 {
        self.x_position
    }

    #[must_use]
    pub fn y_position(&self) -> f64 {
        self.y_position
    }

    #[must_use]
    pub fn x_range(&self) -> Option<Range> {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> Option<Range> {
        self.y_range
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A fade-out is running; the cursor stays visible until it ends.
    #[must_use]
    pub fn is_hiding(&self) -> bool {
        self.fade.is_some()
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Bumped whenever the pointer position changes.
    #[must_use]
    pub fn position_revision(&self) -> u64 {
        self.position_revision
    }

    /// Stick overrides refuse to hide the cursor.
    pub(crate) fn hide_locked(&self) -> bool {
        self.stick.sticks() && self.stick_point.is_some()
    }

    pub(crate) fn show_now(&mut self) {
        self.fade = None;
        self.visible = true;
        self.opacity = 1.0;
    }

    /// Starts hiding; returns `false` when a stick override keeps the cursor.
    pub(crate) fn begin_hide(&mut self, duration_ms: f64) -> bool {
        if self.hide_locked() {
            return false;
        }
        if !self.visible {
            return true;
        }
        if duration_ms.is_finite() && duration_ms > 0.0 {
            if self.fade.is_none() {
                self.fade = Some(Transition::new(
                    AnimatedProperty::Opacity,
                    self.opacity,
                    0.0,
                    duration_ms,
                    Easing::CubicOut,
                ));
            }
        } else {
            self.finish_hide();
        }
        true
    }

    /// Advances a running fade; returns whether it is still running.
    pub(crate) fn step_fade(&mut self, delta_ms: f64) -> bool {
        let Some(fade) = self.fade.as_mut() else {
            return false;
        };
        self.opacity = fade.step(delta_ms);
        if fade.is_finished() {
            self.finish_hide();
            return false;
        }
        true
    }

    fn finish_hide(&mut self) {
        self.fade = None;
        self.visible = false;
        self.opacity = 1.0;
    }
}
