use serde::{Deserialize, Serialize};

use crate::core::{Point, Range};
use crate::interaction::CursorBehavior;

/// Read-only cursor snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorContext {
    pub point: Point,
    pub down_point: Option<Point>,
    pub x_position: f64,
    pub y_position: f64,
    pub x_range: Option<Range>,
    pub y_range: Option<Range>,
    pub behavior: CursorBehavior,
    pub visible: bool,
}

/// Event stream exposed to cursor listeners.
///
/// Ranges are normalized `0..1` intervals; panning ranges carry a signed
/// shift and may leave that interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CursorEvent {
    CursorPositionChanged { x_position: f64, y_position: f64 },
    ZoomStarted,
    ZoomEnded { x_range: Range, y_range: Range },
    SelectStarted,
    SelectEnded { x_range: Range, y_range: Range },
    PanStarted,
    Panning { x_range: Range, y_range: Range },
    PanEnded { x_range: Range, y_range: Range },
    /// Gesture released within the hit tolerance of its down point.
    BehaviorCanceled,
}

impl CursorEvent {
    /// Final ranges carried by a gesture-end event.
    #[must_use]
    pub fn ranges(&self) -> Option<(Range, Range)> {
        match *self {
            Self::ZoomEnded { x_range, y_range }
            | Self::SelectEnded { x_range, y_range }
            | Self::Panning { x_range, y_range }
            | Self::PanEnded { x_range, y_range } => Some((x_range, y_range)),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CursorPositionChanged { .. } => "cursorpositionchanged",
            Self::ZoomStarted => "zoomstarted",
            Self::ZoomEnded { .. } => "zoomended",
            Self::SelectStarted => "selectstarted",
            Self::SelectEnded { .. } => "selectended",
            Self::PanStarted => "panstarted",
            Self::Panning { .. } => "panning",
            Self::PanEnded { .. } => "panended",
            Self::BehaviorCanceled => "behaviorcanceled",
        }
    }
}

/// Observer of cursor events.
///
/// Listeners read cursor context but cannot mutate the cursor from inside a
/// hook; they run synchronously in registration order.
pub trait CursorListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: CursorEvent, context: CursorContext);
}
