//! Pointer-driven cursor interaction.
//!
//! [`Cursor`] is the shared state machine; [`XyCursor`] and [`RadarCursor`]
//! plug Cartesian and polar geometry into it.

pub mod axis;
pub mod cursor;
pub mod geometry;
pub mod input;
mod listener_registry;
pub mod radar_cursor;
pub mod state;
pub mod xy_cursor;

use serde::{Deserialize, Serialize};

pub use axis::{
    AxisBindings, AxisDimension, AxisId, AxisRef, AxisTooltipEvent, ItemSpan, SeriesId,
    SeriesRef, SeriesTooltipEvent,
};
pub use cursor::Cursor;
pub use geometry::{CursorElements, CursorGeometry};
pub use input::{
    InputEffects, InputSource, MouseCursorStyle, PointerDispatcher, PointerEvent,
    PointerEventKind, PointerHandler, Subscription, SurfaceId,
};
pub use radar_cursor::{Polar, RadarCursor};
pub use state::CursorState;
pub use xy_cursor::{Cartesian, XyCursor};

/// Drag semantics of a cursor, optionally restricted to one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CursorBehavior {
    None,
    #[default]
    ZoomX,
    ZoomY,
    ZoomXY,
    SelectX,
    SelectY,
    SelectXY,
    PanX,
    PanY,
    PanXY,
}

/// Behavior family with the dimension restriction stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneralBehavior {
    Zoom,
    Select,
    Pan,
}

impl CursorBehavior {
    #[must_use]
    pub fn general(self) -> Option<GeneralBehavior> {
        match self {
            Self::None => None,
            Self::ZoomX | Self::ZoomY | Self::ZoomXY => Some(GeneralBehavior::Zoom),
            Self::SelectX | Self::SelectY | Self::SelectXY => Some(GeneralBehavior::Select),
            Self::PanX | Self::PanY | Self::PanXY => Some(GeneralBehavior::Pan),
        }
    }

    /// Zoom and select draw a selection overlay; pan does not.
    #[must_use]
    pub fn uses_selection(self) -> bool {
        matches!(
            self.general(),
            Some(GeneralBehavior::Zoom | GeneralBehavior::Select)
        )
    }

    #[must_use]
    pub fn is_x_only(self) -> bool {
        matches!(self, Self::ZoomX | Self::SelectX | Self::PanX)
    }

    #[must_use]
    pub fn is_y_only(self) -> bool {
        matches!(self, Self::ZoomY | Self::SelectY | Self::PanY)
    }

    /// Whether the gesture produces a range along X.
    #[must_use]
    pub fn affects_x(self) -> bool {
        self.general().is_some() && !self.is_y_only()
    }

    /// Whether the gesture produces a range along Y.
    #[must_use]
    pub fn affects_y(self) -> bool {
        self.general().is_some() && !self.is_x_only()
    }
}

/// Whether the cursor freezes at its last stuck point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickMode {
    /// Follow the pointer; hide when it leaves.
    #[default]
    None,
    /// Stay at the stuck point only while the pointer is out of bounds.
    Soft,
    /// Stay at the stuck point regardless of the pointer.
    Hard,
}

impl StickMode {
    #[must_use]
    pub fn sticks(self) -> bool {
        matches!(self, Self::Soft | Self::Hard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behavior_families_and_overlay_usage() {
        assert_eq!(CursorBehavior::None.general(), None);
        assert_eq!(CursorBehavior::SelectXY.general(), Some(GeneralBehavior::Select));
        assert!(CursorBehavior::ZoomY.uses_selection());
        assert!(!CursorBehavior::PanXY.uses_selection());
        assert!(!CursorBehavior::None.uses_selection());
    }

    #[test]
    fn dimension_restrictions() {
        assert!(CursorBehavior::ZoomX.affects_x());
        assert!(!CursorBehavior::ZoomX.affects_y());
        assert!(CursorBehavior::PanXY.affects_x() && CursorBehavior::PanXY.affects_y());
        assert!(!CursorBehavior::None.affects_x());
    }

    #[test]
    fn behavior_serializes_in_camel_case() {
        let json = serde_json::to_string(&CursorBehavior::ZoomXY).expect("serialize");
        assert_eq!(json, "\"zoomXY\"");
        let parsed: CursorBehavior = serde_json::from_str("\"selectY\"").expect("parse");
        assert_eq!(parsed, CursorBehavior::SelectY);
    }
}
