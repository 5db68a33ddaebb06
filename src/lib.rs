//! chart-cursor: pointer-driven chart cursors and the path primitives they draw with.
//!
//! A [`Cursor`](interaction::Cursor) tracks the pointer over a plot area,
//! turns drags into zoom, select and pan gestures, and reports normalized
//! ranges to [listeners](extensions::CursorListener). Cartesian and radar
//! plots share the same state machine through the
//! [`CursorGeometry`](interaction::CursorGeometry) trait.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CursorConfig, RadarCursorConfig};
pub use error::{ChartError, ChartResult};
pub use interaction::{CursorBehavior, RadarCursor, StickMode, XyCursor};
