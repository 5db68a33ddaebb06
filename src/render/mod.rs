pub mod animation;
mod frame;
mod null_renderer;
pub mod path;
pub mod path_sampler;
mod primitives;
pub mod smoothing;
mod svg_renderer;
pub mod waved_line;

pub use animation::{AnimatedProperty, Easing, Transition};
pub use frame::{CursorFrame, ElementRole};
pub use null_renderer::NullRenderer;
pub use path_sampler::path_to_points;
pub use primitives::{Color, PathElement, PathStyle};
pub(crate) use primitives::is_valid_dasharray;
pub use smoothing::{Basis, Smoothing, Tension};
pub use svg_renderer::SvgRenderer;
pub use waved_line::{WaveSpec, WavedLineCache, WavedLineCacheStats, waved_line};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `CursorFrame` so drawing code stays
/// isolated from interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &CursorFrame) -> ChartResult<()>;
}
