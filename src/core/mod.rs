pub mod math;
pub mod types;

pub use types::{PlotFrame, Point, Range, RelativeValue, Size};
