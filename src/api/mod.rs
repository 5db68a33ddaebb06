//! Host-facing configuration.

mod cursor_config;
mod validation;

pub use cursor_config::{CursorConfig, RadarCursorConfig};
