//! Observer hooks attached to cursors.

pub mod listeners;

pub use listeners::{CursorContext, CursorEvent, CursorListener};
