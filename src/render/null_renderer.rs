use crate::error::ChartResult;
use crate::render::{CursorFrame, Renderer};

/// No-op renderer used by tests and headless cursor usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// it reaches a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_element_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &CursorFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_element_count = frame.elements.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
