use crate::error::RingsResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that only validates and records frames.
///
/// Used for headless dashboards and tests; `last_frame` keeps the most recent
/// scene so callers can inspect what a real backend would have painted.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RingsResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
