use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer: validates every frame and keeps the last one.
///
/// Useful for tests and for hosts that only want geometry snapshots.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames_rendered: usize,
    last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_line_count(&self) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.lines.len())
    }

    #[must_use]
    pub fn last_rect_count(&self) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.rects.len())
    }

    #[must_use]
    pub fn last_text_count(&self) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.texts.len())
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
