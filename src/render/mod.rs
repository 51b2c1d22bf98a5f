mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Draw-command sink implemented by a host adapter per target platform.
///
/// The chart never talks to a drawing backend directly: it materializes a
/// `RenderFrame` and hands it over, so geometry stays testable headless.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        (**self).render(frame)
    }
}
