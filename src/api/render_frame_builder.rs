use tracing::trace;

use crate::core::{GRID_DASH_PATTERN_PX, GridColorRole, TextMeasurer};
use crate::render::{
    LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextPrimitive,
};

use super::{BarChart, LabelPlacement, LayoutResult};

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    /// Materializes a layout into backend-agnostic draw commands.
    ///
    /// Bars are translated from plot-local to viewport coordinates here.
    #[must_use]
    pub fn build_render_frame(&self, layout: &LayoutResult) -> RenderFrame {
        let mut frame = RenderFrame::new(layout.viewport);
        let (on_px, off_px) = GRID_DASH_PATTERN_PX;

        for line in &layout.grid_lines {
            let color = match line.color_role {
                GridColorRole::Grid => self.config.grid_color,
                GridColorRole::Goal => self.config.goal_color,
            };
            let stroke_style = if line.dashed {
                LineStrokeStyle::Dashed { on_px, off_px }
            } else {
                LineStrokeStyle::Solid
            };
            frame.push_line(
                LinePrimitive::new(
                    line.x0,
                    line.y0,
                    line.x1,
                    line.y1,
                    self.config.grid_line_width,
                    color,
                )
                .with_stroke_style(stroke_style),
            );
        }

        for bar in &layout.bars {
            frame.push_rect(
                RectPrimitive::new(
                    layout.plot.left + bar.x0,
                    layout.plot.top + bar.y_top,
                    bar.width(),
                    bar.height(),
                    bar.color,
                )
                .with_corner_radius(bar.corner_radius),
            );
        }

        for label in layout.axis_labels.iter().chain(&layout.value_labels) {
            frame.push_text(text_primitive(label));
        }

        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "build render frame"
        );
        frame
    }
}

fn text_primitive(label: &LabelPlacement) -> TextPrimitive {
    TextPrimitive::new(
        label.text.clone(),
        label.x,
        label.y,
        label.style.font_size_px,
        label.style.color,
        label.h_align,
    )
    .with_bold(label.style.bold)
}
