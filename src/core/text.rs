use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Font parameters a label is measured and drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub color: Color,
    #[serde(default)]
    pub bold: bool,
}

impl TextStyle {
    #[must_use]
    pub const fn new(font_size_px: f64, color: Color) -> Self {
        Self {
            font_size_px,
            color,
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Text measurement capability injected by the host UI.
///
/// Layout only needs widths: the left margin is reserved from the top value
/// label and in-bar value labels are centered on their bar.
pub trait TextMeasurer {
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextStyle) -> f64,
{
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f64 {
        self(text, style)
    }
}

/// Deterministic, backend-independent width estimate from per-glyph advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        let weight = if style.bold { 1.06 } else { 1.0 };
        (units * style.font_size_px * weight).max(style.font_size_px)
    }
}

#[cfg(test)]
mod tests {
    use super::{EstimatedTextMeasurer, TextMeasurer, TextStyle};
    use crate::render::Color;

    #[test]
    fn estimate_grows_with_text_length() {
        let style = TextStyle::new(12.0, Color::GRAY);
        let short = EstimatedTextMeasurer.measure_text_width("9", &style);
        let long = EstimatedTextMeasurer.measure_text_width("9999", &style);
        assert!(long > short);
    }

    #[test]
    fn empty_text_has_no_width() {
        let style = TextStyle::new(12.0, Color::GRAY);
        assert_eq!(EstimatedTextMeasurer.measure_text_width("", &style), 0.0);
    }

    #[test]
    fn closures_can_act_as_measurers() {
        let fixed = |text: &str, _: &TextStyle| text.len() as f64 * 7.0;
        let style = TextStyle::new(12.0, Color::GRAY);
        assert_eq!(fixed.measure_text_width("1.5K", &style), 28.0);
    }
}
