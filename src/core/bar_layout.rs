use serde::{Deserialize, Serialize};

use crate::core::{Dataset, ValueScale, color_for};
use crate::render::Color;

/// Horizontal sizing of bars and bar groups, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpacing {
    pub bar_width: f64,
    pub space_between_bars: f64,
    pub space_between_groups: f64,
}

impl BarSpacing {
    #[must_use]
    pub const fn new(bar_width: f64, space_between_bars: f64, space_between_groups: f64) -> Self {
        Self {
            bar_width,
            space_between_bars,
            space_between_groups,
        }
    }

    /// Width one category occupies, trailing group gap included.
    #[must_use]
    pub fn region_width(self, series_count: usize) -> f64 {
        series_count as f64 * (self.bar_width + self.space_between_bars) + self.space_between_groups
    }

    /// Total width of all groups without the trailing group gap.
    #[must_use]
    pub fn content_width(self, series_count: usize, category_count: usize) -> f64 {
        (self.region_width(series_count) * category_count as f64 - self.space_between_groups)
            .max(0.0)
    }

    /// Left edge of the bar of series `series_index` in category `category_index`.
    #[must_use]
    pub fn bar_x(self, series_count: usize, category_index: usize, series_index: usize) -> f64 {
        category_index as f64 * self.region_width(series_count)
            + series_index as f64 * (self.bar_width + self.space_between_bars)
    }
}

/// One bar in plot-local coordinates: x from the first group's left edge, y
/// from the chart top, `y_baseline == chart height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub series_index: usize,
    pub category_index: usize,
    pub value: f64,
    pub x0: f64,
    pub x1: f64,
    pub y_top: f64,
    pub y_baseline: f64,
    pub color: Color,
    pub corner_radius: f64,
}

impl BarRect {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_baseline - self.y_top
    }
}

/// Everything bar placement needs besides the dataset and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub spacing: BarSpacing,
    pub corner_radius: f64,
    pub goal: Option<f64>,
    pub adaptive_color: bool,
}

/// Computes one rectangle per series × category cell, category-major.
///
/// Heights scale with `value / upper` and with the animation `progress`
/// (clamped to `[0, 1]`). Horizontal edges are clamped into the content
/// width, never hidden.
#[must_use]
pub fn layout_bars(
    dataset: &Dataset,
    scale: ValueScale,
    progress: f64,
    style: BarStyle,
) -> Vec<BarRect> {
    let series_count = dataset.series_count();
    let category_count = dataset.category_count();
    let max_plot_width = style.spacing.content_width(series_count, category_count);
    let chart_height_px = scale.chart_height_px();
    let upper = scale.range().upper;
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut bars = Vec::with_capacity(series_count * category_count);
    for category_index in 0..category_count {
        for (series_index, series) in dataset.series.iter().enumerate() {
            let Some(value) = series.values.get(category_index).copied() else {
                continue;
            };

            let ratio = if upper > 0.0 { value / upper } else { 0.0 };
            let height_px = chart_height_px * ratio * progress;
            let x0 = style
                .spacing
                .bar_x(series_count, category_index, series_index)
                .clamp(0.0, max_plot_width);
            let x1 = (x0 + style.spacing.bar_width).min(max_plot_width);

            bars.push(BarRect {
                series_index,
                category_index,
                value,
                x0,
                x1,
                y_top: chart_height_px - height_px,
                y_baseline: chart_height_px,
                color: color_for(series, value, style.goal, style.adaptive_color),
                corner_radius: style.corner_radius,
            });
        }
    }

    bars
}
