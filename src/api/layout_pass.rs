use tracing::trace;

use crate::core::{
    BarRect, Dataset, PlotArea, TextMeasurer, Tick, ValueRange, ValueScale, Viewport,
    compute_grid_lines, compute_ticks, format_compact, formatted_label_width, layout_bars,
};
use crate::render::{Renderer, TextHAlign};

use super::{BarChart, BarChartConfig, LabelPlacement, LabelRole, LayoutResult};

/// Gap between the baseline and the top of the category labels.
const X_AXIS_LABEL_GAP_PX: f64 = 4.0;
/// Left margin as a multiple of the widest y-axis label.
const Y_AXIS_MARGIN_FACTOR: f64 = 1.5;

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    /// Runs one layout pass: range, plot area, ticks, grid, bars, labels.
    ///
    /// Ticks feed both the grid and the bars' scale, so the order is fixed.
    pub(super) fn compute_layout(
        &self,
        dataset: &Dataset,
        viewport: Viewport,
        progress: f64,
    ) -> LayoutResult {
        let config = &self.config;
        let range = ValueRange::from_dataset(dataset, config.top_value);
        let plot = resolve_plot_area(config, viewport, range, &self.measurer);
        let scale = ValueScale::bar(range, plot.height);

        let ticks = compute_ticks(scale, config.tick_count, config.goal);

        let spacing = config.spacing();
        let region_width = spacing.region_width(dataset.series_count());
        let content_width = spacing.content_width(dataset.series_count(), dataset.category_count());
        let grid_lines = compute_grid_lines(
            &ticks,
            dataset.category_count(),
            region_width,
            config.grid_mode(),
            plot,
            config.show_grid_with_spacer,
        );

        let bars = layout_bars(dataset, scale, progress, config.bar_style());

        let mut axis_labels = Vec::new();
        if config.show_y_axis {
            axis_labels.extend(y_axis_labels(config, &ticks, plot));
        }
        if config.show_x_axis {
            axis_labels.extend(x_axis_labels(config, dataset, plot, region_width));
        }
        let value_labels = if config.show_bar_value {
            bar_value_labels(config, &bars, plot, &self.measurer)
        } else {
            Vec::new()
        };

        let state = self.animation.state();
        trace!(
            ticks = ticks.len(),
            grid_lines = grid_lines.len(),
            bars = bars.len(),
            progress,
            "layout pass"
        );

        LayoutResult {
            viewport,
            plot,
            range,
            region_width,
            content_width,
            ticks,
            grid_lines,
            bars,
            axis_labels,
            value_labels,
            progress: progress.clamp(0.0, 1.0),
            phase: state.map(|state| state.phase),
            token: state.map(|state| state.token),
        }
    }
}

/// Reserves the left margin from the top value label, the top inset for that
/// label and a bottom band for category labels.
pub(super) fn resolve_plot_area(
    config: &BarChartConfig,
    viewport: Viewport,
    range: ValueRange,
    measurer: &dyn TextMeasurer,
) -> PlotArea {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    let left = if config.show_y_axis {
        let widest = formatted_label_width(range.upper, &config.axis_label_style, measurer);
        let goal_width = config.goal.map_or(0.0, |goal| {
            formatted_label_width(goal, &config.axis_label_style, measurer)
        });
        widest.max(goal_width) * Y_AXIS_MARGIN_FACTOR
    } else {
        0.0
    };
    let bottom_band = if config.show_x_axis {
        height * config.x_axis_band_ratio
    } else {
        0.0
    };
    let top = config.top_inset_px.min(height);

    PlotArea::new(
        left.min(width),
        top,
        (width - left).max(0.0),
        (height - top - bottom_band).max(0.0),
    )
}

fn y_axis_labels<'a>(
    config: &'a BarChartConfig,
    ticks: &'a [Tick],
    plot: PlotArea,
) -> impl Iterator<Item = LabelPlacement> + 'a {
    let half_font = config.axis_label_style.font_size_px * 0.5;
    ticks.iter().map(move |tick| {
        let (role, style) = if tick.is_goal {
            let mut style = config.axis_label_style;
            style.color = config.goal_color;
            (LabelRole::Goal, style)
        } else {
            (LabelRole::YAxis, config.axis_label_style)
        };
        LabelPlacement {
            role,
            text: format_compact(tick.value),
            x: 0.0,
            y: plot.top + tick.pixel_y - half_font,
            h_align: TextHAlign::Left,
            style,
        }
    })
}

fn x_axis_labels<'a>(
    config: &'a BarChartConfig,
    dataset: &'a Dataset,
    plot: PlotArea,
    region_width: f64,
) -> impl Iterator<Item = LabelPlacement> + 'a {
    let group_width = region_width - config.space_between_groups;
    dataset
        .categories
        .iter()
        .enumerate()
        .filter(|(_, category)| !category.is_empty())
        .map(move |(index, category)| LabelPlacement {
            role: LabelRole::XAxis,
            text: category.clone(),
            x: plot.left + index as f64 * region_width + group_width * 0.5,
            y: plot.baseline_y() + X_AXIS_LABEL_GAP_PX,
            h_align: TextHAlign::Center,
            style: config.axis_label_style,
        })
}

/// Centers each non-zero value on its bar, at the bar top.
fn bar_value_labels(
    config: &BarChartConfig,
    bars: &[BarRect],
    plot: PlotArea,
    measurer: &dyn TextMeasurer,
) -> Vec<LabelPlacement> {
    let style = config.bar_value_label_style;
    bars.iter()
        .filter(|bar| bar.value != 0.0)
        .map(|bar| {
            let text = format_compact(bar.value);
            let text_width = measurer.measure_text_width(&text, &style);
            LabelPlacement {
                role: LabelRole::BarValue,
                x: plot.left + bar.x0 + (config.bar_width - text_width) * 0.5,
                y: plot.top + bar.y_top,
                text,
                h_align: TextHAlign::Left,
                style,
            }
        })
        .collect()
}
