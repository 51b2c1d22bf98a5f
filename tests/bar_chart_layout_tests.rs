use std::time::Instant;

use approx::assert_relative_eq;
use bar_chart_rs::api::{BarChart, BarChartConfig, LabelRole};
use bar_chart_rs::core::{
    AnimationPhase, DEFAULT_ABOVE_GOAL_COLOR, DEFAULT_BELOW_GOAL_COLOR, Dataset, GridColorRole,
    GridOrientation, Series, Viewport,
};
use bar_chart_rs::render::{Color, NullRenderer};

fn dataset(values: Vec<Vec<f64>>) -> Dataset {
    let category_count = values.first().map_or(0, Vec::len);
    let series = values
        .into_iter()
        .enumerate()
        .map(|(index, values)| Series::new(format!("s{index}"), values, Color::BLUE))
        .collect();
    let categories = (0..category_count).map(|i| format!("C{i}")).collect();
    Dataset::new(series, categories)
}

fn static_chart(config: BarChartConfig) -> BarChart<NullRenderer> {
    BarChart::new(NullRenderer::default(), config.with_animation(false)).expect("chart init")
}

#[test]
fn three_bars_get_ticks_and_proportional_heights() {
    let mut chart = static_chart(BarChartConfig::default().with_tick_count(3));
    let data = dataset(vec![vec![10.0, 20.0, 30.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(800, 500), Instant::now())
        .expect("layout");

    let ticks: Vec<f64> = layout.ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0]);
    assert!(layout.ticks[0].is_baseline);
    assert!(layout.ticks[3].is_top);

    assert_eq!(layout.plot.height, 440.0);
    assert_eq!(layout.bars.len(), 3);
    assert_relative_eq!(layout.bars[2].height(), 440.0, epsilon = 1e-9);
    assert_relative_eq!(
        layout.bars[1].height() / layout.bars[0].height(),
        2.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        layout.bars[2].height() / layout.bars[0].height(),
        3.0,
        epsilon = 1e-9
    );
    assert_eq!(layout.progress, 1.0);
    assert_eq!(layout.phase, Some(AnimationPhase::Done));
}

#[test]
fn goal_adds_tick_and_adaptive_colors() {
    let mut chart = static_chart(
        BarChartConfig::default()
            .with_tick_count(3)
            .with_goal(15.0, true),
    );
    let data = dataset(vec![vec![10.0, 20.0, 30.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(800, 500), Instant::now())
        .expect("layout");

    let ticks: Vec<f64> = layout.ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(ticks, vec![0.0, 10.0, 15.0, 20.0, 30.0]);
    assert!(layout.ticks[2].is_goal);

    assert_eq!(layout.bars[0].color, DEFAULT_BELOW_GOAL_COLOR);
    assert_eq!(layout.bars[1].color, DEFAULT_ABOVE_GOAL_COLOR);
    assert_eq!(layout.bars[2].color, DEFAULT_ABOVE_GOAL_COLOR);

    let goal_labels: Vec<_> = layout.labels(LabelRole::Goal).collect();
    assert_eq!(goal_labels.len(), 1);
    assert_eq!(goal_labels[0].text, "15");
    assert_eq!(goal_labels[0].style.color, chart.config().goal_color);

    let goal_lines = layout
        .grid_lines
        .iter()
        .filter(|line| line.color_role == GridColorRole::Goal)
        .count();
    assert_eq!(goal_lines, 1);
}

#[test]
fn regular_tick_inside_goal_band_is_suppressed() {
    let mut chart = static_chart(
        BarChartConfig::default()
            .with_tick_count(3)
            .with_goal(11.0, false),
    );
    let data = dataset(vec![vec![10.0, 20.0, 30.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(800, 500), Instant::now())
        .expect("layout");

    let ticks: Vec<f64> = layout.ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(ticks, vec![0.0, 11.0, 20.0, 30.0]);
    assert!(layout.bars.iter().all(|bar| bar.color == Color::BLUE));
}

#[test]
fn top_value_raises_the_range() {
    let mut chart = static_chart(BarChartConfig::default().with_top_value(60.0));
    let data = dataset(vec![vec![30.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(800, 500), Instant::now())
        .expect("layout");

    assert_eq!(layout.range.upper, 60.0);
    assert_relative_eq!(
        layout.bars[0].height(),
        layout.plot.height * 0.5,
        epsilon = 1e-9
    );
}

#[test]
fn bars_are_laid_out_category_major() {
    let mut chart = static_chart(BarChartConfig::default());
    let data = dataset(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(800, 500), Instant::now())
        .expect("layout");

    let cells: Vec<(usize, usize)> = layout
        .bars
        .iter()
        .map(|bar| (bar.category_index, bar.series_index))
        .collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    // 2 * (30 + 10) + 7
    assert_eq!(layout.region_width, 87.0);
    assert_eq!(layout.bars[1].x0, 40.0);
    assert_eq!(layout.bars[2].x0, 87.0);
    assert_eq!(layout.content_width, 167.0);
}

#[test]
fn empty_dataset_yields_single_baseline_tick() {
    let mut chart = static_chart(BarChartConfig::default());

    let layout = chart
        .current_layout(&Dataset::default(), Viewport::new(400, 300), Instant::now())
        .expect("layout");

    assert!(layout.bars.is_empty());
    assert_eq!(layout.ticks.len(), 1);
    assert!(layout.ticks[0].is_top && layout.ticks[0].is_baseline);
    assert_eq!(layout.ticks[0].pixel_y, layout.plot.height);
    assert_eq!(layout.content_width, 0.0);
}

#[test]
fn all_zero_values_collapse_onto_baseline() {
    let mut chart = static_chart(BarChartConfig::default().with_bar_values(true));
    let data = dataset(vec![vec![0.0, 0.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(400, 300), Instant::now())
        .expect("layout");

    assert!(layout.bars.iter().all(|bar| bar.height() == 0.0));
    assert!(layout.value_labels.is_empty());
}

#[test]
fn category_labels_are_centered_under_groups() {
    let mut chart = static_chart(BarChartConfig::default());
    let data = dataset(vec![vec![5.0, 8.0, 3.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(800, 500), Instant::now())
        .expect("layout");

    let labels: Vec<_> = layout.labels(LabelRole::XAxis).collect();
    assert_eq!(labels.len(), 3);
    let group_width = layout.region_width - chart.config().space_between_groups;
    for (index, label) in labels.iter().enumerate() {
        assert_eq!(label.text, format!("C{index}"));
        assert_relative_eq!(
            label.x,
            layout.plot.left + index as f64 * layout.region_width + group_width / 2.0,
            epsilon = 1e-9
        );
        assert!(label.y > layout.plot.baseline_y());
    }
}

#[test]
fn hidden_axes_drop_labels_and_margins() {
    let mut chart = static_chart(BarChartConfig::default().with_axes(false, false));
    let data = dataset(vec![vec![5.0, 8.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(800, 500), Instant::now())
        .expect("layout");

    assert!(layout.axis_labels.is_empty());
    assert_eq!(layout.plot.left, 0.0);
    assert_eq!(layout.plot.height, 490.0);
}

#[test]
fn both_orientations_add_category_boundaries() {
    let mut chart = static_chart(
        BarChartConfig::default()
            .with_tick_count(3)
            .with_grid(true, GridOrientation::Both),
    );
    let data = dataset(vec![vec![10.0, 20.0, 30.0]]);

    let layout = chart
        .current_layout(&data, Viewport::new(800, 500), Instant::now())
        .expect("layout");

    let vertical: Vec<_> = layout
        .grid_lines
        .iter()
        .filter(|line| line.x0 == line.x1 && line.y0 != line.y1)
        .collect();
    assert_eq!(vertical.len(), 4);
    assert_eq!(layout.grid_lines.len(), 8);
    assert_eq!(vertical[0].y0, layout.plot.top);
    assert_eq!(vertical[0].y1, layout.plot.baseline_y());
}

#[test]
fn layout_serializes_to_json() {
    let chart = static_chart(BarChartConfig::default());
    let data = dataset(vec![vec![1.0, 2.0]]);

    let layout = chart
        .layout_with_progress(&data, Viewport::new(320, 200), 0.5)
        .expect("layout");
    let json = layout.to_json_pretty().expect("json");

    assert!(json.contains("\"ticks\""));
    assert!(json.contains("\"bars\""));
}
