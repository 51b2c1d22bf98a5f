use bar_chart_rs::api::{BarChart, BarChartConfig};
use bar_chart_rs::core::{
    Dataset, GridOrientation, Series, ValueRange, ValueScale, Viewport, compute_ticks,
};
use bar_chart_rs::render::{Color, NullRenderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_dataset(series_count: usize, category_count: usize) -> Dataset {
    let series = (0..series_count)
        .map(|s| {
            let values = (0..category_count)
                .map(|c| ((c * 37 + s * 11) % 500) as f64 + 0.5)
                .collect();
            Series::new(format!("series-{s}"), values, Color::BLUE)
        })
        .collect();
    let categories = (0..category_count).map(|c| format!("cat-{c}")).collect();
    Dataset::new(series, categories)
}

fn bench_compute_ticks(c: &mut Criterion) {
    let scale = ValueScale::bar(ValueRange::new(12_345.0, 0.0), 900.0);

    c.bench_function("compute_ticks_with_goal", |b| {
        b.iter(|| {
            let _ = compute_ticks(black_box(scale), black_box(8), black_box(Some(6_000.0)));
        })
    });
}

fn bench_layout_4x250(c: &mut Criterion) {
    let config = BarChartConfig::default()
        .with_animation(false)
        .with_grid(true, GridOrientation::Both)
        .with_bar_values(true)
        .with_goal(250.0, true);
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    let dataset = generated_dataset(4, 250);
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("layout_4x250", |b| {
        b.iter(|| {
            let _ = chart
                .layout_with_progress(black_box(&dataset), black_box(viewport), black_box(0.75))
                .expect("layout should succeed");
        })
    });
}

fn bench_render_frame_4x250(c: &mut Criterion) {
    let config = BarChartConfig::default().with_animation(false);
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    let dataset = generated_dataset(4, 250);
    let layout = chart
        .layout_with_progress(&dataset, Viewport::new(1920, 1080), 1.0)
        .expect("layout should succeed");

    c.bench_function("render_frame_4x250", |b| {
        b.iter(|| {
            let frame = chart.build_render_frame(black_box(&layout));
            black_box(frame.primitive_count());
        })
    });
}

criterion_group!(
    benches,
    bench_compute_ticks,
    bench_layout_4x250,
    bench_render_frame_4x250
);
criterion_main!(benches);
