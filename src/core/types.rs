use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Red used for bars below the goal when a series does not override it.
pub const DEFAULT_BELOW_GOAL_COLOR: Color = Color::rgb(179.0 / 255.0, 38.0 / 255.0, 30.0 / 255.0);
/// Green used for bars meeting the goal when a series does not override it.
pub const DEFAULT_ABOVE_GOAL_COLOR: Color = Color::rgb(0.0, 112.0 / 255.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One named sequence of bar values sharing a color across all categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Color,
    #[serde(default)]
    pub above_goal_color: Option<Color>,
    #[serde(default)]
    pub below_goal_color: Option<Color>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>, color: Color) -> Self {
        Self {
            name: name.into(),
            values,
            color,
            above_goal_color: None,
            below_goal_color: None,
        }
    }

    #[must_use]
    pub fn with_goal_colors(mut self, above_goal: Color, below_goal: Color) -> Self {
        self.above_goal_color = Some(above_goal);
        self.below_goal_color = Some(below_goal);
        self
    }

    #[must_use]
    pub fn resolved_above_goal_color(&self) -> Color {
        self.above_goal_color.unwrap_or(DEFAULT_ABOVE_GOAL_COLOR)
    }

    #[must_use]
    pub fn resolved_below_goal_color(&self) -> Color {
        self.below_goal_color.unwrap_or(DEFAULT_BELOW_GOAL_COLOR)
    }
}

/// Caller-owned chart input: one bar per series in every category.
///
/// The chart only ever borrows a dataset; it keeps a private copy solely to
/// detect when the caller hands over a different one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub series: Vec<Series>,
    pub categories: Vec<String>,
}

impl Dataset {
    #[must_use]
    pub fn new(series: Vec<Series>, categories: Vec<String>) -> Self {
        Self { series, categories }
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|series| series.values.is_empty())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().copied())
    }

    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values().map(OrderedFloat).max().map(|value| value.0)
    }

    #[must_use]
    pub fn min_value(&self) -> Option<f64> {
        self.values().map(OrderedFloat).min().map(|value| value.0)
    }
}

/// Vertical data bounds the scale maps into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub upper: f64,
    pub lower: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(upper: f64, lower: f64) -> Self {
        Self { upper, lower }
    }

    /// `upper` is the largest of the explicit top override, the data maximum
    /// and zero; `lower` is the data minimum, zero for an empty dataset.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, top_override: Option<f64>) -> Self {
        let data_max = dataset.max_value().unwrap_or(0.0);
        let upper = top_override.unwrap_or(0.0).max(data_max).max(0.0);
        let lower = dataset.min_value().unwrap_or(0.0);
        Self { upper, lower }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.upper <= 0.0
    }
}

/// Pixel rectangle the bars are drawn into, in viewport coordinates.
///
/// `height` is the chart height every scale computation uses; the baseline
/// sits at `top + height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, Series, ValueRange};
    use crate::render::Color;

    fn dataset(values: &[&[f64]]) -> Dataset {
        let categories = (0..values.first().map_or(0, |v| v.len()))
            .map(|i| format!("c{i}"))
            .collect();
        let series = values
            .iter()
            .enumerate()
            .map(|(i, v)| Series::new(format!("s{i}"), v.to_vec(), Color::BLUE))
            .collect();
        Dataset::new(series, categories)
    }

    #[test]
    fn range_takes_data_max_over_smaller_override() {
        let range = ValueRange::from_dataset(&dataset(&[&[10.0, 20.0], &[5.0, 30.0]]), Some(25.0));
        assert_eq!(range.upper, 30.0);
        assert_eq!(range.lower, 5.0);
    }

    #[test]
    fn range_takes_override_above_data_max() {
        let range = ValueRange::from_dataset(&dataset(&[&[10.0, 20.0]]), Some(100.0));
        assert_eq!(range.upper, 100.0);
    }

    #[test]
    fn empty_dataset_range_is_zero() {
        let range = ValueRange::from_dataset(&Dataset::default(), None);
        assert_eq!(range, ValueRange::new(0.0, 0.0));
        assert!(range.is_degenerate());
    }

    #[test]
    fn all_zero_dataset_is_degenerate() {
        let range = ValueRange::from_dataset(&dataset(&[&[0.0, 0.0]]), None);
        assert!(range.is_degenerate());
    }
}
