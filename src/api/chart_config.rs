use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{
    AnimationTimings, BarSpacing, BarStyle, Easing, GridOrientation, TextStyle,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::LegendPosition;

/// Immutable configuration of one bar chart.
///
/// Serializable so hosts can keep chart setup in config files; every field
/// has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub show_grid: bool,
    pub grid_orientation: GridOrientation,
    pub grid_color: Color,
    pub grid_line_width: f64,
    /// Dashes the guide lines; solid guides when `false`.
    pub show_grid_with_spacer: bool,
    pub animate: bool,
    pub settle_delay_ms: u64,
    pub animation_duration_ms: u64,
    pub easing: Easing,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub bar_width: f64,
    pub space_between_bars: f64,
    pub space_between_groups: f64,
    pub tick_count: usize,
    /// Raises the top of the value range above the data maximum.
    pub top_value: Option<f64>,
    pub goal: Option<f64>,
    pub goal_color: Color,
    pub adaptive_color: bool,
    pub bar_corner_radius: f64,
    pub show_bar_value: bool,
    pub legend_position: LegendPosition,
    pub axis_label_style: TextStyle,
    pub bar_value_label_style: TextStyle,
    pub top_inset_px: f64,
    /// Share of the viewport height kept under the plot for category labels.
    pub x_axis_band_ratio: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_orientation: GridOrientation::Horizontal,
            grid_color: Color::GRAY,
            grid_line_width: 2.5,
            show_grid_with_spacer: true,
            animate: true,
            settle_delay_ms: 400,
            animation_duration_ms: 1_000,
            easing: Easing::FastOutSlowIn,
            show_x_axis: true,
            show_y_axis: true,
            bar_width: 30.0,
            space_between_bars: 10.0,
            space_between_groups: 7.0,
            tick_count: 6,
            top_value: None,
            goal: None,
            goal_color: Color::from_argb_u32(0xFF00_7000),
            adaptive_color: false,
            bar_corner_radius: 0.0,
            show_bar_value: false,
            legend_position: LegendPosition::Top,
            axis_label_style: TextStyle::new(12.0, Color::GRAY),
            bar_value_label_style: TextStyle::new(14.0, Color::WHITE).bold(),
            top_inset_px: 10.0,
            x_axis_band_ratio: 0.1,
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn with_grid(mut self, show_grid: bool, orientation: GridOrientation) -> Self {
        self.show_grid = show_grid;
        self.grid_orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn with_bar_geometry(
        mut self,
        bar_width: f64,
        space_between_bars: f64,
        space_between_groups: f64,
    ) -> Self {
        self.bar_width = bar_width;
        self.space_between_bars = space_between_bars;
        self.space_between_groups = space_between_groups;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_top_value(mut self, top_value: f64) -> Self {
        self.top_value = Some(top_value);
        self
    }

    #[must_use]
    pub fn with_goal(mut self, goal: f64, adaptive_color: bool) -> Self {
        self.goal = Some(goal);
        self.adaptive_color = adaptive_color;
        self
    }

    #[must_use]
    pub fn with_bar_corner_radius(mut self, radius: f64) -> Self {
        self.bar_corner_radius = radius;
        self
    }

    #[must_use]
    pub fn with_bar_values(mut self, show_bar_value: bool) -> Self {
        self.show_bar_value = show_bar_value;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, show_x_axis: bool, show_y_axis: bool) -> Self {
        self.show_x_axis = show_x_axis;
        self.show_y_axis = show_y_axis;
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    /// Grid orientation to plan, `None` when the grid is hidden.
    #[must_use]
    pub fn grid_mode(&self) -> Option<GridOrientation> {
        self.show_grid.then_some(self.grid_orientation)
    }

    #[must_use]
    pub fn spacing(&self) -> BarSpacing {
        BarSpacing::new(
            self.bar_width,
            self.space_between_bars,
            self.space_between_groups,
        )
    }

    #[must_use]
    pub fn bar_style(&self) -> BarStyle {
        BarStyle {
            spacing: self.spacing(),
            corner_radius: self.bar_corner_radius,
            goal: self.goal,
            adaptive_color: self.adaptive_color,
        }
    }

    #[must_use]
    pub fn animation_timings(&self) -> AnimationTimings {
        AnimationTimings {
            enabled: self.animate,
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            duration: Duration::from_millis(self.animation_duration_ms),
            easing: self.easing,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.bar_width.is_finite() || self.bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("space_between_bars", self.space_between_bars),
            ("space_between_groups", self.space_between_groups),
            ("bar_corner_radius", self.bar_corner_radius),
            ("top_inset_px", self.top_inset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.grid_line_width.is_finite() || self.grid_line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "grid line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.x_axis_band_ratio.is_finite() || !(0.0..1.0).contains(&self.x_axis_band_ratio) {
            return Err(ChartError::InvalidData(
                "x-axis band ratio must be in [0, 1)".to_owned(),
            ));
        }
        if self.tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick count must be >= 1".to_owned(),
            ));
        }
        for (name, value) in [("top_value", self.top_value), ("goal", self.goal)] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!("`{name}` must be finite")));
            }
        }
        if self.animate && self.animation_duration_ms == 0 {
            return Err(ChartError::InvalidData(
                "animation duration must be > 0 when animation is enabled".to_owned(),
            ));
        }
        for style in [self.axis_label_style, self.bar_value_label_style] {
            if !style.font_size_px.is_finite() || style.font_size_px <= 0.0 {
                return Err(ChartError::InvalidData(
                    "label font size must be finite and > 0".to_owned(),
                ));
            }
            style.color.validate()?;
        }
        self.grid_color.validate()?;
        self.goal_color.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates config from JSON; missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
