use crate::core::Series;
use crate::render::Color;

/// Resolves the fill of one bar.
///
/// Without a goal, or with adaptive coloring off, every bar uses the series
/// color. Otherwise a value meeting the goal takes the above-goal color and
/// anything below takes the below-goal color.
#[must_use]
pub fn color_for(series: &Series, value: f64, goal: Option<f64>, adaptive: bool) -> Color {
    match goal {
        Some(goal) if adaptive => {
            if value >= goal {
                series.resolved_above_goal_color()
            } else {
                series.resolved_below_goal_color()
            }
        }
        _ => series.color,
    }
}
