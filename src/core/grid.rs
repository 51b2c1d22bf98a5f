use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Tick};

/// Dash pattern of guide lines, in pixels on / off.
pub const GRID_DASH_PATTERN_PX: (f64, f64) = (10.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridOrientation {
    Horizontal,
    Vertical,
    Both,
}

impl GridOrientation {
    #[must_use]
    pub fn has_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    #[must_use]
    pub fn has_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridColorRole {
    Grid,
    Goal,
}

/// One grid segment in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub dashed: bool,
    pub color_role: GridColorRole,
}

/// Turns planned ticks and the category count into grid segments.
///
/// Horizontal lines span the plot width, one per tick: the baseline and the
/// top are solid, the goal is solid in the goal role, the rest are guides.
/// Vertical lines sit on every category boundary, `0..=category_count`, and
/// run from the plot top to the baseline. Guides are dashed only when
/// `dashed_guides` is set. `None` means the grid is hidden.
#[must_use]
pub fn compute_grid_lines(
    ticks: &[Tick],
    category_count: usize,
    region_width: f64,
    orientation: Option<GridOrientation>,
    plot: PlotArea,
    dashed_guides: bool,
) -> Vec<GridLine> {
    let Some(orientation) = orientation else {
        return Vec::new();
    };

    let mut lines = Vec::new();

    if orientation.has_horizontal() {
        lines.extend(ticks.iter().map(|tick| {
            let y = plot.top + tick.pixel_y;
            let solid = tick.is_goal || tick.is_baseline || tick.is_top;
            GridLine {
                x0: plot.left,
                y0: y,
                x1: plot.right(),
                y1: y,
                dashed: dashed_guides && !solid,
                color_role: if tick.is_goal {
                    GridColorRole::Goal
                } else {
                    GridColorRole::Grid
                },
            }
        }));
    }

    if orientation.has_vertical() {
        lines.extend((0..=category_count).map(|boundary| {
            let x = plot.left + boundary as f64 * region_width;
            GridLine {
                x0: x,
                y0: plot.top,
                x1: x,
                y1: plot.baseline_y(),
                dashed: dashed_guides,
                color_role: GridColorRole::Grid,
            }
        }));
    }

    lines
}
