use serde::{Deserialize, Serialize};

use crate::core::{
    AnimationPhase, BarRect, DatasetToken, GridLine, PlotArea, TextStyle, Tick, ValueRange,
    Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::TextHAlign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelRole {
    YAxis,
    Goal,
    XAxis,
    BarValue,
}

/// Where one label is drawn, in viewport coordinates. `y` is the top of the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub role: LabelRole,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
    pub style: TextStyle,
}

/// Complete geometry of one frame, ready to be turned into draw commands.
///
/// Bars are plot-local (see [`BarRect`]); grid lines and labels are already
/// in viewport coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub range: ValueRange,
    pub region_width: f64,
    /// Width of all bar groups; may exceed the plot width, hosts scroll it.
    pub content_width: f64,
    pub ticks: Vec<Tick>,
    pub grid_lines: Vec<GridLine>,
    pub bars: Vec<BarRect>,
    pub axis_labels: Vec<LabelPlacement>,
    pub value_labels: Vec<LabelPlacement>,
    pub progress: f64,
    pub phase: Option<AnimationPhase>,
    pub token: Option<DatasetToken>,
}

impl LayoutResult {
    #[must_use]
    pub fn labels(&self, role: LabelRole) -> impl Iterator<Item = &LabelPlacement> + '_ {
        self.axis_labels
            .iter()
            .chain(self.value_labels.iter())
            .filter(move |label| label.role == role)
    }

    /// Serializes the layout to pretty JSON for snapshots and debugging.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize layout: {e}")))
    }
}
