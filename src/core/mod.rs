pub mod animation;
pub mod bar_color;
pub mod bar_layout;
pub mod grid;
pub mod label_format;
pub mod scale;
pub mod text;
pub mod ticks;
pub mod types;
pub mod validation;

pub use animation::{
    AnimationDriver, AnimationPhase, AnimationState, AnimationTimings, DatasetToken, Easing,
    PendingTransition,
};
pub use bar_color::color_for;
pub use bar_layout::{BarRect, BarSpacing, BarStyle, layout_bars};
pub use grid::{GRID_DASH_PATTERN_PX, GridColorRole, GridLine, GridOrientation, compute_grid_lines};
pub use label_format::{format_compact, formatted_label_width};
pub use scale::{ScaleBase, ValueScale, to_pixel_y};
pub use text::{EstimatedTextMeasurer, TextMeasurer, TextStyle};
pub use ticks::{GOAL_BAND_HALF_WIDTH, NEAR_TOP_BAND, Tick, compute_ticks, in_goal_band, tick_step};
pub use types::{
    DEFAULT_ABOVE_GOAL_COLOR, DEFAULT_BELOW_GOAL_COLOR, Dataset, PlotArea, Series, ValueRange,
    Viewport,
};
pub use validation::validate_dataset;
