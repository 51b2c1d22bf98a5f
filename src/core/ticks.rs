use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ValueScale;

/// Regular ticks closer than this (in data units) below the top value are dropped.
pub const NEAR_TOP_BAND: f64 = 2.0;
/// Half-width of the goal band in data units.
pub const GOAL_BAND_HALF_WIDTH: f64 = 1.5;

/// One y-axis tick with its pixel offset from the chart top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub pixel_y: f64,
    pub is_baseline: bool,
    pub is_goal: bool,
    pub is_top: bool,
}

impl Tick {
    fn regular(value: f64, scale: ValueScale) -> Self {
        Self {
            value,
            pixel_y: scale.to_pixel_y(value),
            is_baseline: value == 0.0,
            is_goal: false,
            is_top: false,
        }
    }
}

/// Distance between regular ticks: `(floor(upper) + 1) / tick_count` in whole
/// units, never below one.
#[must_use]
pub fn tick_step(upper: f64, tick_count: usize) -> u64 {
    let whole_upper = whole_units(upper);
    let tick_count = tick_count.max(1) as u64;
    (whole_upper.saturating_add(1) / tick_count).max(1)
}

/// Returns `true` when `value` sits inside the goal band `[goal - 1.5, goal + 1.5]`.
#[must_use]
pub fn in_goal_band(value: f64, goal: f64) -> bool {
    (value - goal).abs() <= GOAL_BAND_HALF_WIDTH
}

/// Plans the y-axis ticks for a bar chart.
///
/// Regular candidates run `0, step, 2*step, ...` up to the top value. A
/// candidate is dropped when it falls in the near-top band or inside the goal
/// band, so its label never overlaps the top or goal label. The top value is
/// always emitted, and so is the goal when one is set. The baseline is exempt
/// from the near-top band so short ranges keep their zero line.
///
/// Ticks come back ordered ascending by value.
#[must_use]
pub fn compute_ticks(scale: ValueScale, tick_count: usize, goal: Option<f64>) -> Vec<Tick> {
    let upper = scale.range().upper;
    let step = tick_step(upper, tick_count);
    let mut ticks = Vec::new();

    let mut whole = 0_u64;
    loop {
        let value = whole as f64;
        if value > upper {
            break;
        }

        let near_top = value != 0.0 && value >= upper - NEAR_TOP_BAND;
        let near_goal = goal.is_some_and(|goal| in_goal_band(value, goal));
        // A candidate equal to the top value is emitted as the fixed top tick.
        if value != upper && !near_top && !near_goal {
            ticks.push(Tick::regular(value, scale));
        }

        match whole.checked_add(step) {
            Some(next) => whole = next,
            None => break,
        }
    }

    let mut fixed: SmallVec<[Tick; 2]> = SmallVec::new();
    fixed.push(Tick {
        value: upper,
        pixel_y: scale.to_pixel_y(upper),
        is_baseline: upper == 0.0,
        is_goal: false,
        is_top: true,
    });
    if let Some(goal) = goal {
        fixed.push(Tick {
            value: goal,
            pixel_y: scale.to_pixel_y(goal),
            is_baseline: false,
            is_goal: true,
            is_top: false,
        });
    }
    ticks.extend(fixed);

    ticks.sort_by(|left, right| left.value.total_cmp(&right.value));
    ticks
}

fn whole_units(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // Float-to-int casts saturate, so huge tops stay in range.
    value.floor() as u64
}
