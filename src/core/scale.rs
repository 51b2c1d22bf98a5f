use serde::{Deserialize, Serialize};

use crate::core::ValueRange;

/// Which data value sits on the bottom edge of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleBase {
    /// Zero is the baseline. Bar charts always use this.
    Zero,
    /// `range.lower` is the baseline; reserved for chart kinds that float.
    Lower,
}

/// Maps data values to vertical pixel offsets inside a chart of fixed height.
///
/// Pixel `0` is the top of the chart and `chart_height_px` the baseline, so a
/// larger value never maps to a larger pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    range: ValueRange,
    chart_height_px: f64,
    base: ScaleBase,
}

impl ValueScale {
    #[must_use]
    pub fn new(range: ValueRange, chart_height_px: f64, base: ScaleBase) -> Self {
        Self {
            range,
            chart_height_px,
            base,
        }
    }

    #[must_use]
    pub fn bar(range: ValueRange, chart_height_px: f64) -> Self {
        Self::new(range, chart_height_px, ScaleBase::Zero)
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn chart_height_px(self) -> f64 {
        self.chart_height_px
    }

    #[must_use]
    pub fn to_pixel_y(self, value: f64) -> f64 {
        to_pixel_y(value, self.range, self.chart_height_px, self.base)
    }

    /// Fraction of the chart height a value covers above the baseline.
    #[must_use]
    pub fn ratio(self, value: f64) -> f64 {
        if self.chart_height_px == 0.0 {
            return 0.0;
        }
        (self.chart_height_px - self.to_pixel_y(value)) / self.chart_height_px
    }
}

/// Converts a data value to a vertical pixel coordinate.
///
/// A zero-height span (`upper == 0` for a zero base, `upper == lower`
/// otherwise) maps every value onto the baseline instead of dividing by zero.
#[must_use]
pub fn to_pixel_y(value: f64, range: ValueRange, chart_height_px: f64, base: ScaleBase) -> f64 {
    let (origin, span) = match base {
        ScaleBase::Zero => (0.0, range.upper),
        ScaleBase::Lower => (range.lower, range.upper - range.lower),
    };
    if span == 0.0 || !span.is_finite() {
        return chart_height_px;
    }

    chart_height_px - ((value - origin) / span) * chart_height_px
}

#[cfg(test)]
mod tests {
    use super::{ScaleBase, ValueScale, to_pixel_y};
    use crate::core::ValueRange;

    #[test]
    fn zero_maps_to_baseline() {
        let range = ValueRange::new(30.0, 10.0);
        assert_eq!(to_pixel_y(0.0, range, 300.0, ScaleBase::Zero), 300.0);
    }

    #[test]
    fn upper_maps_to_top() {
        let range = ValueRange::new(30.0, 10.0);
        assert_eq!(to_pixel_y(30.0, range, 300.0, ScaleBase::Zero), 0.0);
    }

    #[test]
    fn degenerate_upper_maps_everything_to_baseline() {
        let range = ValueRange::new(0.0, 0.0);
        assert_eq!(to_pixel_y(0.0, range, 250.0, ScaleBase::Zero), 250.0);
        assert_eq!(to_pixel_y(5.0, range, 250.0, ScaleBase::Zero), 250.0);
    }

    #[test]
    fn lower_base_maps_lower_to_baseline() {
        let range = ValueRange::new(30.0, 10.0);
        assert_eq!(to_pixel_y(10.0, range, 200.0, ScaleBase::Lower), 200.0);
        assert_eq!(to_pixel_y(20.0, range, 200.0, ScaleBase::Lower), 100.0);
    }

    #[test]
    fn ratio_is_proportional_for_bar_scale() {
        let scale = ValueScale::bar(ValueRange::new(40.0, 0.0), 400.0);
        assert!((scale.ratio(10.0) - 0.25).abs() <= 1e-12);
    }
}
