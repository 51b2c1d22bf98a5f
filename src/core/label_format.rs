use crate::core::{TextMeasurer, TextStyle};

const COMPACT_UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Formats a value with a K/M/B suffix once it reaches a thousand.
///
/// Suffixed values keep one decimal and drop a trailing `.0`; smaller values
/// are printed as-is, rounded to two decimals. `999_990` becomes `"1M"`
/// rather than `"1000K"`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    for (index, (divisor, suffix)) in COMPACT_UNITS.iter().copied().enumerate() {
        if magnitude < divisor {
            continue;
        }

        let scaled = round_to(value / divisor, 1);
        if scaled.abs() >= 1_000.0 && index > 0 {
            let (bigger_divisor, bigger_suffix) = COMPACT_UNITS[index - 1];
            return format!(
                "{}{bigger_suffix}",
                display_number(round_to(value / bigger_divisor, 1))
            );
        }
        return format!("{}{suffix}", display_number(scaled));
    }

    display_number(round_to(value, 2))
}

/// Pixel width the compact label of `value` occupies when drawn in `style`.
#[must_use]
pub fn formatted_label_width(value: f64, style: &TextStyle, measurer: &dyn TextMeasurer) -> f64 {
    measurer.measure_text_width(&format_compact(value), style)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

fn display_number(value: f64) -> String {
    // Avoid printing "-0" for tiny negatives that round to zero.
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::format_compact;

    #[test]
    fn thousands_millions_billions() {
        assert_eq!(format_compact(1_500.0), "1.5K");
        assert_eq!(format_compact(2_500_000.0), "2.5M");
        assert_eq!(format_compact(7_340_000_000.0), "7.3B");
    }

    #[test]
    fn values_below_a_thousand_are_unchanged() {
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(12.5), "12.5");
        assert_eq!(format_compact(0.1 + 0.2), "0.3");
    }

    #[test]
    fn whole_suffixed_values_drop_trailing_zero() {
        assert_eq!(format_compact(2_000.0), "2K");
        assert_eq!(format_compact(1_000_000.0), "1M");
    }

    #[test]
    fn rounding_promotes_to_next_suffix() {
        assert_eq!(format_compact(999_990.0), "1M");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_compact(-1_500.0), "-1.5K");
        assert_eq!(format_compact(-0.001), "0");
    }
}
