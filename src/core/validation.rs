use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};

/// Rejects malformed datasets before any layout work happens.
///
/// Checks run series by series in order: value count first, then sign, then
/// finiteness, so the first offending series decides the error.
pub fn validate_dataset(dataset: &Dataset) -> ChartResult<()> {
    let expected = dataset.category_count();

    for series in &dataset.series {
        if series.values.len() != expected {
            return Err(ChartError::ShapeMismatch {
                series: series.name.clone(),
                expected,
                actual: series.values.len(),
            });
        }

        if let Some((index, value)) = series
            .values
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| *value < 0.0)
        {
            return Err(ChartError::NegativeValue {
                series: series.name.clone(),
                index,
                value,
            });
        }

        if let Some(index) = series.values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` value at index {index} must be finite",
                series.name
            )));
        }
    }

    Ok(())
}
