use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error(
        "series `{series}` has {actual} values but the dataset has {expected} categories"
    )]
    ShapeMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("series `{series}` contains negative value {value} at index {index}")]
    NegativeValue {
        series: String,
        index: usize,
        value: f64,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
