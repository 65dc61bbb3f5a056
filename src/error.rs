use thiserror::Error;

use crate::core::ScaleType;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("scale type {0:?} is not supported")]
    UnsupportedScaleType(ScaleType),

    #[error("invalid range: min {min} is larger than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
