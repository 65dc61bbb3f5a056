use serde::{Deserialize, Serialize};

use crate::core::ticks;
use crate::error::{ChartError, ChartResult};

/// Scale families a chart axis can request.
///
/// `Time` is accepted in configuration for hosts that label the x axis with
/// wall-clock time, but the numeric core has no calendar logic; requesting it
/// from [`create_scale`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleType {
    Linear,
    Log10,
    Time,
}

const PADDING_RATIO: f64 = 0.05;
const MIN_SIGNIFICANT_PADDING: f64 = 0.01;
const NICE_TICK_COUNT: f64 = 10.0;

/// Stateless bidirectional mapping between a numeric domain and range.
pub trait Scale {
    /// Maps `x` from domain space into range space.
    fn forward(&self, domain: (f64, f64), range: (f64, f64), x: f64) -> f64;

    /// Maps `x` from range space back into domain space.
    fn reverse(&self, domain: (f64, f64), range: (f64, f64), x: f64) -> f64;

    /// Expands a raw bound pair to padded, rounded axis bounds.
    fn nice(&self, min_and_max: (f64, f64)) -> ChartResult<(f64, f64)>;

    /// Approximately `size_guidance` tick values within the bounds.
    /// Depending on the bounds, it may return fewer or more ticks.
    fn ticks(&self, low_and_high: (f64, f64), size_guidance: usize) -> Vec<f64>;
}

pub fn create_scale(scale_type: ScaleType) -> ChartResult<Box<dyn Scale>> {
    match scale_type {
        ScaleType::Linear => Ok(Box::new(LinearScale)),
        ScaleType::Log10 => Ok(Box::new(Log10Scale)),
        ScaleType::Time => Err(ChartError::UnsupportedScaleType(scale_type)),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearScale;

impl LinearScale {
    fn transform(input_space: (f64, f64), output_space: (f64, f64), x: f64) -> f64 {
        let (input_min, input_max) = input_space;
        let input_spread = input_max - input_min;
        let (output_min, output_max) = output_space;
        let output_spread = output_max - output_min;

        if input_spread == 0.0 {
            return output_min;
        }

        (output_spread / input_spread) * (x - input_min) + output_min
    }
}

impl Scale for LinearScale {
    fn forward(&self, domain: (f64, f64), range: (f64, f64), x: f64) -> f64 {
        Self::transform(domain, range, x)
    }

    fn reverse(&self, domain: (f64, f64), range: (f64, f64), x: f64) -> f64 {
        Self::transform(range, domain, x)
    }

    fn nice(&self, min_and_max: (f64, f64)) -> ChartResult<(f64, f64)> {
        let (min, max) = min_and_max;
        if max < min {
            return Err(ChartError::InvalidRange { min, max });
        }

        let padding = if min == max {
            // Even a zero-width input (both bounds 0) must widen.
            (min * PADDING_RATIO).max(MIN_SIGNIFICANT_PADDING)
        } else {
            (max - min + f64::EPSILON) * PADDING_RATIO
        };
        Ok(ticks::nice_linear_domain(
            min - padding,
            max + padding,
            NICE_TICK_COUNT,
        ))
    }

    fn ticks(&self, low_and_high: (f64, f64), size_guidance: usize) -> Vec<f64> {
        ticks::linear_ticks(low_and_high.0, low_and_high.1, size_guidance as f64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Log10Scale;

impl Log10Scale {
    fn transform(x: f64) -> f64 {
        // Non-positive inputs clamp to the smallest positive value so the
        // logarithm stays finite.
        if x > 0.0 {
            x.log10()
        } else {
            f64::MIN_POSITIVE.log10()
        }
    }

    fn untransform(x: f64) -> f64 {
        10f64.powf(x)
    }
}

impl Scale for Log10Scale {
    fn forward(&self, domain: (f64, f64), range: (f64, f64), x: f64) -> f64 {
        if x <= 0.0 {
            return range.0;
        }

        let (domain_min, domain_max) = domain;
        let (range_min, range_max) = range;

        let transformed_min = Self::transform(domain_min);
        let transformed_max = Self::transform(domain_max);
        let domain_spread = transformed_max - transformed_min;
        let range_spread = range_max - range_min;
        let x = Self::transform(x);

        (range_spread / (domain_spread + f64::EPSILON)) * (x - transformed_min) + range_min
    }

    fn reverse(&self, domain: (f64, f64), range: (f64, f64), x: f64) -> f64 {
        let (domain_min, domain_max) = domain;
        let (range_min, range_max) = range;

        let transformed_min = Self::transform(domain_min);
        let transformed_max = Self::transform(domain_max);
        let domain_spread = transformed_max - transformed_min;
        let range_spread = range_max - range_min;

        let value = (domain_spread / (range_spread + f64::EPSILON)) * (x - range_min)
            + transformed_min;
        Self::untransform(value)
    }

    fn nice(&self, min_and_max: (f64, f64)) -> ChartResult<(f64, f64)> {
        let (min, max) = min_and_max;
        if min > max {
            return Err(ChartError::InvalidRange { min, max });
        }

        let adjusted_min = min.max(f64::MIN_POSITIVE);
        let adjusted_max = max.max(f64::MIN_POSITIVE);
        if min <= 0.0 || max <= 0.0 {
            // Padding in log space is undefined once a bound was clamped.
            return Ok((adjusted_min, adjusted_max));
        }

        let numeric_min_log = Self::transform(f64::MIN_POSITIVE);
        let min_log = Self::transform(adjusted_min);
        let max_log = Self::transform(adjusted_max);

        let spread_in_log = max_log - min_log;
        let pad_in_log = if spread_in_log > 0.0 {
            spread_in_log * PADDING_RATIO
        } else {
            // A single-decade point (e.g. log10(1) = 0) still needs padding.
            (min_log * PADDING_RATIO).abs().max(MIN_SIGNIFICANT_PADDING)
        };

        Ok((
            Self::untransform(numeric_min_log.max(min_log - pad_in_log)),
            Self::untransform(max_log + pad_in_log),
        ))
    }

    fn ticks(&self, low_and_high: (f64, f64), size_guidance: usize) -> Vec<f64> {
        let low = if low_and_high.0 <= 0.0 {
            f64::MIN_POSITIVE
        } else {
            low_and_high.0
        };
        let high = if low_and_high.1 <= 0.0 {
            f64::MIN_POSITIVE
        } else {
            low_and_high.1
        };

        let ticks = ticks::log10_ticks(low, high, size_guidance as f64);
        if ticks.is_empty() {
            vec![low_and_high.0, low_and_high.1]
        } else {
            ticks
        }
    }
}
