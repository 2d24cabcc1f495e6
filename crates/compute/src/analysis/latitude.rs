use tracing::trace;

use crate::analysis::guard::{clamp_preserving_width, epsilon_interval, is_degenerate};
use crate::analysis::statistics::Statistics;
use crate::config::BoundsConfig;
use crate::error::BoundsError;

/// Estimate a `(lower, upper)` latitude range framing `latitudes`.
///
/// Uses `mean ± 2σ` (population standard deviation), clamped to the allowed
/// latitude range of the default [`BoundsConfig`].
pub fn latitude_bounds(latitudes: &[f64]) -> Result<(f64, f64), BoundsError> {
    latitude_bounds_with(latitudes, &BoundsConfig::default())
}

pub fn latitude_bounds_with(
    latitudes: &[f64],
    config: &BoundsConfig,
) -> Result<(f64, f64), BoundsError> {
    config.validate()?;
    let (min, max) = Statistics::min_max(latitudes).ok_or(BoundsError::EmptyInput)?;
    let eps = config.epsilon;

    let (lower, upper) = if is_degenerate(max - min, eps) {
        trace!(count = latitudes.len(), "latitudes coincide, using epsilon window");
        epsilon_interval(0.5 * (min + max), eps)
    } else {
        let (mean, std_dev) = Statistics::mean_std_dev(latitudes).ok_or(BoundsError::EmptyInput)?;
        (mean - 2.0 * std_dev, mean + 2.0 * std_dev)
    };

    Ok(clamp_preserving_width(
        lower,
        upper,
        config.min_latitude,
        config.max_latitude,
        eps,
    ))
}
