use foundation::math::{CircularStats, longitude_offset, normalize_longitude};
use tracing::{debug, trace};

use crate::analysis::guard::{epsilon_interval, is_degenerate};
use crate::config::BoundsConfig;
use crate::error::BoundsError;

/// Estimate a directed `(west, east)` longitude range framing `longitudes`.
///
/// Longitudes wrap, so the estimate uses wrapped-normal statistics: the mean
/// direction of the points and a circular standard deviation derived from
/// their mean resultant length. The result spans `mean ± 2σ` eastward and may
/// cross the antimeridian.
pub fn longitude_bounds(longitudes: &[f64]) -> Result<(f64, f64), BoundsError> {
    longitude_bounds_with(longitudes, &BoundsConfig::default())
}

pub fn longitude_bounds_with(
    longitudes: &[f64],
    config: &BoundsConfig,
) -> Result<(f64, f64), BoundsError> {
    config.validate()?;
    let first = normalize_longitude(*longitudes.first().ok_or(BoundsError::EmptyInput)?);
    let eps = config.epsilon;

    let normalized: Vec<f64> = longitudes.iter().map(|&l| normalize_longitude(l)).collect();

    // Spread is measured as offsets from the first point so that a cluster
    // sitting on the antimeridian is still recognised as a cluster.
    let (min_offset, max_offset) = normalized
        .iter()
        .map(|&l| longitude_offset(first, l))
        .fold((0.0_f64, 0.0_f64), |(lo, hi), d| (lo.min(d), hi.max(d)));
    if is_degenerate(max_offset - min_offset, eps) {
        trace!(count = longitudes.len(), "longitudes coincide, using epsilon window");
        let center = first + 0.5 * (min_offset + max_offset);
        let (west, east) = epsilon_interval(center, eps);
        return Ok((normalize_longitude(west), normalize_longitude(east)));
    }

    let stats = CircularStats::from_degrees(&normalized);
    let mean = stats.mean_degrees();
    let mut extent = 2.0 * stats.std_dev_degrees();
    let cap = 180.0 - eps;
    if extent > cap {
        debug!(extent, "longitudes cover the whole globe");
        extent = cap;
    }

    Ok((
        normalize_longitude(mean - extent),
        normalize_longitude(mean + extent),
    ))
}
