use compute::analysis::guard::{clamp_preserving_width, epsilon_interval, is_degenerate};
use compute::{BoundsConfig, latitude_bounds_with, longitude_bounds_with};
use foundation::bounds::{GeoBounds, LatLng};
use foundation::math::{MAX_LATITUDE, is_valid_latitude, is_valid_longitude};

use crate::error::LayerError;

pub fn validate_location(p: LatLng) -> Result<LatLng, LayerError> {
    if is_valid_latitude(p.lat) && is_valid_longitude(p.lng) {
        Ok(p)
    } else {
        Err(LayerError::InvalidLocation {
            lat: p.lat,
            lng: p.lng,
        })
    }
}

pub fn validate_locations(locations: &[LatLng]) -> Result<(), LayerError> {
    for &p in locations {
        validate_location(p)?;
    }
    Ok(())
}

pub fn validate_weights(weights: &[f64], locations: usize) -> Result<(), LayerError> {
    if weights.len() != locations {
        return Err(LayerError::WeightCountMismatch {
            locations,
            weights: weights.len(),
        });
    }
    for &w in weights {
        if !(w.is_finite() && w >= 0.0) {
            return Err(LayerError::InvalidWeight(w));
        }
    }
    Ok(())
}

/// Statistical viewport for a point cloud: latitude and longitude estimated
/// independently.
pub fn estimate_bounds(
    locations: &[LatLng],
    config: &BoundsConfig,
) -> Result<GeoBounds, LayerError> {
    let latitudes: Vec<f64> = locations.iter().map(|p| p.lat).collect();
    let longitudes: Vec<f64> = locations.iter().map(|p| p.lng).collect();
    let lat = latitude_bounds_with(&latitudes, config)?;
    let lng = longitude_bounds_with(&longitudes, config)?;
    Ok(GeoBounds::from_ranges(lat, lng))
}

/// Plain min/max box, without wraparound handling.
///
/// An axis spread over less than `2 * eps` is widened to an epsilon window
/// around its midpoint, so the box never has zero width.
pub fn extent_bounds(locations: &[LatLng], eps: f64) -> Option<GeoBounds> {
    let first = locations.first()?;
    let mut south_west = *first;
    let mut north_east = *first;
    for p in locations.iter().skip(1) {
        south_west.lat = south_west.lat.min(p.lat);
        south_west.lng = south_west.lng.min(p.lng);
        north_east.lat = north_east.lat.max(p.lat);
        north_east.lng = north_east.lng.max(p.lng);
    }

    let mut lat = (south_west.lat, north_east.lat);
    if is_degenerate(lat.1 - lat.0, eps) {
        let (lower, upper) = epsilon_interval((lat.0 + lat.1) / 2.0, eps);
        lat = clamp_preserving_width(lower, upper, -MAX_LATITUDE, MAX_LATITUDE, eps);
    }
    let mut lng = (south_west.lng, north_east.lng);
    if is_degenerate(lng.1 - lng.0, eps) {
        lng = epsilon_interval((lng.0 + lng.1) / 2.0, eps);
    }
    Some(GeoBounds::from_ranges(lat, lng))
}
