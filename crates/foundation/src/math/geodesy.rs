/// Northernmost latitude the map renderer can display.
pub const MAX_ALLOWED_LATITUDE: f64 = 85.0;
/// Southernmost latitude the map renderer can display.
pub const MIN_ALLOWED_LATITUDE: f64 = -85.0;

/// Geographic latitude limit (degrees).
pub const MAX_LATITUDE: f64 = 90.0;
/// Geographic longitude limit (degrees).
pub const MAX_LONGITUDE: f64 = 180.0;

/// An equivalent longitude in `[-180, 180)`.
pub fn normalize_longitude(lng: f64) -> f64 {
    let lng = lng.rem_euclid(360.0);
    if lng >= 180.0 { lng - 360.0 } else { lng }
}

/// Signed eastward offset from `from` to `to`, wrapped into `[-180, 180)`.
pub fn longitude_offset(from: f64, to: f64) -> f64 {
    normalize_longitude(to - from)
}

pub fn is_valid_latitude(lat: f64) -> bool {
    (-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat)
}

pub fn is_valid_longitude(lng: f64) -> bool {
    (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lng)
}
