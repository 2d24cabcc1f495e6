use serde::{Deserialize, Serialize};

use crate::math::normalize_longitude;

/// A (latitude, longitude) pair in degrees.
///
/// Serialized as a two-element array `[lat, lng]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        LatLng { lat, lng }
    }
}

impl From<LatLng> for (f64, f64) {
    fn from(p: LatLng) -> Self {
        (p.lat, p.lng)
    }
}

/// Rectangular viewport given by its south-west and north-east corners.
///
/// The longitude pair is directed: `south_west.lng` is the western edge and the
/// region extends eastward to `north_east.lng`, possibly through the antimeridian.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(LatLng, LatLng)", into = "(LatLng, LatLng)")]
pub struct GeoBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

/// Bounds a map shows before any layer has reported its own.
pub const DEFAULT_BOUNDS: GeoBounds = GeoBounds {
    south_west: LatLng { lat: 46.2, lng: 6.1 },
    north_east: LatLng { lat: 47.2, lng: 7.1 },
};

impl GeoBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        GeoBounds {
            south_west,
            north_east,
        }
    }

    pub fn from_ranges(latitudes: (f64, f64), longitudes: (f64, f64)) -> Self {
        GeoBounds {
            south_west: LatLng::new(latitudes.0, longitudes.0),
            north_east: LatLng::new(latitudes.1, longitudes.1),
        }
    }

    pub fn south(&self) -> f64 {
        self.south_west.lat
    }

    pub fn north(&self) -> f64 {
        self.north_east.lat
    }

    pub fn longitudes(&self) -> LonInterval {
        LonInterval::new(self.south_west.lng, self.north_east.lng)
    }
}

impl From<(LatLng, LatLng)> for GeoBounds {
    fn from((south_west, north_east): (LatLng, LatLng)) -> Self {
        GeoBounds {
            south_west,
            north_east,
        }
    }
}

impl From<GeoBounds> for (LatLng, LatLng) {
    fn from(b: GeoBounds) -> Self {
        (b.south_west, b.north_east)
    }
}

/// Directed longitude interval: the arc travelling eastward from `west` to `east`.
///
/// `(east, west)` is the complement of `(west, east)`. Endpoints are only
/// meaningful modulo 360, so `(15, 30)` and `(375, 30)` describe the same arc.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LonInterval {
    pub west: f64,
    pub east: f64,
}

impl LonInterval {
    pub fn new(west: f64, east: f64) -> Self {
        LonInterval { west, east }
    }

    /// Same arc with both endpoints in `[-180, 180)`.
    pub fn normalized(self) -> Self {
        LonInterval {
            west: normalize_longitude(self.west),
            east: normalize_longitude(self.east),
        }
    }

    /// True when the arc passes through the antimeridian.
    pub fn wraps(&self) -> bool {
        let n = self.normalized();
        n.west > n.east
    }

    /// Angular width in degrees, in `[0, 360)`.
    pub fn width(&self) -> f64 {
        (self.east - self.west).rem_euclid(360.0)
    }

    pub fn complement(self) -> Self {
        LonInterval {
            west: self.east,
            east: self.west,
        }
    }

    pub fn contains(&self, lng: f64) -> bool {
        (lng - self.west).rem_euclid(360.0) <= self.width()
    }

    /// True when every longitude of `other` also lies on this arc.
    pub fn covers(&self, other: &LonInterval) -> bool {
        let offset = (other.west - self.west).rem_euclid(360.0);
        offset + other.width() <= self.width()
    }
}

impl From<(f64, f64)> for LonInterval {
    fn from((west, east): (f64, f64)) -> Self {
        LonInterval { west, east }
    }
}

impl From<LonInterval> for (f64, f64) {
    fn from(i: LonInterval) -> Self {
        (i.west, i.east)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_BOUNDS, GeoBounds, LatLng, LonInterval};

    #[test]
    fn bounds_serialize_as_corner_pairs() {
        let json = serde_json::to_string(&DEFAULT_BOUNDS).unwrap();
        assert_eq!(json, "[[46.2,6.1],[47.2,7.1]]");
        let back: GeoBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DEFAULT_BOUNDS);
    }

    #[test]
    fn wrapping_interval_is_detected() {
        assert!(LonInterval::new(170.0, -170.0).wraps());
        assert!(!LonInterval::new(-170.0, 170.0).wraps());
        assert!(LonInterval::new(190.0, 200.0).normalized().west < 0.0);
    }

    #[test]
    fn width_and_complement() {
        let i = LonInterval::new(170.0, -170.0);
        assert_eq!(i.width(), 20.0);
        assert_eq!(i.complement().width(), 340.0);
    }

    #[test]
    fn contains_follows_direction() {
        let i = LonInterval::new(170.0, -170.0);
        assert!(i.contains(180.0));
        assert!(i.contains(-175.0));
        assert!(!i.contains(0.0));
        assert!(i.complement().contains(0.0));
    }

    #[test]
    fn covers_nested_arcs() {
        let outer = LonInterval::new(160.0, -150.0);
        assert!(outer.covers(&LonInterval::new(170.0, -170.0)));
        assert!(!outer.covers(&LonInterval::new(150.0, 165.0)));
    }

    #[test]
    fn ranges_build_corners() {
        let b = GeoBounds::from_ranges((-10.0, 20.0), (100.0, -120.0));
        assert_eq!(b.south_west, LatLng::new(-10.0, 100.0));
        assert_eq!(b.north(), 20.0);
        assert!(b.longitudes().wraps());
    }
}
