use compute::BoundsError;
use foundation::ids::LayerId;

use crate::layer::LayerKind;

#[derive(Debug, Clone, PartialEq)]
pub enum LayerError {
    InvalidLocation { lat: f64, lng: f64 },
    InvalidWeight(f64),
    WeightCountMismatch { locations: usize, weights: usize },
    /// Bounded layers need at least `min` locations.
    TooFewLocations { kind: LayerKind, min: usize, got: usize },
    GeoJson(String),
    InvalidZoom(u8),
    UnknownLayer(LayerId),
    DuplicateLayer(LayerId),
    KindMismatch { id: LayerId, actual: LayerKind },
    Bounds(BoundsError),
}

impl std::fmt::Display for LayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerError::InvalidLocation { lat, lng } => {
                write!(f, "({lat}, {lng}) is not a valid latitude, longitude pair")
            }
            LayerError::InvalidWeight(w) => {
                write!(f, "{w} is not a valid weight: weights must be non-negative")
            }
            LayerError::WeightCountMismatch { locations, weights } => write!(
                f,
                "got {weights} weights for {locations} locations: counts must match"
            ),
            LayerError::TooFewLocations { kind, min, got } => {
                write!(f, "{kind} layer needs at least {min} locations, got {got}")
            }
            LayerError::GeoJson(msg) => write!(f, "invalid GeoJSON: {msg}"),
            LayerError::InvalidZoom(z) => write!(f, "zoom level {z} is outside 0..=21"),
            LayerError::UnknownLayer(id) => write!(f, "{id} is not on this map"),
            LayerError::DuplicateLayer(id) => write!(f, "{id} is already on this map"),
            LayerError::KindMismatch { id, actual } => {
                write!(f, "{id} is a {actual} layer, not the requested type")
            }
            LayerError::Bounds(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayerError::Bounds(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoundsError> for LayerError {
    fn from(e: BoundsError) -> Self {
        LayerError::Bounds(e)
    }
}
