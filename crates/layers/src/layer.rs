use std::any::Any;
use std::fmt;

use compute::BoundsConfig;
use foundation::bounds::GeoBounds;

use crate::error::LayerError;

pub use foundation::ids::LayerId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Markers,
    Heatmap,
    GeoJson,
    Directions,
    Traffic,
    Transit,
    Bicycling,
}

impl LayerKind {
    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Markers => "markers",
            LayerKind::Heatmap => "heatmap",
            LayerKind::GeoJson => "geojson",
            LayerKind::Directions => "directions",
            LayerKind::Traffic => "traffic",
            LayerKind::Transit => "transit",
            LayerKind::Bicycling => "bicycling",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A map layer as seen by the viewport computation.
///
/// Layers that draw point data report `has_bounds() == true` and keep
/// `data_bounds()` up to date whenever that data changes. Overlays that draw
/// the whole map (traffic, transit) are never bounded.
pub trait Layer: Any + fmt::Debug {
    fn id(&self) -> LayerId;

    fn kind(&self) -> LayerKind;

    fn has_bounds(&self) -> bool;

    /// `Some` only when `has_bounds()` is true.
    fn data_bounds(&self) -> Option<GeoBounds>;

    /// Re-estimate bounds with the owning map's settings. On error the layer
    /// keeps its previous settings and bounds.
    fn configure(&mut self, _config: &BoundsConfig) -> Result<(), LayerError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
