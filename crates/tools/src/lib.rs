use compute::BoundsConfig;
use foundation::bounds::{LatLng, LonInterval};
use foundation::math::normalize_longitude;
use layers::directions::DirectionsLayer;
use layers::geojson::GeoJsonLayer;
use layers::heatmap::HeatmapLayer;
use layers::markers::MarkerLayer;
use layers::overlay::{OverlayKind, TileOverlayLayer};
use layers::{LayerError, Map};
use serde::Deserialize;
use serde_json::Value;

/// JSON description of a map: its layers, bottom first.
#[derive(Debug, Clone, Deserialize)]
pub struct MapDescription {
    pub layers: Vec<LayerDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerDescription {
    Markers {
        locations: Vec<LatLng>,
    },
    Heatmap {
        locations: Vec<LatLng>,
        #[serde(default)]
        weights: Option<Vec<f64>>,
    },
    GeoJson {
        data: Value,
    },
    Directions {
        waypoints: Vec<LatLng>,
    },
    Traffic,
    Transit,
    Bicycling,
}

impl MapDescription {
    pub fn from_json(payload: &str) -> Result<Self, String> {
        serde_json::from_str(payload).map_err(|e| format!("parse layers: {e}"))
    }

    /// Build a map with ids assigned in description order, starting at 1,
    /// and apply the resulting events.
    pub fn build(&self, config: BoundsConfig) -> Result<Map, LayerError> {
        let mut map = Map::with_config(config)?;
        for (index, layer) in self.layers.iter().enumerate() {
            let id = index as u64 + 1;
            match layer {
                LayerDescription::Markers { locations } => {
                    map.add_layer(MarkerLayer::from_locations(id, locations)?)?
                }
                LayerDescription::Heatmap { locations, weights } => {
                    let layer = match weights {
                        Some(w) => HeatmapLayer::weighted(id, locations.clone(), w.clone())?,
                        None => HeatmapLayer::new(id, locations.clone())?,
                    };
                    map.add_layer(layer)?
                }
                LayerDescription::GeoJson { data } => {
                    map.add_layer(GeoJsonLayer::new(id, data.clone())?)?
                }
                LayerDescription::Directions { waypoints } => {
                    map.add_layer(DirectionsLayer::from_stops(id, waypoints.clone())?)?
                }
                LayerDescription::Traffic => {
                    map.add_layer(TileOverlayLayer::new(id, OverlayKind::Traffic))?
                }
                LayerDescription::Transit => {
                    map.add_layer(TileOverlayLayer::new(id, OverlayKind::Transit))?
                }
                LayerDescription::Bicycling => {
                    map.add_layer(TileOverlayLayer::new(id, OverlayKind::Bicycling))?
                }
            };
        }
        map.process_events();
        Ok(map)
    }
}

pub fn parse_config(payload: &str) -> Result<BoundsConfig, String> {
    let config: BoundsConfig =
        serde_json::from_str(payload).map_err(|e| format!("parse config: {e}"))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Parse `west,east` in degrees. Zero-width arcs are rejected.
pub fn parse_interval(s: &str) -> Result<LonInterval, String> {
    let (west, east) = s
        .split_once(',')
        .ok_or_else(|| format!("expected west,east but got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad longitude {v:?}: {e}"))
    };
    let (west, east) = (parse(west)?, parse(east)?);
    if !west.is_finite() || !east.is_finite() {
        return Err(format!("longitudes must be finite: {s:?}"));
    }
    if normalize_longitude(west) == normalize_longitude(east) {
        return Err(format!("west and east must differ: {s:?}"));
    }
    Ok(LonInterval::new(west, east))
}
