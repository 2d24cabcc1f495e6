use std::any::Any;

use compute::BoundsConfig;
use foundation::bounds::{GeoBounds, LatLng};
use serde_json::Value;

use crate::error::LayerError;
use crate::layer::{Layer, LayerId, LayerKind};
use crate::locations::{estimate_bounds, validate_location};

/// A GeoJSON FeatureCollection drawn as-is; bounded by every coordinate it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonLayer {
    id: LayerId,
    data: Value,
    config: BoundsConfig,
    bounds: GeoBounds,
}

impl GeoJsonLayer {
    pub fn new(id: u64, data: Value) -> Result<Self, LayerError> {
        let config = BoundsConfig::default();
        let bounds = Self::compute_bounds(&data, &config)?;
        Ok(Self {
            id: LayerId(id),
            data,
            config,
            bounds,
        })
    }

    pub fn from_geojson_str(id: u64, payload: &str) -> Result<Self, LayerError> {
        let data: Value = serde_json::from_str(payload)
            .map_err(|e| LayerError::GeoJson(format!("JSON parse error: {e}")))?;
        Self::new(id, data)
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Replace the collection. Returns whether it differed from the current one.
    pub fn set_data(&mut self, data: Value) -> Result<bool, LayerError> {
        if data == self.data {
            return Ok(false);
        }
        self.bounds = Self::compute_bounds(&data, &self.config)?;
        self.data = data;
        Ok(true)
    }

    fn compute_bounds(data: &Value, config: &BoundsConfig) -> Result<GeoBounds, LayerError> {
        let locations = collection_locations(data)?;
        if locations.is_empty() {
            return Err(LayerError::TooFewLocations {
                kind: LayerKind::GeoJson,
                min: 1,
                got: 0,
            });
        }
        estimate_bounds(&locations, config)
    }
}

/// Every position of every feature, as (lat, lng).
pub fn collection_locations(value: &Value) -> Result<Vec<LatLng>, LayerError> {
    let obj = value
        .as_object()
        .ok_or_else(|| LayerError::GeoJson("expected a JSON object".to_string()))?;
    let ty = obj.get("type").and_then(|v| v.as_str());
    if ty != Some("FeatureCollection") {
        return Err(LayerError::GeoJson(
            "expected GeoJSON FeatureCollection".to_string(),
        ));
    }
    let features = obj
        .get("features")
        .and_then(|v| v.as_array())
        .ok_or_else(|| LayerError::GeoJson("FeatureCollection missing features".to_string()))?;

    let mut out = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        let geometry = feature
            .as_object()
            .ok_or_else(|| {
                LayerError::GeoJson(format!("feature at index {index} must be an object"))
            })?
            .get("geometry");
        match geometry {
            // Features without geometry are legal and contribute nothing.
            None | Some(Value::Null) => continue,
            Some(g) => geometry_locations(g, &mut out)
                .map_err(|reason| LayerError::GeoJson(format!("feature {index}: {reason}")))?,
        }
    }

    for &p in &out {
        validate_location(p)?;
    }
    Ok(out)
}

fn geometry_locations(geometry: &Value, out: &mut Vec<LatLng>) -> Result<(), String> {
    let obj = geometry
        .as_object()
        .ok_or("geometry must be an object")?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("geometry missing type")?;

    if ty == "GeometryCollection" {
        let geometries = obj
            .get("geometries")
            .and_then(|v| v.as_array())
            .ok_or("GeometryCollection missing geometries")?;
        for g in geometries {
            geometry_locations(g, out)?;
        }
        return Ok(());
    }

    let depth = match ty {
        "Point" => 0,
        "MultiPoint" | "LineString" => 1,
        "MultiLineString" | "Polygon" => 2,
        "MultiPolygon" => 3,
        other => return Err(format!("unsupported geometry type: {other}")),
    };
    let coords = obj.get("coordinates").ok_or("geometry missing coordinates")?;
    nested_positions(coords, depth, out)
}

fn nested_positions(value: &Value, depth: usize, out: &mut Vec<LatLng>) -> Result<(), String> {
    if depth == 0 {
        out.push(position(value)?);
        return Ok(());
    }
    let items = value.as_array().ok_or("coordinates must be arrays")?;
    for item in items {
        nested_positions(item, depth - 1, out)?;
    }
    Ok(())
}

// GeoJSON positions are [lng, lat, (alt)].
fn position(value: &Value) -> Result<LatLng, String> {
    let arr = value.as_array().ok_or("position must be an array")?;
    if arr.len() < 2 {
        return Err("position needs at least two numbers".to_string());
    }
    let lng = arr[0].as_f64().ok_or("position longitude must be a number")?;
    let lat = arr[1].as_f64().ok_or("position latitude must be a number")?;
    Ok(LatLng::new(lat, lng))
}

impl Layer for GeoJsonLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn kind(&self) -> LayerKind {
        LayerKind::GeoJson
    }

    fn has_bounds(&self) -> bool {
        true
    }

    fn data_bounds(&self) -> Option<GeoBounds> {
        Some(self.bounds)
    }

    fn configure(&mut self, config: &BoundsConfig) -> Result<(), LayerError> {
        self.bounds = Self::compute_bounds(&self.data, config)?;
        self.config = *config;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoJsonLayer, collection_locations};
    use crate::error::LayerError;
    use crate::layer::Layer;
    use foundation::bounds::LatLng;
    use serde_json::json;

    fn collection() -> serde_json::Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "a" },
                    "geometry": { "type": "Point", "coordinates": [2.35, 48.85] }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[-0.1, 51.5], [13.4, 52.5], [4.9, 52.4], [-0.1, 51.5]]]
                    }
                },
                { "type": "Feature", "properties": {}, "geometry": null }
            ]
        })
    }

    #[test]
    fn reads_positions_as_lng_lat() {
        let pts = collection_locations(&collection()).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], LatLng::new(48.85, 2.35));
        assert_eq!(pts[2], LatLng::new(52.5, 13.4));
    }

    #[test]
    fn bounds_cover_features() {
        let layer = GeoJsonLayer::new(1, collection()).unwrap();
        let b = layer.data_bounds().unwrap();
        assert!(b.south() < 48.85);
        assert!(b.longitudes().contains(2.35));
    }

    #[test]
    fn geometry_collections_are_walked() {
        let data = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "GeometryCollection",
                    "geometries": [
                        { "type": "MultiPoint", "coordinates": [[10.0, 1.0], [11.0, 2.0]] },
                        { "type": "MultiPolygon", "coordinates": [[[[12.0, 3.0], [13.0, 4.0], [12.0, 3.0]]]] }
                    ]
                }
            }]
        });
        assert_eq!(collection_locations(&data).unwrap().len(), 5);
    }

    #[test]
    fn rejects_non_collections() {
        let err = GeoJsonLayer::new(1, json!({ "type": "Feature" })).unwrap_err();
        assert!(matches!(err, LayerError::GeoJson(_)));
        assert!(GeoJsonLayer::from_geojson_str(1, "{ not json").is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let data = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [0.0, 120.0] }
            }]
        });
        assert!(matches!(
            collection_locations(&data),
            Err(LayerError::InvalidLocation { lat, .. }) if lat == 120.0
        ));
    }

    #[test]
    fn identical_collection_is_not_a_change() {
        let mut layer = GeoJsonLayer::new(1, collection()).unwrap();
        assert_eq!(layer.set_data(collection()), Ok(false));
        let moved = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-3.7, 40.4] }
            }]
        });
        assert_eq!(layer.set_data(moved), Ok(true));
        assert!(layer.data_bounds().unwrap().longitudes().contains(-3.7));
    }

    #[test]
    fn empty_collection_is_rejected() {
        let data = json!({ "type": "FeatureCollection", "features": [] });
        assert!(matches!(
            GeoJsonLayer::new(1, data),
            Err(LayerError::TooFewLocations { got: 0, .. })
        ));
    }
}
