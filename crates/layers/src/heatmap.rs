use std::any::Any;

use compute::BoundsConfig;
use foundation::bounds::{GeoBounds, LatLng};

use crate::error::LayerError;
use crate::layer::{Layer, LayerId, LayerKind};
use crate::locations::{estimate_bounds, validate_locations, validate_weights};

/// Density layer over (optionally weighted) locations.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapLayer {
    id: LayerId,
    locations: Vec<LatLng>,
    weights: Option<Vec<f64>>,
    config: BoundsConfig,
    bounds: GeoBounds,
}

impl HeatmapLayer {
    pub fn new(id: u64, locations: Vec<LatLng>) -> Result<Self, LayerError> {
        Self::build(id, locations, None)
    }

    pub fn weighted(
        id: u64,
        locations: Vec<LatLng>,
        weights: Vec<f64>,
    ) -> Result<Self, LayerError> {
        Self::build(id, locations, Some(weights))
    }

    fn build(
        id: u64,
        locations: Vec<LatLng>,
        weights: Option<Vec<f64>>,
    ) -> Result<Self, LayerError> {
        let config = BoundsConfig::default();
        let bounds = Self::compute_bounds(&locations, weights.as_deref(), &config)?;
        Ok(Self {
            id: LayerId(id),
            locations,
            weights,
            config,
            bounds,
        })
    }

    pub fn locations(&self) -> &[LatLng] {
        &self.locations
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Replace locations and weights together; the layer is unchanged on error.
    /// Returns whether the data differed from what the layer already held.
    pub fn set_data(
        &mut self,
        locations: Vec<LatLng>,
        weights: Option<Vec<f64>>,
    ) -> Result<bool, LayerError> {
        if locations == self.locations && weights == self.weights {
            return Ok(false);
        }
        self.bounds = Self::compute_bounds(&locations, weights.as_deref(), &self.config)?;
        self.locations = locations;
        self.weights = weights;
        Ok(true)
    }

    fn compute_bounds(
        locations: &[LatLng],
        weights: Option<&[f64]>,
        config: &BoundsConfig,
    ) -> Result<GeoBounds, LayerError> {
        if locations.is_empty() {
            return Err(LayerError::TooFewLocations {
                kind: LayerKind::Heatmap,
                min: 1,
                got: 0,
            });
        }
        validate_locations(locations)?;
        if let Some(weights) = weights {
            validate_weights(weights, locations.len())?;
        }
        estimate_bounds(locations, config)
    }
}

impl Layer for HeatmapLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Heatmap
    }

    fn has_bounds(&self) -> bool {
        true
    }

    fn data_bounds(&self) -> Option<GeoBounds> {
        Some(self.bounds)
    }

    fn configure(&mut self, config: &BoundsConfig) -> Result<(), LayerError> {
        self.bounds = Self::compute_bounds(&self.locations, self.weights.as_deref(), config)?;
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
