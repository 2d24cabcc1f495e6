use std::any::Any;

use compute::BoundsConfig;
use foundation::bounds::{GeoBounds, LatLng};

use crate::error::LayerError;
use crate::layer::{Layer, LayerId, LayerKind};
use crate::locations::{estimate_bounds, validate_locations};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location: LatLng,
    pub label: String,
}

impl Marker {
    pub fn new(location: LatLng) -> Self {
        Self {
            location,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A set of markers; bounded by a statistical estimate over marker locations.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayer {
    id: LayerId,
    markers: Vec<Marker>,
    config: BoundsConfig,
    bounds: GeoBounds,
}

impl MarkerLayer {
    pub fn new(id: u64, markers: Vec<Marker>) -> Result<Self, LayerError> {
        let config = BoundsConfig::default();
        let bounds = Self::compute_bounds(&markers, &config)?;
        Ok(Self {
            id: LayerId(id),
            markers,
            config,
            bounds,
        })
    }

    pub fn from_locations(id: u64, locations: &[LatLng]) -> Result<Self, LayerError> {
        Self::new(id, locations.iter().copied().map(Marker::new).collect())
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Replace all markers. The layer is left untouched on error.
    /// Returns whether the markers differed from the current ones.
    pub fn set_markers(&mut self, markers: Vec<Marker>) -> Result<bool, LayerError> {
        if markers == self.markers {
            return Ok(false);
        }
        self.bounds = Self::compute_bounds(&markers, &self.config)?;
        self.markers = markers;
        Ok(true)
    }

    pub fn push(&mut self, marker: Marker) -> Result<bool, LayerError> {
        let mut markers = self.markers.clone();
        markers.push(marker);
        self.set_markers(markers)
    }

    fn compute_bounds(
        markers: &[Marker],
        config: &BoundsConfig,
    ) -> Result<GeoBounds, LayerError> {
        if markers.is_empty() {
            return Err(LayerError::TooFewLocations {
                kind: LayerKind::Markers,
                min: 1,
                got: 0,
            });
        }
        let locations: Vec<LatLng> = markers.iter().map(|m| m.location).collect();
        validate_locations(&locations)?;
        estimate_bounds(&locations, config)
    }
}

impl Layer for MarkerLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Markers
    }

    fn has_bounds(&self) -> bool {
        true
    }

    fn data_bounds(&self) -> Option<GeoBounds> {
        Some(self.bounds)
    }

    fn configure(&mut self, config: &BoundsConfig) -> Result<(), LayerError> {
        self.bounds = Self::compute_bounds(&self.markers, config)?;
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
