use std::any::Any;

use compute::BoundsConfig;
use foundation::bounds::{GeoBounds, LatLng};

use crate::error::LayerError;
use crate::layer::{Layer, LayerId, LayerKind};
use crate::locations::{extent_bounds, validate_locations};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TravelMode {
    Bicycling,
    #[default]
    Driving,
    Transit,
    Walking,
}

/// A route from the first to the last location, through any in between.
///
/// Routes are short compared with the globe, so the bounds are the plain
/// min/max box of the requested stops rather than a statistical estimate.
/// That box ignores the antimeridian: stops at 179 and -179 give a box
/// 358 degrees wide. An axis with no spread is widened to `2 * epsilon`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsLayer {
    id: LayerId,
    stops: Vec<LatLng>,
    pub travel_mode: TravelMode,
    pub avoid_ferries: bool,
    pub avoid_highways: bool,
    pub avoid_tolls: bool,
    config: BoundsConfig,
    bounds: GeoBounds,
}

impl DirectionsLayer {
    pub fn new(
        id: u64,
        start: LatLng,
        end: LatLng,
        waypoints: &[LatLng],
    ) -> Result<Self, LayerError> {
        let mut stops = Vec::with_capacity(waypoints.len() + 2);
        stops.push(start);
        stops.extend_from_slice(waypoints);
        stops.push(end);
        Self::from_stops(id, stops)
    }

    pub fn from_stops(id: u64, stops: Vec<LatLng>) -> Result<Self, LayerError> {
        let config = BoundsConfig::default();
        let bounds = Self::compute_bounds(&stops, &config)?;
        Ok(Self {
            id: LayerId(id),
            stops,
            travel_mode: TravelMode::default(),
            avoid_ferries: false,
            avoid_highways: false,
            avoid_tolls: false,
            config,
            bounds,
        })
    }

    pub fn with_travel_mode(mut self, mode: TravelMode) -> Self {
        self.travel_mode = mode;
        self
    }

    pub fn start(&self) -> LatLng {
        self.stops[0]
    }

    pub fn end(&self) -> LatLng {
        self.stops[self.stops.len() - 1]
    }

    pub fn stops(&self) -> &[LatLng] {
        &self.stops
    }

    pub fn waypoints(&self) -> &[LatLng] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Replace all stops. Returns whether they differed from the current ones.
    pub fn set_stops(&mut self, stops: Vec<LatLng>) -> Result<bool, LayerError> {
        if stops == self.stops {
            return Ok(false);
        }
        self.bounds = Self::compute_bounds(&stops, &self.config)?;
        self.stops = stops;
        Ok(true)
    }

    fn compute_bounds(stops: &[LatLng], config: &BoundsConfig) -> Result<GeoBounds, LayerError> {
        if stops.len() < 2 {
            return Err(LayerError::TooFewLocations {
                kind: LayerKind::Directions,
                min: 2,
                got: stops.len(),
            });
        }
        config.validate()?;
        validate_locations(stops)?;
        extent_bounds(stops, config.epsilon).ok_or(LayerError::TooFewLocations {
            kind: LayerKind::Directions,
            min: 2,
            got: 0,
        })
    }
}

impl Layer for DirectionsLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Directions
    }

    fn has_bounds(&self) -> bool {
        true
    }

    fn data_bounds(&self) -> Option<GeoBounds> {
        Some(self.bounds)
    }

    fn configure(&mut self, config: &BoundsConfig) -> Result<(), LayerError> {
        self.bounds = Self::compute_bounds(&self.stops, config)?;
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
