use compute::BoundsConfig;
use foundation::bounds::{DEFAULT_BOUNDS, GeoBounds, LatLng};
use runtime::event_bus::{EventBus, ViewportEvent};
use serde::Serialize;
use tracing::debug;

use crate::error::LayerError;
use crate::layer::{Layer, LayerId};
use crate::viewport::ViewportBoundsAggregator;

pub const MAX_ZOOM: u8 = 21;

/// How the map frames itself when first shown.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InitialViewport {
    /// Fit the map to `data_bounds`.
    #[default]
    DataBounds,
    ZoomCenter { zoom_level: u8, center: LatLng },
}

impl InitialViewport {
    pub fn zoom_center(zoom_level: u8, center: LatLng) -> Result<Self, LayerError> {
        if zoom_level > MAX_ZOOM {
            return Err(LayerError::InvalidZoom(zoom_level));
        }
        Ok(InitialViewport::ZoomCenter { zoom_level, center })
    }
}

/// What the map exposes to its renderer.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct MapState {
    pub data_bounds: GeoBounds,
    pub initial_viewport: InitialViewport,
}

/// Ordered layer stack plus the viewport bounds derived from it.
///
/// Structural changes are queued on an event bus; `process_events` applies
/// them in one recomputation. `data_bounds` is stale until then.
#[derive(Debug)]
pub struct Map {
    layers: Vec<Box<dyn Layer>>,
    data_bounds: GeoBounds,
    initial_viewport: InitialViewport,
    config: BoundsConfig,
    bus: EventBus,
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Map {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            data_bounds: DEFAULT_BOUNDS,
            initial_viewport: InitialViewport::default(),
            config: BoundsConfig::default(),
            bus: EventBus::new(),
        }
    }

    pub fn with_config(config: BoundsConfig) -> Result<Self, LayerError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn with_initial_viewport(mut self, viewport: InitialViewport) -> Self {
        self.initial_viewport = viewport;
        self
    }

    pub fn config(&self) -> &BoundsConfig {
        &self.config
    }

    pub fn data_bounds(&self) -> GeoBounds {
        self.data_bounds
    }

    pub fn initial_viewport(&self) -> InitialViewport {
        self.initial_viewport
    }

    pub fn state(&self) -> MapState {
        MapState {
            data_bounds: self.data_bounds,
            initial_viewport: self.initial_viewport,
        }
    }

    pub fn layers(&self) -> impl Iterator<Item = &dyn Layer> {
        self.layers.iter().map(|l| &**l)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.bus.is_empty()
    }

    pub fn layer(&self, id: LayerId) -> Option<&dyn Layer> {
        self.layers.iter().find(|l| l.id() == id).map(|l| &**l)
    }

    /// Typed view of a layer; `None` when absent or of another type.
    pub fn layer_as<L: Layer>(&self, id: LayerId) -> Option<&L> {
        self.layer(id)?.as_any().downcast_ref::<L>()
    }

    /// Append a layer on top of the stack. Its bounds are re-estimated with
    /// this map's configuration.
    pub fn add_layer<L: Layer>(&mut self, mut layer: L) -> Result<LayerId, LayerError> {
        let id = layer.id();
        if self.layer(id).is_some() {
            return Err(LayerError::DuplicateLayer(id));
        }
        layer.configure(&self.config)?;
        self.layers.push(Box::new(layer));
        self.bus.emit(ViewportEvent::LayerAdded(id));
        Ok(id)
    }

    pub fn remove_layer(&mut self, id: LayerId) -> Result<Box<dyn Layer>, LayerError> {
        let index = self
            .layers
            .iter()
            .position(|l| l.id() == id)
            .ok_or(LayerError::UnknownLayer(id))?;
        let layer = self.layers.remove(index);
        self.bus.emit(ViewportEvent::LayerRemoved(id));
        Ok(layer)
    }

    /// Mutate a layer's data through its concrete type.
    ///
    /// `update` reports whether the data changed, as the layer setters do. A
    /// data-change event is queued only when it succeeds and reports a change.
    pub fn update_layer<L, F>(&mut self, id: LayerId, update: F) -> Result<bool, LayerError>
    where
        L: Layer,
        F: FnOnce(&mut L) -> Result<bool, LayerError>,
    {
        let layer = self
            .layers
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or(LayerError::UnknownLayer(id))?;
        let actual = layer.kind();
        let typed = layer
            .as_any_mut()
            .downcast_mut::<L>()
            .ok_or(LayerError::KindMismatch { id, actual })?;
        let changed = update(typed)?;
        if changed {
            self.bus.emit(ViewportEvent::LayerDataChanged(id));
        }
        Ok(changed)
    }

    /// Drain queued changes and recompute once. Returns whether anything was
    /// pending.
    pub fn process_events(&mut self) -> bool {
        let events = self.bus.drain();
        if events.is_empty() {
            return false;
        }
        let layers: Vec<LayerId> = events.iter().map(|e| e.kind.layer()).collect();
        debug!(
            ?layers,
            revision = self.bus.revision(),
            "layer changes pending, recomputing viewport bounds"
        );
        self.recompute();
        true
    }

    /// Recompute `data_bounds` from the current layers.
    ///
    /// With no bounded layer the previous bounds are kept.
    pub fn recompute(&mut self) {
        match ViewportBoundsAggregator::aggregate_layers(self.layers()) {
            Some(bounds) => {
                debug!(?bounds, "viewport bounds updated");
                self.data_bounds = bounds;
            }
            None => debug!("no bounded layers, keeping previous viewport bounds"),
        }
    }
}
