use std::any::Any;

use foundation::bounds::GeoBounds;

use crate::layer::{Layer, LayerId, LayerKind};

/// Service-provided overlays drawn over the whole map.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverlayKind {
    Traffic,
    Transit,
    Bicycling,
}

/// Tile overlay with no data of its own; never contributes to the viewport.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TileOverlayLayer {
    id: LayerId,
    overlay: OverlayKind,
}

impl TileOverlayLayer {
    pub fn new(id: u64, overlay: OverlayKind) -> Self {
        Self {
            id: LayerId(id),
            overlay,
        }
    }

    pub fn overlay(&self) -> OverlayKind {
        self.overlay
    }
}

impl Layer for TileOverlayLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn kind(&self) -> LayerKind {
        match self.overlay {
            OverlayKind::Traffic => LayerKind::Traffic,
            OverlayKind::Transit => LayerKind::Transit,
            OverlayKind::Bicycling => LayerKind::Bicycling,
        }
    }

    fn has_bounds(&self) -> bool {
        false
    }

    fn data_bounds(&self) -> Option<GeoBounds> {
        None
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
