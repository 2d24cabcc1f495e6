use foundation::ids::LayerId;

/// Structural changes that invalidate a map's viewport bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportEvent {
    LayerAdded(LayerId),
    LayerRemoved(LayerId),
    /// The layer's point data changed and its own bounds were recomputed.
    LayerDataChanged(LayerId),
}

impl ViewportEvent {
    pub fn layer(&self) -> LayerId {
        match *self {
            ViewportEvent::LayerAdded(id)
            | ViewportEvent::LayerRemoved(id)
            | ViewportEvent::LayerDataChanged(id) => id,
        }
    }
}

/// A recorded event stamped with the bus revision at which it was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub revision: u64,
    pub kind: ViewportEvent,
}

/// Explicit change-notification queue.
///
/// Producers `emit`; the owner of the derived state `drain`s and recomputes
/// once per batch. Revisions increase monotonically for the bus lifetime.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
    revision: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            revision: 0,
        }
    }

    pub fn emit(&mut self, kind: ViewportEvent) -> u64 {
        self.revision += 1;
        self.events.push(Event {
            revision: self.revision,
            kind,
        });
        self.revision
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
