//! Wheel event payloads and listener dispatch
//!
//! The engine is thread-confined: handlers run synchronously on the thread
//! that drives the pointer callbacks and frame ticks, so handler closures
//! carry no `Send`/`Sync` bounds.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    // Input events fed into the lifecycle state machine
    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Release velocity exceeded the fling threshold
    pub const FLING_START: EventType = 10;
    /// Motion judged finished; the snap glide begins
    pub const SETTLE_START: EventType = 11;
    /// The snap glide reached zero offset
    pub const SETTLED: EventType = 12;

    // Notification events observable by the drawing collaborator
    pub const SCROLLING_STARTED: EventType = 20;
    pub const SCROLLED: EventType = 21;
    pub const ITEM_CHANGED: EventType = 22;
    pub const SCROLLING_FINISHED: EventType = 23;

    // Host signals
    pub const DATA_CHANGED: EventType = 30;
    pub const ITEMS_REBUILT: EventType = 31;
}

/// A notification emitted by the wheel engine
#[derive(Clone, Debug, PartialEq)]
pub enum WheelEvent {
    /// A gesture began; fired at most once per gesture
    ScrollingStarted,
    /// The scrolling offset moved by `delta` axis units
    Scrolled { delta: f32 },
    /// The centered item index changed
    ItemChanged { from: Option<usize>, to: usize },
    /// Motion ended and the wheel settled on `selected`; fired at most
    /// once per gesture
    ScrollingFinished { selected: usize },
}

impl WheelEvent {
    /// The event type constant this payload dispatches under
    pub fn event_type(&self) -> EventType {
        match self {
            WheelEvent::ScrollingStarted => event_types::SCROLLING_STARTED,
            WheelEvent::Scrolled { .. } => event_types::SCROLLED,
            WheelEvent::ItemChanged { .. } => event_types::ITEM_CHANGED,
            WheelEvent::ScrollingFinished { .. } => event_types::SCROLLING_FINISHED,
        }
    }
}

new_key_type! {
    /// Stable handle for a registered listener
    pub struct ListenerId;
}

type Handler = Box<dyn FnMut(&WheelEvent)>;

/// Registry of wheel-event listeners keyed by event type
pub struct WheelEventDispatcher {
    handlers: SlotMap<ListenerId, Handler>,
    by_type: FxHashMap<EventType, Vec<ListenerId>>,
}

impl WheelEventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            by_type: FxHashMap::default(),
        }
    }

    /// Register a handler for one event type
    pub fn subscribe<F>(&mut self, event_type: EventType, handler: F) -> ListenerId
    where
        F: FnMut(&WheelEvent) + 'static,
    {
        let id = self.handlers.insert(Box::new(handler));
        self.by_type.entry(event_type).or_default().push(id);
        id
    }

    /// Remove a handler; unknown ids are ignored
    pub fn unsubscribe(&mut self, id: ListenerId) {
        if self.handlers.remove(id).is_some() {
            for ids in self.by_type.values_mut() {
                ids.retain(|&other| other != id);
            }
        }
    }

    /// Dispatch an event to all handlers registered for its type
    pub fn emit(&mut self, event: &WheelEvent) {
        tracing::trace!(?event, "emit");
        let Some(ids) = self.by_type.get(&event.event_type()) else {
            return;
        };
        // Ids are snapshotted so a handler may unsubscribe itself later
        // without invalidating this dispatch pass.
        let ids = ids.clone();
        for id in ids {
            if let Some(handler) = self.handlers.get_mut(id) {
                handler(event);
            }
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for WheelEventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
