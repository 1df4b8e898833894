//! Carousel event model and listener storage
//!
//! Carousels report two interpreted events: a discrete [`SlideChange`] fired
//! once per committed index change, and a continuous [`SlidePositionChange`]
//! fired whenever the sampled track offset moves relative to the neutral
//! position. Every other kind is a raw passthrough the carousel never
//! interprets; the facade forwards those registrations straight to the host
//! surface.
//!
//! [`SlideChange`]: CarouselEvent::SlideChange
//! [`SlidePositionChange`]: CarouselEvent::SlidePositionChange

use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// The kinds of event a listener can subscribe to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The active slide index committed to a new value
    SlideChange,
    /// The track offset relative to the neutral position changed
    SlidePositionChange,
    /// Host-defined event forwarded verbatim to the surface
    Raw(String),
}

impl EventKind {
    /// Whether the carousel itself interprets this kind
    pub fn is_interpreted(&self) -> bool {
        !matches!(self, EventKind::Raw(_))
    }
}

/// Payload delivered to listeners
#[derive(Clone, Debug, PartialEq)]
pub enum CarouselEvent {
    /// A slide change committed; carries the new active index
    SlideChange { index: usize },
    /// The sampled offset relative to the neutral position moved
    SlidePositionChange { offset: f32 },
    /// Host-native event delivered through the raw passthrough; `detail`
    /// is whatever the host attached, uninterpreted
    Raw { name: String, detail: String },
}

impl CarouselEvent {
    /// The kind this payload belongs to
    pub fn kind(&self) -> EventKind {
        match self {
            CarouselEvent::SlideChange { .. } => EventKind::SlideChange,
            CarouselEvent::SlidePositionChange { .. } => EventKind::SlidePositionChange,
            CarouselEvent::Raw { name, .. } => EventKind::Raw(name.clone()),
        }
    }
}

/// Callback for carousel events
///
/// Uses Rc since the carousel is single-threaded.
pub type EventCallback = Rc<dyn Fn(&CarouselEvent)>;

/// Per-kind ordered listener storage
///
/// Listeners for a kind run in registration order. Raw kinds never land
/// here; the carousel facade forwards them to the surface at registration
/// time.
#[derive(Default, Clone)]
pub struct EventListeners {
    /// Listeners keyed by event kind
    listeners: FxHashMap<EventKind, SmallVec<[EventCallback; 2]>>,
}

impl EventListeners {
    /// Create a new empty listener storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Check if a listener is registered for a specific kind
    pub fn has_listener(&self, kind: &EventKind) -> bool {
        self.listeners
            .get(kind)
            .is_some_and(|list| !list.is_empty())
    }

    /// Number of listeners registered for a kind
    pub fn count(&self, kind: &EventKind) -> usize {
        self.listeners.get(kind).map_or(0, |list| list.len())
    }

    /// Register a listener for an event kind
    pub fn on<F>(&mut self, kind: EventKind, listener: F)
    where
        F: Fn(&CarouselEvent) + 'static,
    {
        self.listeners
            .entry(kind)
            .or_default()
            .push(Rc::new(listener));
    }

    /// Dispatch an event to every listener of its kind, in registration order
    pub fn dispatch(&self, event: &CarouselEvent) {
        if let Some(list) = self.listeners.get(&event.kind()) {
            for listener in list {
                listener(event);
            }
        }
    }
}
