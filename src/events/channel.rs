//! Single-handler event dispatch.
//!
//! Each `EventKind` owns one slot. Registering on a slot replaces whatever
//! was there; there is no multicast. Delivery is synchronous and happens
//! inside the engine call that produced the event.

use crate::error::Result;

use super::event::{EventKind, GameEvent};

/// A registered event handler.
pub type EventHandler = Box<dyn FnMut(&GameEvent)>;

/// Handler slots, one per event kind.
#[derive(Default)]
pub struct EventChannel {
    handlers: [Option<EventHandler>; EventKind::COUNT],
}

impl EventChannel {
    /// Create a channel with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler by channel name.
    ///
    /// Fails with `InvalidChannel` for names outside the five known ones;
    /// the existing handlers are untouched in that case.
    pub fn on(&mut self, name: &str, handler: impl FnMut(&GameEvent) + 'static) -> Result<()> {
        let kind = name.parse::<EventKind>()?;
        self.subscribe(kind, handler);
        Ok(())
    }

    /// Register a handler for a kind, replacing any previous one.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        if self.handlers[kind.index()].is_some() {
            tracing::trace!(channel = %kind, "replacing event handler");
        }
        self.handlers[kind.index()] = Some(Box::new(handler));
    }

    /// Remove the handler for a kind. Returns whether one was registered.
    pub fn off(&mut self, kind: EventKind) -> bool {
        self.handlers[kind.index()].take().is_some()
    }

    /// Check if a kind has a handler.
    #[must_use]
    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.handlers[kind.index()].is_some()
    }

    /// Deliver an event to its channel's handler, if any.
    pub fn emit(&mut self, event: &GameEvent) {
        if let Some(handler) = self.handlers[event.kind().index()].as_mut() {
            handler(event);
        }
    }
}

impl std::fmt::Debug for EventChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registered: Vec<_> = EventKind::ALL
            .into_iter()
            .filter(|k| self.has_handler(*k))
            .map(EventKind::name)
            .collect();
        f.debug_struct("EventChannel")
            .field("registered", &registered)
            .finish()
    }
}
