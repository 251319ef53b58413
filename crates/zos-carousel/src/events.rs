//! Slide-change notifications

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Event names a listener can subscribe to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarouselEventKind {
    SlideChange,
}

impl CarouselEventKind {
    /// DOM event type the host dispatches
    pub fn event_type(self) -> &'static str {
        match self {
            CarouselEventKind::SlideChange => "carouselslidechange",
        }
    }
}

/// Event payloads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CarouselEvent {
    /// The current slide changed (1-indexed, dummies normalized)
    #[serde(rename_all = "camelCase")]
    SlideChange { current_slide: i32 },
}

impl CarouselEvent {
    /// Kind of this event
    pub fn kind(&self) -> CarouselEventKind {
        match self {
            CarouselEvent::SlideChange { .. } => CarouselEventKind::SlideChange,
        }
    }
}

/// Handle returned by [`EventEmitter::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Listener = Box<dyn FnMut(&CarouselEvent)>;

/// Listener lists keyed by event kind
#[derive(Default)]
pub struct EventEmitter {
    next_id: u64,
    listeners: HashMap<CarouselEventKind, Vec<(SubscriptionId, Listener)>>,
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.len())
            .finish()
    }
}

impl EventEmitter {
    /// Create an emitter with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `kind`
    pub fn subscribe(&mut self, kind: CarouselEventKind, listener: impl FnMut(&CarouselEvent) + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns `false` if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in self.listeners.values_mut() {
            if let Some(pos) = list.iter().position(|(sid, _)| *sid == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Call every listener of the event's kind, in subscription order
    pub fn emit(&mut self, event: &CarouselEvent) {
        if let Some(list) = self.listeners.get_mut(&event.kind()) {
            for (_, listener) in list.iter_mut() {
                listener(event);
            }
        }
    }

    /// Total registered listeners
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_emit_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = EventEmitter::new();

        let sink = Rc::clone(&seen);
        let id = emitter.subscribe(CarouselEventKind::SlideChange, move |e| {
            if let CarouselEvent::SlideChange { current_slide } = e {
                sink.borrow_mut().push(*current_slide);
            }
        });

        emitter.emit(&CarouselEvent::SlideChange { current_slide: 2 });
        emitter.emit(&CarouselEvent::SlideChange { current_slide: 3 });
        assert_eq!(*seen.borrow(), vec![2, 3]);

        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(&CarouselEvent::SlideChange { current_slide: 4 });
        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut emitter = EventEmitter::new();
        let a = emitter.subscribe(CarouselEventKind::SlideChange, |_| {});
        let b = emitter.subscribe(CarouselEventKind::SlideChange, |_| {});
        assert_ne!(a, b);
        assert_eq!(emitter.len(), 2);
        emitter.clear();
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_event_json() {
        let json = serde_json::to_string(&CarouselEvent::SlideChange { current_slide: 5 }).unwrap();
        assert_eq!(json, r#"{"type":"slideChange","currentSlide":5}"#);
        assert_eq!(CarouselEventKind::SlideChange.event_type(), "carouselslidechange");
    }
}
