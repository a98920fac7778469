//! Outward event delivery.
//!
//! Components never dispatch into ambient global state; they write to an
//! [`EventSink`] handed in by reference. [`EventBus`] is the production sink:
//! it stamps each event into an [`Envelope`] and fans it out to subscribers.
//! [`RecordingSink`] is the test double.

use crate::events::OutboundEvent;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Where outward events go.
pub trait EventSink {
    /// Deliver one event.
    fn emit(&mut self, event: OutboundEvent);
}

/// A published event with delivery metadata, as seen by subscribers.
#[derive(Clone, Debug, Serialize)]
pub struct Envelope {
    /// Unique id for this delivery.
    pub id: Uuid,
    /// When the event was published.
    pub at: DateTime<Utc>,
    /// The event itself.
    pub event: OutboundEvent,
}

impl Envelope {
    /// Serialize the envelope for an analytics consumer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

type Subscriber = Box<dyn FnMut(&Envelope) + Send>;

/// Fan-out event bus. Subscribers run in registration order, synchronously,
/// on the emitting thread.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber for every subsequently published event.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&Envelope) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }
}

impl EventSink for EventBus {
    fn emit(&mut self, event: OutboundEvent) {
        let envelope = Envelope {
            id: Uuid::new_v4(),
            at: Utc::now(),
            event,
        };
        for subscriber in &mut self.subscribers {
            subscriber(&envelope);
        }
    }
}

/// Sink that just remembers what was emitted. Used by tests and demos.
#[derive(Default)]
pub struct RecordingSink {
    /// Every emitted event, in order.
    pub events: Vec<OutboundEvent>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently emitted event, if any.
    pub fn last(&self) -> Option<&OutboundEvent> {
        self.events.last()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: OutboundEvent) {
        self.events.push(event);
    }
}
