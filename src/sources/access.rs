//! In-memory badge-in stream.

use std::collections::VecDeque;

use chrono::Utc;

use super::types::ArrivalSource;
use crate::model::AccessEvent;

/// Pending arrival events in publish order.
///
/// # Examples
///
/// ```
/// use seat_alloc::sources::{AccessControlStream, ArrivalSource};
///
/// let mut stream = AccessControlStream::new();
/// stream.publish("E0001", "CARD-E0001");
/// stream.publish("E0002", "CARD-E0002");
///
/// let events = stream.drain();
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[0].employee_id, "E0001");
/// assert!(stream.drain().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccessControlStream {
    events: VecDeque<AccessEvent>,
}

impl AccessControlStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the stream with pre-built events.
    pub fn with_events(events: impl IntoIterator<Item = AccessEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Appends an event stamped with the current time.
    pub fn publish(&mut self, employee_id: impl Into<String>, card_id: impl Into<String>) {
        self.push(AccessEvent::new(employee_id, card_id, Utc::now()));
    }

    /// Appends a pre-built event.
    pub fn push(&mut self, event: AccessEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl ArrivalSource for AccessControlStream {
    fn drain(&mut self) -> Vec<AccessEvent> {
        self.events.drain(..).collect()
    }

    fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
