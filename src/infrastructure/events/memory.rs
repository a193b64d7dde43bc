//! In-Memory Event Dispatcher
//!
//! Keeps every dispatched event so callers can inspect them afterwards.

use std::sync::Mutex;

use crate::domain::ports::{BookEvent, EventDispatcher};

/// Event dispatcher that collects events in order
#[derive(Debug, Default)]
pub struct InMemoryEventDispatcher {
    events: Mutex<Vec<BookEvent>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything dispatched so far
    pub fn events(&self) -> Vec<BookEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return everything dispatched so far
    pub fn drain(&self) -> Vec<BookEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn dispatch(&self, event: BookEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
