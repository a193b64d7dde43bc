//! Tracing Event Dispatcher
//!
//! Reports each event as an `info` record on the `librarian::events` target.

use tracing::info;

use crate::domain::ports::{BookEvent, EventDispatcher};

/// Event dispatcher that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventDispatcher;

impl TracingEventDispatcher {
    pub fn new() -> Self {
        Self
    }
}

impl EventDispatcher for TracingEventDispatcher {
    fn dispatch(&self, event: BookEvent) {
        let record = event.book_record();
        match &event {
            BookEvent::BookAdded { id, .. } => info!(
                target: "librarian::events",
                event_id = %id,
                book_id = %record.id(),
                title = record.book().title(),
                "book added"
            ),
            BookEvent::BookBorrowed { id, borrower, .. } => info!(
                target: "librarian::events",
                event_id = %id,
                book_id = %record.id(),
                borrower = borrower.as_str(),
                "book borrowed"
            ),
            BookEvent::BookReturned { id, .. } => info!(
                target: "librarian::events",
                event_id = %id,
                book_id = %record.id(),
                "book returned"
            ),
        }
    }
}
