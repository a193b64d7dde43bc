//! Book Event Port
//!
//! Domain events describe a completed transition. They are handed to an
//! `EventDispatcher` only after the record has been persisted.

use std::sync::Arc;

use crate::domain::entities::BookRecord;
use crate::domain::value_objects::{BookId, Borrower, EventId};

/// Event emitted after a successful collection operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEvent {
    /// A new record was created
    BookAdded { id: EventId, book_record: BookRecord },

    /// A record was lent out
    BookBorrowed {
        id: EventId,
        book_record: BookRecord,
        borrower: Borrower,
    },

    /// A lent record came back
    BookReturned { id: EventId, book_record: BookRecord },
}

impl BookEvent {
    /// Id of the event itself
    pub fn id(&self) -> EventId {
        match self {
            BookEvent::BookAdded { id, .. }
            | BookEvent::BookBorrowed { id, .. }
            | BookEvent::BookReturned { id, .. } => *id,
        }
    }

    /// The record as it was after the transition
    pub fn book_record(&self) -> &BookRecord {
        match self {
            BookEvent::BookAdded { book_record, .. }
            | BookEvent::BookBorrowed { book_record, .. }
            | BookEvent::BookReturned { book_record, .. } => book_record,
        }
    }

    /// Id of the book the event is about
    pub fn book_id(&self) -> BookId {
        self.book_record().id()
    }

    /// Stable snake_case name, matching the serialized tag
    pub fn name(&self) -> &'static str {
        match self {
            BookEvent::BookAdded { .. } => "book_added",
            BookEvent::BookBorrowed { .. } => "book_borrowed",
            BookEvent::BookReturned { .. } => "book_returned",
        }
    }
}

/// Sink for book events
///
/// Dispatch is fire-and-forget: implementations swallow their own failures,
/// since the state change they report has already been stored.
pub trait EventDispatcher {
    fn dispatch(&self, event: BookEvent);
}

impl<D: EventDispatcher + ?Sized> EventDispatcher for &D {
    fn dispatch(&self, event: BookEvent) {
        (**self).dispatch(event)
    }
}

impl<D: EventDispatcher + ?Sized> EventDispatcher for Arc<D> {
    fn dispatch(&self, event: BookEvent) {
        (**self).dispatch(event)
    }
}

impl<D: EventDispatcher + ?Sized> EventDispatcher for Box<D> {
    fn dispatch(&self, event: BookEvent) {
        (**self).dispatch(event)
    }
}

/// Dispatcher that drops every event
pub struct NoopEventDispatcher;

impl EventDispatcher for NoopEventDispatcher {
    fn dispatch(&self, _event: BookEvent) {
        // Do nothing
    }
}
