//! BookRecord entity - a book with identity and lending state
//!
//! `id` and `book` are fixed at creation. Transitions produce a new record
//! with a replaced `state`; I/O is the repository's business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Book, BookId, BookState, Borrower};
use crate::error::{BookError, BookResult};

/// Persisted book entity; identity is `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    id: BookId,
    book: Book,
    #[serde(default)]
    state: BookState,
}

impl BookRecord {
    /// Create a new record in the `Available` state
    pub fn new(id: BookId, book: Book) -> Self {
        Self::with_state(id, book, BookState::Available)
    }

    /// Create a record in an arbitrary state (used when loading from storage)
    pub fn with_state(id: BookId, book: Book, state: BookState) -> Self {
        Self { id, book, state }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn state(&self) -> &BookState {
        &self.state
    }

    /// Lend the book out
    ///
    /// Only an `Available` record can be borrowed, whoever asks.
    pub fn borrow(self, by: Borrower, on: DateTime<Utc>) -> BookResult<Self> {
        match self.state {
            BookState::Available => Ok(Self {
                state: BookState::Borrowed { by, on },
                ..self
            }),
            BookState::Borrowed { .. } => Err(BookError::AlreadyBorrowed { id: self.id }),
        }
    }

    /// Take the book back, making it `Available` again
    pub fn return_book(self) -> BookResult<Self> {
        match self.state {
            BookState::Borrowed { .. } => Ok(Self {
                state: BookState::Available,
                ..self
            }),
            BookState::Available => Err(BookError::AlreadyReturned { id: self.id }),
        }
    }
}
