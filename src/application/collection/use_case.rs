//! Book Collection Use Case
//!
//! The aggregate root: every add, borrow and return goes through here.
//! Each mutating operation runs lookup, transition, persist, dispatch in
//! that order. Dispatch is the last step, so any error before it means no
//! event goes out.

use tracing::{debug, info};

use crate::domain::entities::BookRecord;
use crate::domain::ports::{BookEvent, BookRepository, Clock, EventDispatcher, IdGenerator};
use crate::domain::value_objects::{Book, BookId, Borrower, EventId};
use crate::error::{BookError, BookResult};

/// Book collection - creates records and moves them between lending states
///
/// Collaborators are injected; pass references (`&repo`) to share them with
/// other components such as the id generator.
pub struct BookCollection<G, R, D, C>
where
    G: IdGenerator,
    R: BookRepository,
    D: EventDispatcher,
    C: Clock,
{
    id_generator: G,
    repository: R,
    dispatcher: D,
    clock: C,
}

impl<G, R, D, C> BookCollection<G, R, D, C>
where
    G: IdGenerator,
    R: BookRepository,
    D: EventDispatcher,
    C: Clock,
{
    /// Create a new book collection
    pub fn new(id_generator: G, repository: R, dispatcher: D, clock: C) -> Self {
        Self {
            id_generator,
            repository,
            dispatcher,
            clock,
        }
    }

    /// Add a book under a fresh id, in the `Available` state
    ///
    /// Dispatches `BookAdded` once the record is stored.
    pub fn add_book(&self, book: Book) -> BookResult<BookRecord> {
        let id = self.id_generator.generate()?;
        let record = self.repository.upsert(BookRecord::new(id, book))?;

        info!(book_id = %record.id(), title = record.book().title(), "added book");
        self.dispatcher.dispatch(BookEvent::BookAdded {
            id: EventId::generate(),
            book_record: record.clone(),
        });

        Ok(record)
    }

    /// Look up a single record
    pub fn get_book(&self, id: BookId) -> BookResult<BookRecord> {
        self.repository
            .find(&id)?
            .ok_or(BookError::NotFound { id })
    }

    /// Every record in the collection, ordered by id
    pub fn get_all_books(&self) -> BookResult<Vec<BookRecord>> {
        Ok(self.repository.find_all()?)
    }

    /// Lend an `Available` book to `borrower`, stamped with the clock's now
    ///
    /// Rejects any book that is not `Available`, even when the same
    /// borrower asks again. Dispatches `BookBorrowed` once stored.
    pub fn borrow_book(&self, id: BookId, borrower: Borrower) -> BookResult<BookRecord> {
        let current = self.get_book(id)?;
        let borrowed = current.borrow(borrower.clone(), self.clock.now())?;
        let record = self.repository.upsert(borrowed)?;

        info!(book_id = %id, borrower = borrower.as_str(), "borrowed book");
        self.dispatcher.dispatch(BookEvent::BookBorrowed {
            id: EventId::generate(),
            book_record: record.clone(),
            borrower,
        });

        Ok(record)
    }

    /// Take a `Borrowed` book back, making it `Available`
    ///
    /// Dispatches `BookReturned` once stored.
    pub fn return_book(&self, id: BookId) -> BookResult<BookRecord> {
        let current = self.get_book(id)?;
        if let Some(borrower) = current.state().borrower() {
            debug!(book_id = %id, borrower = borrower.as_str(), "returning book");
        }
        let returned = current.return_book()?;
        let record = self.repository.upsert(returned)?;

        info!(book_id = %id, "returned book");
        self.dispatcher.dispatch(BookEvent::BookReturned {
            id: EventId::generate(),
            book_record: record.clone(),
        });

        Ok(record)
    }

    /// The injected repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The injected dispatcher
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }
}
