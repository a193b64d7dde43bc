//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod book;
mod book_id;
mod book_state;
mod borrower;

pub use book::Book;
pub use book_id::{BookId, EventId};
pub use book_state::BookState;
pub use borrower::Borrower;
