//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `BookRecord` - A book with its id and lending state

mod book_record;

pub use book_record::BookRecord;
