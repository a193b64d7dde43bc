//! Librarian - book-lending domain core
//!
//! A collection of book records that can be added, looked up, borrowed and
//! returned. Every state change is persisted through a [`BookRepository`]
//! and only then announced through an [`EventDispatcher`].
//!
//! ## Architecture
//!
//! - `domain` - value objects, the `BookRecord` entity, ports and services
//! - `application` - the `BookCollection` aggregate
//! - `infrastructure` - repositories, event sinks and clocks
//! - `presentation` - wiring from `Config` and output rendering
//!
//! ```
//! use librarian::{Book, BookCollection, BookIdGenerator, Borrower};
//! use librarian::infrastructure::{InMemoryBookRepository, InMemoryEventDispatcher, SystemClock};
//!
//! let repository = InMemoryBookRepository::new();
//! let events = InMemoryEventDispatcher::new();
//! let collection = BookCollection::new(
//!     BookIdGenerator::new(&repository),
//!     &repository,
//!     &events,
//!     SystemClock,
//! );
//!
//! let record = collection.add_book(Book::new("The Martian", "978-0553418026")?)?;
//! let record = collection.borrow_book(record.id(), Borrower::new("Bob")?)?;
//! assert!(record.state().is_borrowed());
//! assert_eq!(events.len(), 2);
//! # Ok::<(), librarian::BookError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::BookCollection;
pub use config::{Config, ConfigWarning, EventSink, StoreBackend};
pub use domain::entities::BookRecord;
pub use domain::ports::{BookEvent, BookRepository, Clock, EventDispatcher, IdGenerator};
pub use domain::services::BookIdGenerator;
pub use domain::value_objects::{Book, BookId, BookState, Borrower, EventId};
pub use error::{BookError, BookResult, ConfigError, RepositoryError, RepositoryResult};
