//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod book_repository;
pub mod clock;
pub mod event_dispatcher;
pub mod id_generator;

pub use book_repository::BookRepository;
pub use clock::Clock;
pub use event_dispatcher::{BookEvent, EventDispatcher, NoopEventDispatcher};
pub use id_generator::IdGenerator;
