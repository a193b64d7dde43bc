//! Domain Layer
//!
//! This is the core of Librarian - the lending rules, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (BookRecord)
//! - `value_objects/` - Immutable value types (Book, BookId, BookState, Borrower)
//! - `services/` - Domain services (BookIdGenerator)
//! - `ports/` - Interface definitions for infrastructure, and the events sent through them
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Closed states** - Lending states and events are enums, matched exhaustively
//! 3. **Ports & Adapters** - Storage, ids, time and events go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
