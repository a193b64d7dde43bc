//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain lending rules (those live on `BookRecord`)
//! - Coordinates id generation, persistence and event dispatch
//!
//! ## Use Cases
//!
//! - `BookCollection` - add, get, borrow and return books

pub mod collection;

pub use collection::BookCollection;
