//! Domain Services
//!
//! Business logic that needs a port but belongs to no single entity.

mod id_generator;

pub use id_generator::BookIdGenerator;
