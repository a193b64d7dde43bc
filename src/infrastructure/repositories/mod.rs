//! Repository Implementations
//!
//! Concrete implementations of the BookRepository port.

mod memory;
mod toml_store;

pub use memory::InMemoryBookRepository;
pub use toml_store::{decode_store, default_store_path, TomlBookRepository, STORE_VERSION};
