//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - BookRepository implementations (in-memory, TOML file)
//! - `events/` - EventDispatcher implementations (NDJSON, tracing, in-memory)
//! - `clock` - Clock implementations (system, fixed)

pub mod clock;
pub mod events;
pub mod repositories;

// Re-export for convenience
pub use clock::{FixedClock, SystemClock};
pub use events::{InMemoryEventDispatcher, JsonEventDispatcher, TracingEventDispatcher};
pub use repositories::{InMemoryBookRepository, TomlBookRepository};
