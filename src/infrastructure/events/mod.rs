//! Event Dispatcher Implementations
//!
//! Provides concrete implementations of EventDispatcher:
//! - JsonEventDispatcher: NDJSON output for scripts/automation
//! - TracingEventDispatcher: events as log records
//! - InMemoryEventDispatcher: events kept for inspection

mod json;
mod memory;
mod trace;

pub use json::{record_json, JsonEventDispatcher};
pub use memory::InMemoryEventDispatcher;
pub use trace::TracingEventDispatcher;
