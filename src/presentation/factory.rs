//! Collection Factory
//!
//! Builds a `BookCollection` from a `Config`.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use tracing::debug;

use crate::application::BookCollection;
use crate::config::{Config, EventSink, StoreBackend};
use crate::domain::ports::{BookRepository, EventDispatcher, NoopEventDispatcher};
use crate::domain::services::BookIdGenerator;
use crate::infrastructure::{
    InMemoryBookRepository, JsonEventDispatcher, SystemClock, TomlBookRepository,
    TracingEventDispatcher,
};

/// Repository handle shared by the collection and its id generator
pub type SharedRepository = Arc<dyn BookRepository + Send + Sync>;

/// Dispatcher chosen at runtime
pub type BoxedDispatcher = Box<dyn EventDispatcher + Send + Sync>;

/// The collection type the binary works with
pub type ConfiguredCollection =
    BookCollection<BookIdGenerator<SharedRepository>, SharedRepository, BoxedDispatcher, SystemClock>;

/// Create the repository selected by `config.store`
pub fn create_repository(config: &Config) -> SharedRepository {
    match config.store.backend {
        StoreBackend::Memory => Arc::new(InMemoryBookRepository::new()),
        StoreBackend::Toml => Arc::new(TomlBookRepository::with_path(config.store_path())),
    }
}

/// Create the dispatcher for an event sink
pub fn create_dispatcher(sink: EventSink) -> BoxedDispatcher {
    match sink {
        EventSink::None => Box::new(NoopEventDispatcher),
        EventSink::Log => Box::new(TracingEventDispatcher::new()),
        EventSink::Json => Box::new(JsonEventDispatcher::stdout()),
    }
}

/// Create a collection with all dependencies wired up from `config`
pub fn create_collection(config: &Config) -> ConfiguredCollection {
    debug!(
        backend = ?config.store.backend,
        sink = ?config.events.sink,
        max_attempts = ?config.ids.max_attempts,
        "wiring book collection"
    );
    create_collection_with(
        create_repository(config),
        create_dispatcher(config.events.sink),
        config.ids.max_attempts,
    )
}

/// Create a collection around an existing repository and dispatcher
///
/// The id generator checks candidates against the same repository.
pub fn create_collection_with(
    repository: SharedRepository,
    dispatcher: BoxedDispatcher,
    max_attempts: Option<u32>,
) -> ConfiguredCollection {
    let id_generator =
        BookIdGenerator::new(Arc::clone(&repository)).with_max_attempts(max_attempts);
    BookCollection::new(id_generator, repository, dispatcher, SystemClock)
}
