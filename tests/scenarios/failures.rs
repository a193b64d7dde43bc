//! Scenario: Things go wrong
//!
//! Unknown ids, a store that stops accepting writes, and an id space that
//! is exhausted. None of these may emit an event.

use librarian::infrastructure::SystemClock;
use librarian::{BookCollection, BookError, BookId, BookIdGenerator, RepositoryError};

use crate::common::*;

#[test]
fn scenario_unknown_id_is_not_found() {
    let repository = FlakyRepository::new();
    let dispatcher = CountingDispatcher::default();
    let collection = BookCollection::new(
        BookIdGenerator::new(&repository),
        &repository,
        &dispatcher,
        SystemClock,
    );
    let missing = BookId::random();

    assert!(collection.get_book(missing).unwrap_err().is_not_found());
    assert!(collection.borrow_book(missing, bob()).unwrap_err().is_not_found());
    assert!(collection.return_book(missing).unwrap_err().is_not_found());
    assert_eq!(dispatcher.calls(), 0);
}

#[test]
fn scenario_store_failure_passes_through_without_events() {
    let repository = FlakyRepository::new();
    let dispatcher = CountingDispatcher::default();
    let collection = BookCollection::new(
        BookIdGenerator::new(&repository),
        &repository,
        &dispatcher,
        SystemClock,
    );
    let id = collection.add_book(martian()).unwrap().id();
    assert_eq!(dispatcher.calls(), 1);

    repository.fail_writes(true);

    let err = collection.add_book(dune()).unwrap_err();
    assert!(matches!(err, BookError::Persistence(RepositoryError::Unavailable(ref msg)) if msg == "disk full"));

    let err = collection.borrow_book(id, bob()).unwrap_err();
    assert!(matches!(err, BookError::Persistence(_)));
    assert!(collection.get_book(id).unwrap().state().is_available());
    assert_eq!(dispatcher.calls(), 1);

    // The store recovers and the same borrow now goes through
    repository.fail_writes(false);
    assert!(collection.borrow_book(id, bob()).is_ok());
    assert_eq!(dispatcher.calls(), 2);
}

#[test]
fn scenario_capped_generator_gives_up_on_a_full_id_space() {
    let repository = FlakyRepository::new();
    let dispatcher = CountingDispatcher::default();
    let collection = BookCollection::new(
        BookIdGenerator::new(&repository)
            .with_candidates(constant_id(42))
            .with_max_attempts(Some(3)),
        &repository,
        &dispatcher,
        SystemClock,
    );

    collection.add_book(martian()).unwrap();
    let err = collection.add_book(dune()).unwrap_err();

    assert!(matches!(err, BookError::GenerationExhausted { attempts: 3 }));
    assert_eq!(collection.get_all_books().unwrap().len(), 1);
    assert_eq!(dispatcher.calls(), 1);
}
