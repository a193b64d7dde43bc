//! Scenario: Lending The Martian
//!
//! Journey: A librarian adds a book, lends it to Bob, turns Amy away,
//! then takes the book back and lends it to Amy.

use chrono::{Duration, Utc};

use librarian::infrastructure::{
    FixedClock, InMemoryBookRepository, InMemoryEventDispatcher, SystemClock,
};
use librarian::{BookCollection, BookError, BookEvent, BookIdGenerator, BookState};

use crate::common::*;

#[test]
fn scenario_martian_is_lent_once() {
    let repository = InMemoryBookRepository::new();
    let events = InMemoryEventDispatcher::new();
    let collection = BookCollection::new(
        BookIdGenerator::new(&repository),
        &repository,
        &events,
        SystemClock,
    );

    // Step 1: add the book
    let added = collection.add_book(martian()).unwrap();
    assert_eq!(added.book(), &martian());
    assert_eq!(added.state(), &BookState::Available);

    // Step 2: Bob borrows it
    let before = Utc::now();
    let borrowed = collection.borrow_book(added.id(), bob()).unwrap();
    let after = Utc::now();
    assert_eq!(borrowed.id(), added.id());
    assert_eq!(borrowed.book(), added.book());
    match borrowed.state() {
        BookState::Borrowed { by, on } => {
            assert_eq!(by, &bob());
            assert!(*on >= before - Duration::seconds(1) && *on <= after + Duration::seconds(1));
        }
        other => panic!("expected Borrowed, got {other:?}"),
    }

    // Step 3: Amy is turned away, the record is untouched
    let err = collection.borrow_book(added.id(), amy()).unwrap_err();
    assert!(matches!(err, BookError::AlreadyBorrowed { id } if id == added.id()));
    assert_eq!(collection.get_book(added.id()).unwrap(), borrowed);

    // Exactly one event per successful call, carrying the returned record
    let dispatched = events.events();
    assert_eq!(dispatched.len(), 2);
    assert!(matches!(&dispatched[0], BookEvent::BookAdded { book_record, .. } if *book_record == added));
    assert!(matches!(
        &dispatched[1],
        BookEvent::BookBorrowed { book_record, borrower, .. } if *book_record == borrowed && *borrower == bob()
    ));
}

#[test]
fn scenario_returned_book_can_be_lent_again() {
    let repository = InMemoryBookRepository::new();
    let events = InMemoryEventDispatcher::new();
    let clock = FixedClock::parse("2017-09-23T12:34:56Z").unwrap();
    let collection =
        BookCollection::new(BookIdGenerator::new(&repository), &repository, &events, &clock);

    let id = collection.add_book(martian()).unwrap().id();
    collection.borrow_book(id, bob()).unwrap();

    let returned = collection.return_book(id).unwrap();
    assert!(returned.state().is_available());

    let err = collection.return_book(id).unwrap_err();
    assert!(matches!(err, BookError::AlreadyReturned { .. }));

    let lent_to_amy = collection.borrow_book(id, amy()).unwrap();
    assert_eq!(lent_to_amy.state().borrower(), Some(&amy()));

    let names: Vec<_> = events.events().iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec!["book_added", "book_borrowed", "book_returned", "book_borrowed"]
    );
}

#[test]
fn scenario_listing_is_ordered_by_id() {
    let repository = InMemoryBookRepository::new();
    let collection = BookCollection::new(
        BookIdGenerator::new(&repository).with_candidates(sequential_ids()),
        &repository,
        CountingDispatcher::default(),
        SystemClock,
    );

    let first = collection.add_book(dune()).unwrap();
    let second = collection.add_book(martian()).unwrap();
    collection.borrow_book(second.id(), bob()).unwrap();

    let all = collection.get_all_books().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id(), first.id());
    assert_eq!(all[1].id(), second.id());
    assert!(all[1].state().is_borrowed());
    assert_eq!(collection.dispatcher().calls(), 3);
}
