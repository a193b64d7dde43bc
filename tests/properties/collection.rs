//! Property tests for the book collection.

use chrono::{Duration, Utc};
use proptest::prelude::*;

use librarian::infrastructure::{InMemoryBookRepository, InMemoryEventDispatcher, SystemClock};
use librarian::{
    Book, BookCollection, BookError, BookEvent, BookId, BookIdGenerator, BookState, Borrower,
};

use crate::common::*;

fn book_strategy() -> impl Strategy<Value = Book> {
    let title = proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 :,'.-]{0,40}").unwrap();
    let isbn = proptest::string::string_regex("[0-9-]{0,17}").unwrap();
    (title, isbn).prop_map(|(title, isbn)| Book::new(title, isbn).unwrap())
}

fn borrower_strategy() -> impl Strategy<Value = Borrower> {
    proptest::string::string_regex("[A-Za-z][A-Za-z .'-]{0,24}")
        .unwrap()
        .prop_map(|name| Borrower::new(name).unwrap())
}

/// One step of a random workload against a small pool of books
#[derive(Debug, Clone)]
enum Op {
    Add(Book),
    Borrow(usize, Borrower),
    Return(usize),
    BorrowUnknown(Borrower),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        book_strategy().prop_map(Op::Add),
        (0usize..8, borrower_strategy()).prop_map(|(i, b)| Op::Borrow(i, b)),
        (0usize..8).prop_map(Op::Return),
        borrower_strategy().prop_map(Op::BorrowUnknown),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `add_book(b)` yields an `Available` record holding `b`.
    #[test]
    fn property_added_books_start_available(book in book_strategy()) {
        let repository = InMemoryBookRepository::new();
        let collection = BookCollection::new(
            BookIdGenerator::new(&repository),
            &repository,
            CountingDispatcher::default(),
            SystemClock,
        );

        let record = collection.add_book(book.clone()).unwrap();
        prop_assert_eq!(record.book(), &book);
        prop_assert_eq!(record.state(), &BookState::Available);
        prop_assert_eq!(collection.get_book(record.id()).unwrap(), record);
    }

    /// PROPERTY: Borrowing an available book stamps the borrower and the current time.
    #[test]
    fn property_borrow_stamps_borrower_and_now(
        book in book_strategy(),
        borrower in borrower_strategy(),
    ) {
        let repository = InMemoryBookRepository::new();
        let collection = BookCollection::new(
            BookIdGenerator::new(&repository),
            &repository,
            CountingDispatcher::default(),
            SystemClock,
        );
        let id = collection.add_book(book).unwrap().id();

        let before = Utc::now();
        let record = collection.borrow_book(id, borrower.clone()).unwrap();
        let after = Utc::now();

        match record.state() {
            BookState::Borrowed { by, on } => {
                prop_assert_eq!(by, &borrower);
                prop_assert!(*on >= before - Duration::seconds(1));
                prop_assert!(*on <= after + Duration::seconds(1));
            }
            BookState::Available => prop_assert!(false, "book should be borrowed"),
        }
    }

    /// PROPERTY: A lent book refuses every borrower and keeps its state.
    #[test]
    fn property_borrowed_books_refuse_everyone(
        book in book_strategy(),
        first in borrower_strategy(),
        second in borrower_strategy(),
    ) {
        let repository = InMemoryBookRepository::new();
        let collection = BookCollection::new(
            BookIdGenerator::new(&repository),
            &repository,
            CountingDispatcher::default(),
            SystemClock,
        );
        let id = collection.add_book(book).unwrap().id();
        let lent = collection.borrow_book(id, first).unwrap();

        let err = collection.borrow_book(id, second).unwrap_err();
        prop_assert!(
            matches!(err, BookError::AlreadyBorrowed { .. }),
            "expected AlreadyBorrowed, got {:?}",
            err
        );
        prop_assert_eq!(collection.get_book(id).unwrap(), lent);
    }

    /// PROPERTY: Ids that were never issued are `NotFound` for reads and borrows.
    #[test]
    fn property_unknown_ids_are_not_found(raw in any::<u128>(), borrower in borrower_strategy()) {
        let repository = InMemoryBookRepository::new();
        let collection = BookCollection::new(
            BookIdGenerator::new(&repository),
            &repository,
            CountingDispatcher::default(),
            SystemClock,
        );
        let id = BookId::from(uuid::Uuid::from_u128(raw));

        prop_assert!(collection.get_book(id).unwrap_err().is_not_found());
        prop_assert!(collection.borrow_book(id, borrower).unwrap_err().is_not_found());
    }

    /// PROPERTY: Each successful mutation dispatches exactly one event carrying
    /// the returned record; each failed one dispatches nothing.
    #[test]
    fn property_events_pair_with_successful_calls(
        ops in proptest::collection::vec(op_strategy(), 1..40)
    ) {
        let repository = InMemoryBookRepository::new();
        let events = InMemoryEventDispatcher::new();
        let collection = BookCollection::new(
            BookIdGenerator::new(&repository),
            &repository,
            &events,
            SystemClock,
        );
        let mut ids: Vec<BookId> = Vec::new();

        for op in ops {
            let before = events.len();
            let result = match op {
                Op::Add(book) => collection.add_book(book),
                Op::Borrow(i, borrower) if !ids.is_empty() => {
                    collection.borrow_book(ids[i % ids.len()], borrower)
                }
                Op::Return(i) if !ids.is_empty() => collection.return_book(ids[i % ids.len()]),
                Op::Borrow(_, borrower) | Op::BorrowUnknown(borrower) => {
                    collection.borrow_book(BookId::random(), borrower)
                }
                Op::Return(_) => collection.return_book(BookId::random()),
            };

            match result {
                Ok(record) => {
                    prop_assert_eq!(events.len(), before + 1);
                    let last = events.events().pop().unwrap();
                    prop_assert_eq!(last.book_record(), &record);
                    if matches!(last, BookEvent::BookAdded { .. }) {
                        ids.push(record.id());
                    }
                }
                Err(_) => prop_assert_eq!(events.len(), before),
            }
        }
    }
}
