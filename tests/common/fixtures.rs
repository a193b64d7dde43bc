//! Reusable test content.

use librarian::{Book, Borrower};

pub const MARTIAN_TITLE: &str = "The Martian";
pub const MARTIAN_ISBN: &str = "978-0553418026";

pub fn martian() -> Book {
    Book::new(MARTIAN_TITLE, MARTIAN_ISBN).unwrap()
}

pub fn dune() -> Book {
    Book::new("Dune", "978-0441013593").unwrap()
}

pub fn bob() -> Borrower {
    Borrower::new("Bob").unwrap()
}

pub fn amy() -> Borrower {
    Borrower::new("Amy").unwrap()
}
