//! Book value object - the descriptive data of a title in the collection

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};

/// Immutable book data
///
/// Has no identity of its own; a `BookRecord` gives it one.
/// The ISBN is carried as-is, its format is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BookData")]
pub struct Book {
    title: String,
    isbn: String,
}

impl Book {
    /// Create a book, rejecting blank titles
    pub fn new(title: impl Into<String>, isbn: impl Into<String>) -> BookResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookError::InvalidBook {
                reason: "title must not be empty".to_string(),
            });
        }
        Ok(Self {
            title,
            isbn: isbn.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

/// Unchecked wire form of a `Book`
#[derive(Deserialize)]
struct BookData {
    title: String,
    isbn: String,
}

impl TryFrom<BookData> for Book {
    type Error = BookError;

    fn try_from(data: BookData) -> Result<Self, Self::Error> {
        Book::new(data.title, data.isbn)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" (ISBN {})", self.title, self.isbn)
    }
}
