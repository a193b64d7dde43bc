//! Borrower value object - the person a book is lent to

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};

/// Non-empty borrower name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Borrower(String);

impl Borrower {
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BookError::InvalidBorrower);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Borrower {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Borrower> for String {
    fn from(borrower: Borrower) -> Self {
        borrower.0
    }
}

impl AsRef<str> for Borrower {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Borrower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
