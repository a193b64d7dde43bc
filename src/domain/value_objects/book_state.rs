//! Book state value object - lending status of a book record
//!
//! - `Available` - on the shelf, can be borrowed
//! - `Borrowed` - lent to someone since a point in time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Borrower;

/// Lending state of a book record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BookState {
    /// Book can be borrowed
    #[default]
    Available,
    /// Book is lent out
    Borrowed {
        /// Who borrowed it
        by: Borrower,
        /// When it was borrowed
        on: DateTime<Utc>,
    },
}

impl BookState {
    /// Returns true if the book can be borrowed
    pub fn is_available(&self) -> bool {
        matches!(self, BookState::Available)
    }

    /// Returns true if the book is lent out
    pub fn is_borrowed(&self) -> bool {
        matches!(self, BookState::Borrowed { .. })
    }

    /// The current borrower, if any
    pub fn borrower(&self) -> Option<&Borrower> {
        match self {
            BookState::Available => None,
            BookState::Borrowed { by, .. } => Some(by),
        }
    }
}

impl std::fmt::Display for BookState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookState::Available => write!(f, "available"),
            BookState::Borrowed { by, on } => {
                write!(f, "borrowed by {} on {}", by, on.format("%Y-%m-%d %H:%M UTC"))
            }
        }
    }
}
