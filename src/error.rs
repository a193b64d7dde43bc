//! Error types for Librarian
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::BookId;

/// Result type alias for book collection operations
pub type BookResult<T> = Result<T, BookError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Main error type for book collection operations
#[derive(Error, Debug)]
pub enum BookError {
    /// No record is stored under the given id
    #[error("the book with ID: {id} does not exist")]
    NotFound { id: BookId },

    /// The book is not available, so it cannot be borrowed
    #[error("the book with ID: {id} is already borrowed")]
    AlreadyBorrowed { id: BookId },

    /// The book is already available, so it cannot be returned
    #[error("the book with ID: {id} was already returned")]
    AlreadyReturned { id: BookId },

    /// Book data failed validation
    #[error("invalid book: {reason}")]
    InvalidBook { reason: String },

    /// Borrower name failed validation
    #[error("invalid borrower: borrower name must not be empty")]
    InvalidBorrower,

    /// Text could not be parsed as a book id
    #[error("invalid book ID '{input}'")]
    InvalidBookId { input: String },

    /// The id generator hit its configured attempt limit
    #[error("no free book ID found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    /// Failure raised by the record store, passed through untouched
    #[error(transparent)]
    Persistence(#[from] RepositoryError),
}

impl BookError {
    /// Returns true if this error means the record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookError::NotFound { .. })
    }
}

/// Errors raised by record store implementations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// IO error
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be decoded
    #[error("failed to parse store {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Records could not be encoded for storage
    #[error("failed to serialize store: {0}")]
    Serialize(String),

    /// The store refused the operation
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML or wrong value types
    #[error("invalid configuration in {file}: {message}")]
    Parse { file: PathBuf, message: String },
}
