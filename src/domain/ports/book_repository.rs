//! BookRepository port - abstraction for book record persistence
//!
//! The collection stores and loads records only through this trait.
//! Infrastructure provides in-memory and file-backed implementations.

use std::sync::Arc;

use crate::domain::entities::BookRecord;
use crate::domain::value_objects::BookId;
use crate::error::RepositoryResult;

/// Keyed storage of book records
///
/// Each call is atomic on its own; nothing spans calls.
pub trait BookRepository {
    /// True iff a record with this id is stored
    fn exists(&self, id: &BookId) -> RepositoryResult<bool>;

    /// Current stored record, or `None` if absent
    fn find(&self, id: &BookId) -> RepositoryResult<Option<BookRecord>>;

    /// Store the record under its id, replacing any previous value
    ///
    /// Returns the stored record unchanged.
    fn upsert(&self, record: BookRecord) -> RepositoryResult<BookRecord>;

    /// All stored records, ordered by id
    fn find_all(&self) -> RepositoryResult<Vec<BookRecord>>;
}

impl<R: BookRepository + ?Sized> BookRepository for &R {
    fn exists(&self, id: &BookId) -> RepositoryResult<bool> {
        (**self).exists(id)
    }

    fn find(&self, id: &BookId) -> RepositoryResult<Option<BookRecord>> {
        (**self).find(id)
    }

    fn upsert(&self, record: BookRecord) -> RepositoryResult<BookRecord> {
        (**self).upsert(record)
    }

    fn find_all(&self) -> RepositoryResult<Vec<BookRecord>> {
        (**self).find_all()
    }
}

impl<R: BookRepository + ?Sized> BookRepository for Arc<R> {
    fn exists(&self, id: &BookId) -> RepositoryResult<bool> {
        (**self).exists(id)
    }

    fn find(&self, id: &BookId) -> RepositoryResult<Option<BookRecord>> {
        (**self).find(id)
    }

    fn upsert(&self, record: BookRecord) -> RepositoryResult<BookRecord> {
        (**self).upsert(record)
    }

    fn find_all(&self) -> RepositoryResult<Vec<BookRecord>> {
        (**self).find_all()
    }
}

impl<R: BookRepository + ?Sized> BookRepository for Box<R> {
    fn exists(&self, id: &BookId) -> RepositoryResult<bool> {
        (**self).exists(id)
    }

    fn find(&self, id: &BookId) -> RepositoryResult<Option<BookRecord>> {
        (**self).find(id)
    }

    fn upsert(&self, record: BookRecord) -> RepositoryResult<BookRecord> {
        (**self).upsert(record)
    }

    fn find_all(&self) -> RepositoryResult<Vec<BookRecord>> {
        (**self).find_all()
    }
}
