//! In-Memory Book Repository
//!
//! Implements the BookRepository port with a map behind a mutex.
//! Nothing survives the process.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::BookRecord;
use crate::domain::ports::BookRepository;
use crate::domain::value_objects::BookId;
use crate::error::{RepositoryError, RepositoryResult};

/// Map-backed repository, ordered by id
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    records: Mutex<BTreeMap<BookId, BookRecord>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with records
    pub fn with_records(records: impl IntoIterator<Item = BookRecord>) -> Self {
        let records = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn records(&self) -> RepositoryResult<MutexGuard<'_, BTreeMap<BookId, BookRecord>>> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("in-memory store is poisoned".to_string()))
    }
}

impl BookRepository for InMemoryBookRepository {
    fn exists(&self, id: &BookId) -> RepositoryResult<bool> {
        Ok(self.records()?.contains_key(id))
    }

    fn find(&self, id: &BookId) -> RepositoryResult<Option<BookRecord>> {
        Ok(self.records()?.get(id).cloned())
    }

    fn upsert(&self, record: BookRecord) -> RepositoryResult<BookRecord> {
        self.records()?.insert(record.id(), record.clone());
        Ok(record)
    }

    fn find_all(&self) -> RepositoryResult<Vec<BookRecord>> {
        Ok(self.records()?.values().cloned().collect())
    }
}
