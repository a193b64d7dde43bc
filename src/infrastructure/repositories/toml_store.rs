//! TOML Book Repository
//!
//! Persists all book records in a single TOML file
//! (default `<data dir>/librarian/books.toml`).
//!
//! Every operation re-reads the file; writes hold an exclusive lock on a
//! sibling `.lock` file for the whole read-modify-write.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::BookRecord;
use crate::domain::ports::BookRepository;
use crate::domain::value_objects::{Book, BookId, BookState, Borrower};
use crate::error::{RepositoryError, RepositoryResult};

/// Current on-disk format version
pub const STORE_VERSION: u32 = 1;

/// TOML representation of one record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlBookEntry {
    title: String,
    isbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    borrowed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    borrowed_on: Option<DateTime<Utc>>,
}

/// TOML representation of the whole store
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlStore {
    version: u32,
    #[serde(default)]
    books: BTreeMap<BookId, TomlBookEntry>,
}

/// File-backed repository
#[derive(Debug, Clone)]
pub struct TomlBookRepository {
    path: PathBuf,
}

impl TomlBookRepository {
    /// Repository at the default location
    pub fn new() -> Self {
        Self {
            path: default_store_path(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> RepositoryResult<BTreeMap<BookId, BookRecord>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        decode_store(&content).map_err(|message| RepositoryError::Parse {
            file: self.path.clone(),
            message,
        })
    }

    fn save_to_disk(&self, records: &BTreeMap<BookId, BookRecord>) -> RepositoryResult<()> {
        let content = encode_store(records.values())?;
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        // Write beside the target, then rename over it
        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), records = records.len(), "saved book store");
        Ok(())
    }

    fn with_lock<T>(&self, f: impl FnOnce() -> RepositoryResult<T>) -> RepositoryResult<T> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let lock_file = fs::File::create(&lock_path)?;
        lock_file.lock_exclusive()?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }
}

impl Default for TomlBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for TomlBookRepository {
    fn exists(&self, id: &BookId) -> RepositoryResult<bool> {
        Ok(self.load_from_disk()?.contains_key(id))
    }

    fn find(&self, id: &BookId) -> RepositoryResult<Option<BookRecord>> {
        Ok(self.load_from_disk()?.remove(id))
    }

    fn upsert(&self, record: BookRecord) -> RepositoryResult<BookRecord> {
        self.with_lock(|| {
            let mut records = self.load_from_disk()?;
            records.insert(record.id(), record.clone());
            self.save_to_disk(&records)?;
            Ok(record)
        })
    }

    fn find_all(&self) -> RepositoryResult<Vec<BookRecord>> {
        Ok(self.load_from_disk()?.into_values().collect())
    }
}

/// `<data dir>/librarian/books.toml`, or `./books.toml` without a data dir
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("librarian/books.toml"))
        .unwrap_or_else(|| PathBuf::from("books.toml"))
}

/// Parse a store document into records keyed by id
///
/// Public so the fuzz targets can reach it; the error is a plain message.
pub fn decode_store(content: &str) -> Result<BTreeMap<BookId, BookRecord>, String> {
    let store: TomlStore = toml::from_str(content).map_err(|e| e.to_string())?;
    if store.version != STORE_VERSION {
        return Err(format!(
            "unsupported store version {} (expected {})",
            store.version, STORE_VERSION
        ));
    }

    let mut records = BTreeMap::new();
    for (id, entry) in store.books {
        let record = from_entry(id, entry)?;
        records.insert(id, record);
    }
    Ok(records)
}

fn encode_store<'a>(records: impl Iterator<Item = &'a BookRecord>) -> RepositoryResult<String> {
    let store = TomlStore {
        version: STORE_VERSION,
        books: records.map(|r| (r.id(), to_entry(r))).collect(),
    };
    toml::to_string_pretty(&store).map_err(|e| RepositoryError::Serialize(e.to_string()))
}

fn from_entry(id: BookId, entry: TomlBookEntry) -> Result<BookRecord, String> {
    let book = Book::new(entry.title, entry.isbn).map_err(|e| format!("book {id}: {e}"))?;
    let state = match (entry.borrowed_by, entry.borrowed_on) {
        (None, None) => BookState::Available,
        (Some(by), Some(on)) => BookState::Borrowed {
            by: Borrower::new(by).map_err(|e| format!("book {id}: {e}"))?,
            on,
        },
        _ => {
            return Err(format!(
                "book {id}: borrowed_by and borrowed_on must be set together"
            ))
        }
    };
    Ok(BookRecord::with_state(id, book, state))
}

fn to_entry(record: &BookRecord) -> TomlBookEntry {
    let (borrowed_by, borrowed_on) = match record.state() {
        BookState::Available => (None, None),
        BookState::Borrowed { by, on } => (Some(by.to_string()), Some(*on)),
    };
    TomlBookEntry {
        title: record.book().title().to_string(),
        isbn: record.book().isbn().to_string(),
        borrowed_by,
        borrowed_on,
    }
}
