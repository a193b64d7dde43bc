//! Book ID generator
//!
//! Draws random candidates and asks the repository whether they are taken,
//! retrying until a free one turns up.

use std::fmt;

use tracing::debug;

use crate::domain::ports::{BookRepository, IdGenerator};
use crate::domain::value_objects::BookId;
use crate::error::{BookError, BookResult};

type CandidateSource = Box<dyn Fn() -> BookId + Send + Sync>;

/// Collision-checking id generator backed by a repository
///
/// Unbounded by default. A cap turns endless collisions into
/// `BookError::GenerationExhausted`.
pub struct BookIdGenerator<R>
where
    R: BookRepository,
{
    repository: R,
    max_attempts: Option<u32>,
    candidates: CandidateSource,
}

impl<R> BookIdGenerator<R>
where
    R: BookRepository,
{
    /// Create a generator drawing random UUIDs
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            max_attempts: None,
            candidates: Box::new(BookId::random),
        }
    }

    /// Give up after `max_attempts` taken candidates (at least one attempt is always made)
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts.map(|n| n.max(1));
        self
    }

    /// Replace the candidate source (deterministic ids in tests)
    pub fn with_candidates<F>(mut self, candidates: F) -> Self
    where
        F: Fn() -> BookId + Send + Sync + 'static,
    {
        self.candidates = Box::new(candidates);
        self
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }
}

impl<R> IdGenerator for BookIdGenerator<R>
where
    R: BookRepository,
{
    fn generate(&self) -> BookResult<BookId> {
        let mut attempt: u32 = 0;
        loop {
            attempt = attempt.saturating_add(1);
            let candidate = (self.candidates)();
            if !self.repository.exists(&candidate)? {
                debug!(book_id = %candidate, attempt, "generated book id");
                return Ok(candidate);
            }

            debug!(book_id = %candidate, attempt, "book id already taken, retrying");
            if let Some(max) = self.max_attempts {
                if attempt >= max {
                    return Err(BookError::GenerationExhausted { attempts: attempt });
                }
            }
        }
    }
}

impl<R> fmt::Debug for BookIdGenerator<R>
where
    R: BookRepository,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookIdGenerator")
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}
