//! IdGenerator port - source of fresh book record ids

use crate::domain::value_objects::BookId;
use crate::error::BookResult;

/// Produces ids that are not yet used by any stored record
pub trait IdGenerator {
    fn generate(&self) -> BookResult<BookId>;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn generate(&self) -> BookResult<BookId> {
        (**self).generate()
    }
}
