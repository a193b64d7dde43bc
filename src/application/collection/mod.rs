//! Book Collection
//!
//! The aggregate exposing add / get / borrow / return.

mod use_case;


pub use use_case::BookCollection;
