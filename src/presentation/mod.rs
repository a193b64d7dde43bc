//! Presentation Layer
//!
//! This layer handles:
//! - Wiring the collection to configured infrastructure
//! - Output formatting (text/JSON)
//!
//! Argument parsing lives in the binary.
//!
//! ## Usage
//!
//! ```ignore
//! use librarian::presentation::factory;
//!
//! let collection = factory::create_collection(&config);
//! let record = collection.add_book(book)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_collection, ConfiguredCollection};
pub use output::{render_record, render_records, OutputFormat};
