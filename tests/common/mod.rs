//! Common test utilities for Librarian scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with temp directories for running the binary
//! - Port doubles: failing repository, counting dispatcher, deterministic ids
//! - Fixtures: Reusable books and borrowers

#![allow(dead_code, unused_imports)]

pub mod env;
pub mod fixtures;

pub use doubles::*;
pub use env::*;
pub use fixtures::*;
