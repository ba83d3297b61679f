//! Common utilities module
//!
//! Shared error type used by every stage of the sorting pipeline.

pub mod error;

pub use error::{SortError, Result};
