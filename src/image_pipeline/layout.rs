//! Grid dimension resolution
//!
//! Turns the user's optional row/column/cell-size hints and the input image
//! dimensions into a fixed [`GridLayout`].

mod resolver;
pub mod types;

pub use resolver::resolve;
pub use types::{GridLayout, LayoutHints, OverflowPolicy, TraversalOrder};
