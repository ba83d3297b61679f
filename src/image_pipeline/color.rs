//! Representative color extraction
//!
//! Reduces an image to a single average color and derives the scalar
//! attributes (hue, saturation, lightness, luma) the sorter works with.

mod extractor;
pub mod types;

pub use extractor::{extract_color, prepare_source};
pub use types::ColorInfo;
