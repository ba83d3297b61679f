//! Image input and output
//!
//! The pipeline only talks to these traits, so tests can swap the
//! filesystem for in-memory sources and writers.

mod source;
mod directory_source;
mod writer;
mod standard_writer;

pub use source::{ImageSource, SUPPORTED_EXTENSIONS};
pub use directory_source::{decode_image, DirectorySource};
pub use writer::ImageWriter;
pub use standard_writer::StandardImageWriter;
