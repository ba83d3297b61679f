use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("No .jpg or .png images found in {0}")]
    NoInputImages(String),

    #[error("Failed to read input: {0}")]
    InputReadError(String),

    #[error("Failed to decode image {0}")]
    DecodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Invalid grid layout: {0}")]
    InvalidLayout(String),

    #[error("{images} images do not fit into a grid of {capacity} cells")]
    GridOverflow { images: usize, capacity: usize },

    #[error("Failed to set up filename collation: {0}")]
    CollationError(String),

    #[error("No color information for {0}")]
    MissingColorInfo(String),

    #[error("Failed to encode output image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;
