use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::image_pipeline::common::error::Result;

/// File extensions accepted as input, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["jpg", "png"];

pub trait ImageSource {
    /// Human-readable location, used in error messages.
    fn location(&self) -> String;

    /// Candidate images in a deterministic order.
    fn list_images(&self) -> Result<Vec<PathBuf>>;

    fn load_image(&self, path: &Path) -> Result<DynamicImage>;
}

pub(crate) fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
