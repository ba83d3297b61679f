use std::path::Path;

use image::RgbaImage;

use crate::image_pipeline::common::error::Result;

pub trait ImageWriter {
    /// Encodes `image` to `path`; the format follows the file extension.
    fn write_image(&self, image: &RgbaImage, path: &Path) -> Result<()>;
}
