use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::image_pipeline::common::error::{Result, SortError};
use crate::image_pipeline::io::writer::ImageWriter;

/// Writes images to disk with the `image` crate encoders.
pub struct StandardImageWriter;

impl ImageWriter for StandardImageWriter {
    fn write_image(&self, image: &RgbaImage, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path).map_err(|e| {
            SortError::EncodeError(format!("{}: {}", path.display(), e))
        })?;

        debug!(
            "Encoding {:?} image: {}x{}",
            format,
            image.width(),
            image.height()
        );

        // JPEG has no alpha channel
        let image = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(image.clone()).to_rgb8()),
            _ => DynamicImage::ImageRgba8(image.clone()),
        };

        let mut buffer = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buffer), format)
            .map_err(|e| SortError::EncodeError(format!("{}: {}", path.display(), e)))?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                SortError::OutputWriteError(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, &buffer).map_err(|e| {
            SortError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;

        debug!("Wrote {} bytes to {}", buffer.len(), path.display());
        Ok(())
    }
}
