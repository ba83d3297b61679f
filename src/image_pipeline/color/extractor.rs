use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb};
use tracing::trace;

use crate::image_pipeline::color::types::ColorInfo;

/// Applies the optional greyscale pre-step.
///
/// Both color extraction and normalization see the converted image, so the
/// caller should run this once and keep the result.
pub fn prepare_source(image: DynamicImage, greyscale: bool) -> DynamicImage {
    if greyscale {
        DynamicImage::ImageRgb8(image.grayscale().to_rgb8())
    } else {
        image
    }
}

/// Computes the representative color of an image.
///
/// The image is resized to a single pixel with an averaging filter and that
/// pixel's channels feed [`ColorInfo::from_rgb`]. Alpha is ignored.
pub fn extract_color(image: &DynamicImage) -> ColorInfo {
    let rgb = image.to_rgb8();
    let pixel = imageops::resize(&rgb, 1, 1, FilterType::Triangle);
    let [r, g, b] = pixel.get_pixel(0, 0).0;
    trace!(r, g, b, "Averaged color");
    ColorInfo::from_rgb(Rgb([r, g, b]))
}
