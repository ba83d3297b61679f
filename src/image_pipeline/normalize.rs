//! Fixed-size cell rendering
//!
//! Every input image becomes a `cell_size` square according to the active
//! [`VisualizationMode`].

use clap::ValueEnum;
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};

use crate::image_pipeline::color::ColorInfo;
use crate::image_pipeline::common::error::{Result, SortError};

/// Side length of the block grid used by [`VisualizationMode::Mosaic`].
pub const MOSAIC_BLOCKS: u32 = 4;

/// How each image is drawn into its grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VisualizationMode {
    /// Scale to cover the cell and crop the excess around the center
    #[default]
    Normal,
    /// 4x4 block averages enlarged without interpolation
    #[value(name = "4x4")]
    Mosaic,
    /// Flat swatch of the representative color
    Dominant,
}

impl VisualizationMode {
    /// Whether rendering needs the extracted [`ColorInfo`].
    pub fn needs_color(self) -> bool {
        matches!(self, Self::Dominant)
    }
}

/// Renders `image` into a `cell_size` x `cell_size` RGBA cell.
///
/// `color` is only read in dominant mode, where it is required.
pub fn normalize(
    image: &DynamicImage,
    color: Option<&ColorInfo>,
    mode: VisualizationMode,
    cell_size: u32,
) -> Result<RgbaImage> {
    if cell_size == 0 {
        return Err(SortError::InvalidLayout("cell size must be positive".to_string()));
    }

    match mode {
        VisualizationMode::Normal => Ok(cover(image, cell_size)),
        VisualizationMode::Mosaic => Ok(mosaic(image, cell_size)),
        VisualizationMode::Dominant => color
            .map(|color| swatch(color, cell_size))
            .ok_or_else(|| SortError::MissingColorInfo("dominant swatch".to_string())),
    }
}

fn cover(image: &DynamicImage, cell_size: u32) -> RgbaImage {
    image
        .resize_to_fill(cell_size, cell_size, FilterType::Lanczos3)
        .to_rgba8()
}

fn mosaic(image: &DynamicImage, cell_size: u32) -> RgbaImage {
    image
        .resize_exact(MOSAIC_BLOCKS, MOSAIC_BLOCKS, FilterType::Triangle)
        .resize_exact(cell_size, cell_size, FilterType::Nearest)
        .to_rgba8()
}

fn swatch(color: &ColorInfo, cell_size: u32) -> RgbaImage {
    let [r, g, b] = color.rgb.0;
    RgbaImage::from_pixel(cell_size, cell_size, Rgba([r, g, b, u8::MAX]))
}
