//! Filesystem-backed image source.
//!
//! Scans a single directory (not recursively) for `.jpg` and `.png` files
//! and decodes them with the `image` crate.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::debug;

use crate::image_pipeline::common::error::{Result, SortError};
use crate::image_pipeline::io::source::{has_supported_extension, ImageSource};
use crate::image_pipeline::sort::FilenameCollator;

pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ImageSource for DirectorySource {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn list_images(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            SortError::InputReadError(format!("{}: {}", self.dir.display(), e))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && has_supported_extension(&path) {
                paths.push(path);
            }
        }

        // read_dir order is platform dependent
        let collator = FilenameCollator::new()?;
        paths.sort_by(|a, b| collator.compare(&file_name(a), &file_name(b)));

        debug!("Found {} images in {}", paths.len(), self.dir.display());
        Ok(paths)
    }

    fn load_image(&self, path: &Path) -> Result<DynamicImage> {
        let bytes = std::fs::read(path).map_err(|e| {
            SortError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        decode_image(&bytes, &path.display().to_string())
    }
}

/// Decodes an in-memory JPEG or PNG, rejecting empty images.
///
/// `name` identifies the input in the error message.
pub fn decode_image(bytes: &[u8], name: &str) -> Result<DynamicImage> {
    debug!("Decoding {}, {} bytes", name, bytes.len());
    let image = image::load_from_memory(bytes)
        .map_err(|e| SortError::DecodeError(format!("{}: {}", name, e)))?;
    if image.width() == 0 || image.height() == 0 {
        return Err(SortError::InvalidDimensions(image.width(), image.height()));
    }
    Ok(image)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
