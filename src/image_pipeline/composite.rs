//! Grid compositing
//!
//! Copies normalized cells into a single canvas in traversal order.

use image::{imageops, RgbaImage};
use tracing::debug;

use crate::image_pipeline::common::error::{Result, SortError};
use crate::image_pipeline::layout::{GridLayout, TraversalOrder};

/// Builds the output canvas from `cells`, already in sorted order.
///
/// The canvas starts fully transparent. Cell `i` is copied without blending
/// to the origin of the `i`th cell of the traversal. Iteration stops at the
/// grid capacity, so cells beyond it are never drawn and unused cells stay
/// transparent.
pub fn composite(cells: &[RgbaImage], layout: &GridLayout, order: TraversalOrder) -> Result<RgbaImage> {
    let (width, height) = layout.canvas_size()?;
    let mut canvas = allocate_canvas(width, height)?;

    let placed = cells.len().min(layout.capacity());
    for (index, cell) in cells.iter().take(placed).enumerate() {
        if cell.dimensions() != (layout.cell_size, layout.cell_size) {
            let (w, h) = cell.dimensions();
            return Err(SortError::InvalidDimensions(w, h));
        }
        let (row, column) = layout.cell_position(index, order);
        let x = i64::from(column) * i64::from(layout.cell_size);
        let y = i64::from(row) * i64::from(layout.cell_size);
        imageops::replace(&mut canvas, cell, x, y);
    }

    debug!(placed, width, height, "Composited grid");
    Ok(canvas)
}

/// Transparent canvas, reporting allocation failure instead of aborting.
fn allocate_canvas(width: u32, height: u32) -> Result<RgbaImage> {
    // canvas_size already bounded the length by isize::MAX
    let len = width as usize * height as usize * 4;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|e| {
        SortError::EncodeError(format!("cannot allocate {width}x{height} canvas: {e}"))
    })?;
    buffer.resize(len, 0u8);
    RgbaImage::from_raw(width, height, buffer)
        .ok_or_else(|| SortError::EncodeError(format!("invalid {width}x{height} canvas buffer")))
}
