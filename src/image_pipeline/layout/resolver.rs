use tracing::debug;

use crate::image_pipeline::common::error::{Result, SortError};
use crate::image_pipeline::layout::types::{div_ceil, GridLayout, LayoutHints};

/// Resolves the grid for `num_images` inputs.
///
/// Rows and columns, in priority order:
/// 1. both hinted: used as given, even if the grid is too small or too large
/// 2. only rows: `columns = ceil(n / rows)`
/// 3. only columns: `rows = ceil(n / columns)`
/// 4. neither: a square of side `ceil(sqrt(n))`
///
/// The cell size is the hint when present, otherwise the smallest width or
/// height across `dimensions`, so every image covers a full cell.
pub fn resolve(num_images: usize, hints: LayoutHints, dimensions: &[(u32, u32)]) -> Result<GridLayout> {
    if num_images == 0 {
        return Err(SortError::InvalidLayout("no images to lay out".to_string()));
    }
    if hints.rows == Some(0) || hints.columns == Some(0) {
        return Err(SortError::InvalidLayout(
            "row and column counts must be positive".to_string(),
        ));
    }

    let (rows, columns) = match (hints.rows, hints.columns) {
        (Some(rows), Some(columns)) => (rows, columns),
        (Some(rows), None) => (rows, div_ceil(num_images, rows)?),
        (None, Some(columns)) => (div_ceil(num_images, columns)?, columns),
        (None, None) => {
            let side = square_side(num_images)?;
            (side, side)
        }
    };

    let cell_size = match hints.cell_size {
        Some(0) => {
            return Err(SortError::InvalidLayout("cell size must be positive".to_string()));
        }
        Some(size) => size,
        None => dimensions
            .iter()
            .map(|&(width, height)| width.min(height))
            .min()
            .filter(|&size| size > 0)
            .ok_or_else(|| {
                SortError::InvalidLayout("cannot infer a cell size from the input images".to_string())
            })?,
    };

    debug!(rows, columns, cell_size, "Resolved grid layout");
    Ok(GridLayout { rows, columns, cell_size })
}

/// Smallest `side` with `side * side >= n`.
fn square_side(n: usize) -> Result<u32> {
    let mut side = (n as f64).sqrt().ceil() as usize;
    // float sqrt can be off by one for very large n
    while side * side < n {
        side += 1;
    }
    while side > 1 && (side - 1) * (side - 1) >= n {
        side -= 1;
    }
    u32::try_from(side).map_err(|_| SortError::InvalidLayout(format!("{n} images")))
}
