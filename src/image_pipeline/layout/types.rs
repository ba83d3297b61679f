//! Grid layout types

use clap::ValueEnum;
use tracing::warn;

use crate::image_pipeline::common::error::{Result, SortError};

/// Order in which sorted images fill the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TraversalOrder {
    /// Left to right, then top to bottom
    RowMajor,
    /// Top to bottom, then left to right
    #[default]
    ColumnMajor,
}

/// What to do when there are more images than grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OverflowPolicy {
    /// Drop the surplus images and log a warning
    #[default]
    Truncate,
    /// Abort the run before any output is written
    Fail,
    /// Add rows (row-major) or columns (column-major) until everything fits
    Grow,
}

/// Optional user-supplied layout hints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutHints {
    pub rows: Option<u32>,
    pub columns: Option<u32>,
    pub cell_size: Option<u32>,
}

/// Resolved grid geometry. Built once per run and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: u32,
    pub columns: u32,
    /// Side length of each square cell in pixels
    pub cell_size: u32,
}

impl GridLayout {
    pub fn capacity(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Canvas size in pixels as `(width, height)`.
    ///
    /// Fails when either side overflows `u32` or the RGBA buffer would not
    /// fit in memory addressable by this platform.
    pub fn canvas_size(&self) -> Result<(u32, u32)> {
        let too_large = || {
            SortError::EncodeError(format!(
                "canvas of {}x{} cells at {}px is too large",
                self.columns, self.rows, self.cell_size
            ))
        };

        let width = self.columns.checked_mul(self.cell_size).ok_or_else(too_large)?;
        let height = self.rows.checked_mul(self.cell_size).ok_or_else(too_large)?;
        let bytes = u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(too_large)?;
        if bytes > isize::MAX as u64 || usize::try_from(bytes).is_err() {
            return Err(too_large());
        }
        Ok((width, height))
    }

    /// Cell `(row, column)` visited at position `index` of the traversal.
    pub fn cell_position(&self, index: usize, order: TraversalOrder) -> (u32, u32) {
        let index = index as u32;
        match order {
            TraversalOrder::RowMajor => (index / self.columns, index % self.columns),
            TraversalOrder::ColumnMajor => (index % self.rows, index / self.rows),
        }
    }

    /// Applies `policy` to a grid that must hold `images` entries.
    ///
    /// Returns the layout to composite with. Under [`OverflowPolicy::Grow`]
    /// the dimension along the traversal's outer loop is extended and the
    /// other one is kept.
    pub fn fit(self, images: usize, order: TraversalOrder, policy: OverflowPolicy) -> Result<Self> {
        let capacity = self.capacity();
        if images <= capacity {
            return Ok(self);
        }

        match policy {
            OverflowPolicy::Truncate => {
                warn!(
                    images,
                    capacity,
                    dropped = images - capacity,
                    "Grid too small, surplus images are dropped"
                );
                Ok(self)
            }
            OverflowPolicy::Fail => Err(SortError::GridOverflow { images, capacity }),
            OverflowPolicy::Grow => {
                let grown = match order {
                    TraversalOrder::RowMajor => Self {
                        rows: div_ceil(images, self.columns)?,
                        ..self
                    },
                    TraversalOrder::ColumnMajor => Self {
                        columns: div_ceil(images, self.rows)?,
                        ..self
                    },
                };
                warn!(
                    from_rows = self.rows,
                    from_columns = self.columns,
                    rows = grown.rows,
                    columns = grown.columns,
                    "Grid grown to fit every image"
                );
                Ok(grown)
            }
        }
    }
}

/// `ceil(count / divisor)` as a grid dimension.
pub(crate) fn div_ceil(count: usize, divisor: u32) -> Result<u32> {
    let cells = count.div_ceil(divisor as usize);
    u32::try_from(cells).map_err(|_| SortError::InvalidLayout(format!("{cells} cells along one axis")))
}
