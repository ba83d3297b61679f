//! Pipeline configuration and record types

use std::path::PathBuf;

use image::{DynamicImage, RgbaImage};

use crate::image_pipeline::color::ColorInfo;
use crate::image_pipeline::layout::{GridLayout, LayoutHints, OverflowPolicy, TraversalOrder};
use crate::image_pipeline::normalize::VisualizationMode;
use crate::image_pipeline::sort::{SortParameter, Sortable};

/// Input directory used when none is given
pub const DEFAULT_INPUT_DIR: &str = "./images";

/// Folder receiving numbered files in [`OutputTarget::Files`] mode
pub const DEFAULT_FILES_DIR: &str = "sorted";

/// Output argument value selecting per-image files instead of a grid
const FILES_ARG: &str = "files";

/// Where the sorted result goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One composited grid image
    Grid(PathBuf),
    /// One numbered file per image inside `dir`
    Files { dir: PathBuf },
}

impl OutputTarget {
    /// Grid output named after the current local time.
    pub fn timestamped() -> Self {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        Self::Grid(PathBuf::from(format!("sorted-{stamp}.png")))
    }

    /// Interprets the output filename argument.
    ///
    /// `files` selects per-image output; no value yields a timestamped grid.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(FILES_ARG) => Self::Files { dir: PathBuf::from(DEFAULT_FILES_DIR) },
            Some(path) => Self::Grid(PathBuf::from(path)),
            None => Self::timestamped(),
        }
    }
}

/// Settings for one sorting run
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Directory scanned for input images
    pub input_dir: PathBuf,
    pub output: OutputTarget,
    pub sort_parameter: SortParameter,
    pub sort_order: TraversalOrder,
    pub mode: VisualizationMode,
    /// Convert inputs to greyscale before extraction and rendering
    pub greyscale: bool,
    pub hints: LayoutHints,
    pub overflow: OverflowPolicy,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: OutputTarget::timestamped(),
            sort_parameter: SortParameter::default(),
            sort_order: TraversalOrder::default(),
            mode: VisualizationMode::default(),
            greyscale: false,
            hints: LayoutHints::default(),
            overflow: OverflowPolicy::default(),
        }
    }
}

impl SortConfig {
    pub fn builder() -> SortConfigBuilder {
        SortConfigBuilder::default()
    }

    /// Whether any stage needs extracted color information.
    pub fn needs_color(&self) -> bool {
        self.sort_parameter.needs_color() || self.mode.needs_color()
    }
}

/// Builder for SortConfig
#[derive(Default)]
pub struct SortConfigBuilder {
    input_dir: Option<PathBuf>,
    output: Option<OutputTarget>,
    sort_parameter: Option<SortParameter>,
    sort_order: Option<TraversalOrder>,
    mode: Option<VisualizationMode>,
    greyscale: Option<bool>,
    rows: Option<u32>,
    columns: Option<u32>,
    cell_size: Option<u32>,
    overflow: Option<OverflowPolicy>,
}

impl SortConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    pub fn output(mut self, output: OutputTarget) -> Self {
        self.output = Some(output);
        self
    }

    pub fn sort_parameter(mut self, parameter: SortParameter) -> Self {
        self.sort_parameter = Some(parameter);
        self
    }

    pub fn sort_order(mut self, order: TraversalOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    pub fn mode(mut self, mode: VisualizationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn greyscale(mut self, enable: bool) -> Self {
        self.greyscale = Some(enable);
        self
    }

    pub fn rows(mut self, rows: Option<u32>) -> Self {
        self.rows = rows;
        self
    }

    pub fn columns(mut self, columns: Option<u32>) -> Self {
        self.columns = columns;
        self
    }

    pub fn cell_size(mut self, cell_size: Option<u32>) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = Some(policy);
        self
    }

    pub fn build(self) -> SortConfig {
        let input_dir = self.input_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
        let output = self.output.unwrap_or_else(OutputTarget::timestamped);
        SortConfig {
            input_dir,
            output,
            sort_parameter: self.sort_parameter.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            mode: self.mode.unwrap_or_default(),
            greyscale: self.greyscale.unwrap_or(false),
            hints: LayoutHints {
                rows: self.rows,
                columns: self.columns,
                cell_size: self.cell_size,
            },
            overflow: self.overflow.unwrap_or_default(),
        }
    }
}

/// One decoded input, before normalization
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub filename: String,
    /// Decoded pixels, after the optional greyscale step
    pub image: DynamicImage,
    /// Absent when no stage needs it
    pub color: Option<ColorInfo>,
}

/// Filename and color of a record, as reported after sorting
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEntry {
    pub filename: String,
    pub color: Option<ColorInfo>,
}

impl Sortable for RecordEntry {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn color(&self) -> Option<&ColorInfo> {
        self.color.as_ref()
    }
}

/// A record whose decoded image has been replaced by its grid cell
#[derive(Debug, Clone)]
pub(crate) struct NormalizedRecord {
    pub entry: RecordEntry,
    pub cell: RgbaImage,
}

impl Sortable for NormalizedRecord {
    fn filename(&self) -> &str {
        &self.entry.filename
    }

    fn color(&self) -> Option<&ColorInfo> {
        self.entry.color.as_ref()
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Layout the grid was composited with
    pub layout: GridLayout,
    /// Records in sorted order
    pub records: Vec<RecordEntry>,
    /// Number of images that made it into the output
    pub placed: usize,
    /// Files written
    pub outputs: Vec<PathBuf>,
}
