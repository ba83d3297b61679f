//! Color sorting pipeline module
//!
//! This module turns a directory of images into a grid ordered by color,
//! with separate modules for color extraction, layout, rendering, sorting,
//! compositing and I/O.

pub mod color;
pub mod common;
pub mod composite;
pub mod io;
pub mod layout;
pub mod normalize;
pub mod pipeline;
pub mod sort;

pub use common::{
    SortError,
    Result,
};

pub use color::{
    ColorInfo,
    extract_color,
};

pub use layout::{
    GridLayout,
    LayoutHints,
    OverflowPolicy,
    TraversalOrder,
};

pub use normalize::VisualizationMode;

pub use sort::{
    FilenameCollator,
    SortParameter,
    Sortable,
};

pub use io::{
    DirectorySource,
    ImageSource,
    ImageWriter,
    StandardImageWriter,
};

pub use pipeline::{
    ColorSortPipeline,
    OutputTarget,
    PipelineTimings,
    RecordTable,
    RunSummary,
    SortConfig,
    SortConfigBuilder,
};
