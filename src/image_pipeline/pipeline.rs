//! Pipeline driver
//!
//! Sequences listing, color extraction, layout resolution, normalization,
//! sorting and output for one run.

mod driver;
mod report;
mod timing;
pub mod types;


pub use driver::{sequence_file_name, ColorSortPipeline};
pub use report::RecordTable;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{
    ImageRecord, OutputTarget, RecordEntry, RunSummary, SortConfig, SortConfigBuilder,
    DEFAULT_FILES_DIR, DEFAULT_INPUT_DIR,
};
