use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use color_sort_rs::image_pipeline::{
    ColorSortPipeline, OutputTarget, OverflowPolicy, RecordTable, SortConfig, SortParameter,
    TraversalOrder, VisualizationMode,
};
use color_sort_rs::logger;

use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "color_sort",
    about = "Sort a directory of images by color and lay them out as a grid",
    version
)]
struct Cli {
    /// Number of grid rows
    #[arg(short = 'r', long = "numRows")]
    rows: Option<u32>,

    /// Number of grid columns
    #[arg(short = 'c', long = "numColumns")]
    columns: Option<u32>,

    /// Cell size in pixels, detected from the inputs when omitted
    #[arg(short = 'x', long = "pxPerImage", alias = "px")]
    cell_size: Option<u32>,

    /// Output image path, or "files" for one numbered file per image
    #[arg(short = 'o', long = "outputFilename")]
    output: Option<String>,

    /// Order in which the grid is filled
    #[arg(short = 's', long = "sortOrder", value_enum, default_value_t = TraversalOrder::ColumnMajor)]
    sort_order: TraversalOrder,

    /// Attribute to sort by
    #[arg(short = 'p', long = "sortParameter", value_enum, default_value_t = SortParameter::Hue)]
    sort_parameter: SortParameter,

    /// Directory containing the input images
    #[arg(short = 'i', long = "inputDirectory", default_value = "./images")]
    input_dir: PathBuf,

    /// How each image is drawn into its cell
    #[arg(short = 'v', long = "visualizationMode", value_enum, default_value_t = VisualizationMode::Normal)]
    mode: VisualizationMode,

    /// Convert images to greyscale first
    #[arg(short = 'g', long = "greyscale")]
    greyscale: bool,

    /// What to do with images that do not fit the grid
    #[arg(long = "overflow", value_enum, default_value_t = OverflowPolicy::Truncate)]
    overflow: OverflowPolicy,

    /// Print per-stage timings after the run
    #[arg(long = "timings")]
    timings: bool,

    /// Enable debug logging
    #[arg(long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = SortConfig::builder()
        .input_dir(cli.input_dir)
        .output(OutputTarget::from_arg(cli.output.as_deref()))
        .sort_parameter(cli.sort_parameter)
        .sort_order(cli.sort_order)
        .mode(cli.mode)
        .greyscale(cli.greyscale)
        .rows(cli.rows)
        .columns(cli.columns)
        .cell_size(cli.cell_size)
        .overflow(cli.overflow)
        .build();

    info!("Input directory: {}", config.input_dir.display());
    info!("Output: {:?}", config.output);

    let pipeline = ColorSortPipeline::new(config);
    let (summary, timings) = pipeline
        .run_with_timings()
        .with_context(|| format!("sorting images in {}", pipeline.config().input_dir.display()))?;

    println!("{}", RecordTable::new(&summary.records, pipeline.config().sort_parameter));
    for output in &summary.outputs {
        info!("Output written: {}", output.display());
    }
    if cli.timings {
        println!("\n{timings}");
    }

    Ok(())
}
