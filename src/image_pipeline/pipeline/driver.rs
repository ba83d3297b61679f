use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    color::{extract_color, prepare_source},
    common::error::{Result, SortError},
    composite::composite,
    io::{DirectorySource, ImageSource, ImageWriter, StandardImageWriter},
    layout::{resolve, GridLayout},
    normalize::normalize,
    pipeline::timing::{PipelineTimings, Timer},
    pipeline::types::{ImageRecord, NormalizedRecord, OutputTarget, RecordEntry, RunSummary, SortConfig},
    sort::sort_records,
};

pub struct ColorSortPipeline<S: ImageSource, W: ImageWriter> {
    source: S,
    writer: W,
    config: SortConfig,
}

impl ColorSortPipeline<DirectorySource, StandardImageWriter> {
    pub fn new(config: SortConfig) -> Self {
        Self {
            source: DirectorySource::new(config.input_dir.clone()),
            writer: StandardImageWriter,
            config,
        }
    }
}

impl<S: ImageSource, W: ImageWriter> ColorSortPipeline<S, W> {
    pub fn with_custom(source: S, writer: W, config: SortConfig) -> Self {
        Self {
            source,
            writer,
            config,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.run_with_timings().map(|(summary, _)| summary)
    }

    #[instrument(skip(self), fields(input = %self.source.location()))]
    pub fn run_with_timings(&self) -> Result<(RunSummary, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("list_inputs");
        let paths = self.source.list_images()?;
        timings.record(timer);
        if paths.is_empty() {
            return Err(SortError::NoInputImages(self.source.location()));
        }
        info!("Sorting {} images by {:?}", paths.len(), self.config.sort_parameter);

        let timer = Timer::start("load_and_extract");
        let records = {
            let _span = tracing::info_span!("load_and_extract").entered();
            self.load_records(&paths)?
        };
        timings.record(timer);

        let timer = Timer::start("resolve_layout");
        let layout = {
            let _span = tracing::info_span!("resolve_layout").entered();
            self.resolve_layout(&records)?
        };
        timings.record(timer);

        let timer = Timer::start("normalize");
        let mut normalized = {
            let _span = tracing::info_span!("normalize", cell_size = layout.cell_size).entered();
            records
                .into_iter()
                .map(|record| self.normalize_record(record, layout.cell_size))
                .collect::<Result<Vec<_>>>()?
        };
        timings.record(timer);

        let timer = Timer::start("sort");
        {
            let _span = tracing::info_span!("sort").entered();
            sort_records(&mut normalized, self.config.sort_parameter)?;
        }
        timings.record(timer);

        let (entries, cells): (Vec<RecordEntry>, Vec<RgbaImage>) = normalized
            .into_iter()
            .map(|record| (record.entry, record.cell))
            .unzip();

        let timer = Timer::start("write_output");
        let (placed, outputs) = {
            let _span = tracing::info_span!("write_output").entered();
            self.emit(&cells, &entries, &layout)?
        };
        timings.record(timer);

        info!(
            rows = layout.rows,
            columns = layout.columns,
            cell_size = layout.cell_size,
            placed,
            "Run complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );

        let summary = RunSummary {
            layout,
            records: entries,
            placed,
            outputs,
        };
        Ok((summary, timings))
    }

    /// Loads every input in order, stopping at the first failure.
    ///
    /// Nothing downstream starts until the whole set is present.
    fn load_records(&self, paths: &[PathBuf]) -> Result<Vec<ImageRecord>> {
        let total = paths.len();
        let with_color = self.config.needs_color();

        paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                let filename = display_name(path);
                info!("[{}/{}] {}", index + 1, total, filename);

                let image = prepare_source(self.source.load_image(path)?, self.config.greyscale);
                let color = with_color.then(|| extract_color(&image));
                if let Some(color) = &color {
                    debug!(
                        hue = color.hue,
                        saturation = color.saturation,
                        value = color.value,
                        luma = color.luma,
                        "{} -> #{}",
                        filename,
                        color.hex()
                    );
                }

                Ok(ImageRecord { filename, image, color })
            })
            .collect()
    }

    fn resolve_layout(&self, records: &[ImageRecord]) -> Result<GridLayout> {
        let dimensions: Vec<(u32, u32)> = records
            .iter()
            .map(|record| (record.image.width(), record.image.height()))
            .collect();
        let layout = resolve(records.len(), self.config.hints, &dimensions)?;

        match self.config.output {
            OutputTarget::Grid(_) => {
                layout.fit(records.len(), self.config.sort_order, self.config.overflow)
            }
            OutputTarget::Files { .. } => Ok(layout),
        }
    }

    fn normalize_record(&self, record: ImageRecord, cell_size: u32) -> Result<NormalizedRecord> {
        let ImageRecord { filename, image, color } = record;
        let cell = normalize(&image, color.as_ref(), self.config.mode, cell_size)
            .map_err(|e| match e {
                SortError::MissingColorInfo(_) => SortError::MissingColorInfo(filename.clone()),
                other => other,
            })?;
        Ok(NormalizedRecord {
            entry: RecordEntry { filename, color },
            cell,
        })
    }

    fn emit(
        &self,
        cells: &[RgbaImage],
        entries: &[RecordEntry],
        layout: &GridLayout,
    ) -> Result<(usize, Vec<PathBuf>)> {
        match &self.config.output {
            OutputTarget::Grid(path) => {
                let canvas = composite(cells, layout, self.config.sort_order)?;
                // surplus under Truncate was already reported by GridLayout::fit
                let placed = cells.len().min(layout.capacity());
                self.writer.write_image(&canvas, path)?;
                info!("Wrote grid to {}", path.display());
                Ok((placed, vec![path.clone()]))
            }
            OutputTarget::Files { dir } => {
                let total = cells.len();
                let mut outputs = Vec::with_capacity(total);
                for (index, (cell, entry)) in cells.iter().zip(entries).enumerate() {
                    let path = dir.join(sequence_file_name(index, total, &entry.filename));
                    self.writer.write_image(cell, &path)?;
                    outputs.push(path);
                }
                info!("Wrote {} files to {}", total, dir.display());
                Ok((total, outputs))
            }
        }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }
}

/// Name of the `index`th (0-based) file in per-image output.
///
/// The 1-based position is zero-padded to the width of `total` and prefixed
/// to the original filename.
pub fn sequence_file_name(index: usize, total: usize, filename: &str) -> String {
    let width = total.to_string().len();
    format!("{:0width$}_{}", index + 1, filename, width = width)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
