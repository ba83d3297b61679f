use std::path::Path;

use color_sort_rs::image_pipeline::{
    ColorSortPipeline, OutputTarget, SortConfig, SortError, SortParameter, TraversalOrder,
    VisualizationMode,
};
use image::{ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;

fn write_solid(dir: &Path, name: &str, rgb: [u8; 3], width: u32, height: u32) {
    let format = ImageFormat::from_path(name).unwrap();
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save_with_format(dir.join(name), format)
        .unwrap();
}

fn populate(dir: &Path) {
    write_solid(dir, "sky.png", [0, 0, 255], 20, 16);
    write_solid(dir, "grass.PNG", [0, 255, 0], 16, 24);
    write_solid(dir, "fire.png", [255, 0, 0], 30, 30);
    write_solid(dir, "snow.png", [250, 250, 250], 18, 18);
    std::fs::write(dir.join("readme.txt"), "not an image").unwrap();
}

#[test]
fn test_grid_from_directory() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    populate(input.path());
    let grid_path = output.path().join("grid.png");

    let config = SortConfig::builder()
        .input_dir(input.path())
        .output(OutputTarget::Grid(grid_path.clone()))
        .sort_parameter(SortParameter::Luma)
        .sort_order(TraversalOrder::RowMajor)
        .build();
    let summary = ColorSortPipeline::new(config).run().unwrap();

    let names: Vec<_> = summary.records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["sky.png", "fire.png", "grass.PNG", "snow.png"]);
    assert_eq!(summary.layout.cell_size, 16);
    assert_eq!(summary.outputs, vec![grid_path.clone()]);

    let grid = image::open(&grid_path).unwrap().to_rgba8();
    assert_eq!(grid.dimensions(), (32, 32));
    assert_eq!(grid.get_pixel(8, 8).0, [0, 0, 255, 255]);
    assert_eq!(grid.get_pixel(24, 8).0, [255, 0, 0, 255]);
    assert_eq!(grid.get_pixel(8, 24).0, [0, 255, 0, 255]);
    assert_eq!(grid.get_pixel(24, 24).0, [250, 250, 250, 255]);
}

#[test]
fn test_files_mode_from_directory() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    populate(input.path());
    let dir = output.path().join("sorted");

    let config = SortConfig::builder()
        .input_dir(input.path())
        .output(OutputTarget::Files { dir: dir.clone() })
        .sort_parameter(SortParameter::Filename)
        .mode(VisualizationMode::Dominant)
        .cell_size(Some(5))
        .build();
    let summary = ColorSortPipeline::new(config).run().unwrap();

    let mut written: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(
        written,
        vec!["1_fire.png", "2_grass.PNG", "3_sky.png", "4_snow.png"]
    );
    assert_eq!(summary.outputs.len(), 4);

    let first = image::open(dir.join("1_fire.png")).unwrap().to_rgb8();
    assert_eq!(first.dimensions(), (5, 5));
    assert_eq!(first.get_pixel(2, 2).0, [255, 0, 0]);
}

#[test]
fn test_jpeg_grid_output() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    populate(input.path());
    let grid_path = output.path().join("grid.jpg");

    let config = SortConfig::builder()
        .input_dir(input.path())
        .output(OutputTarget::Grid(grid_path.clone()))
        .mode(VisualizationMode::Mosaic)
        .build();
    ColorSortPipeline::new(config).run().unwrap();

    let grid = image::open(&grid_path).unwrap();
    assert_eq!((grid.width(), grid.height()), (32, 32));
}

#[test]
fn test_empty_directory_fails() {
    let input = TempDir::new().unwrap();
    std::fs::write(input.path().join("notes.md"), "nothing here").unwrap();
    let output = TempDir::new().unwrap();
    let grid_path = output.path().join("grid.png");

    let config = SortConfig::builder()
        .input_dir(input.path())
        .output(OutputTarget::Grid(grid_path.clone()))
        .build();
    let result = ColorSortPipeline::new(config).run();

    assert!(matches!(result, Err(SortError::NoInputImages(_))));
    assert!(!grid_path.exists());
}

#[test]
fn test_corrupt_file_aborts_run() {
    let input = TempDir::new().unwrap();
    populate(input.path());
    std::fs::write(input.path().join("broken.jpg"), b"\xff\xd8 truncated").unwrap();
    let output = TempDir::new().unwrap();
    let grid_path = output.path().join("grid.png");

    let config = SortConfig::builder()
        .input_dir(input.path())
        .output(OutputTarget::Grid(grid_path.clone()))
        .build();
    let err = ColorSortPipeline::new(config).run().unwrap_err();

    assert!(matches!(err, SortError::DecodeError(_)));
    assert!(err.to_string().contains("broken.jpg"));
    assert!(!grid_path.exists());
}
