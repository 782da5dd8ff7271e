//! Command-line interface for turning image files into tile mosaics

use crate::algorithm::palette::PaletteStrategy;
use crate::algorithm::pipeline::{MosaicOutcome, MosaicPipeline, MosaicRequest};
use crate::io::configuration::{
    DEFAULT_DPI, DEFAULT_PALETTE_SIZE, DEFAULT_SEED, DEFAULT_TILE_SIZE, MAX_PALETTE_SIZE,
    MAX_TILE_SIZE, MIN_PALETTE_SIZE, OUTPUT_SUFFIX,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{load_image, save_png};
use crate::io::progress::ProgressManager;
use crate::io::response::MosaicResponse;
use crate::spatial::panels::PanelSize;
use clap::{ArgAction, Parser, ValueEnum};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Palette strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaletteKind {
    /// Keep every distinct averaged color
    #[default]
    Dynamic,
    /// Cluster averaged colors into a fixed-size palette
    Kmeans,
    /// Snap to the colors given with `--colors`
    Custom,
}

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Turn images into palette-reduced tile mosaics with printable panels"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Input image file to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tile edge length in pixels
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TILE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_TILE_SIZE as i64)
    )]
    pub tile_size: u32,

    /// Palette strategy
    #[arg(short, long, value_enum, default_value_t = PaletteKind::Dynamic)]
    pub palette: PaletteKind,

    /// Number of colors for the kmeans palette
    #[arg(
        short = 'k',
        long,
        default_value_t = DEFAULT_PALETTE_SIZE as u16,
        value_parser = clap::value_parser!(u16)
            .range(MIN_PALETTE_SIZE as i64..=MAX_PALETTE_SIZE as i64)
    )]
    pub palette_size: u16,

    /// Comma-separated hex colors for the custom palette
    #[arg(short, long, value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Physical tile width in centimeters (implies square if height not specified)
    #[arg(long)]
    pub tile_width_cm: Option<f64>,

    /// Physical tile height in centimeters
    #[arg(long)]
    pub tile_height_cm: Option<f64>,

    /// Panel width in centimeters (implies square if height not specified)
    #[arg(long)]
    pub panel_width_cm: Option<f64>,

    /// Panel height in centimeters
    #[arg(long)]
    pub panel_height_cm: Option<f64>,

    /// Source image resolution in dots per inch
    #[arg(short, long, default_value_t = DEFAULT_DPI)]
    pub dpi: f64,

    /// Random seed for the kmeans palette
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory for output files (defaults to each input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Process the image even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Palette strategy described by the palette flags
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` when the custom palette has no colors
    pub fn palette_strategy(&self) -> Result<PaletteStrategy> {
        match self.palette {
            PaletteKind::Dynamic => Ok(PaletteStrategy::Dynamic),
            PaletteKind::Kmeans => Ok(PaletteStrategy::Clustering {
                palette_size: usize::from(self.palette_size),
                seed: self.seed,
            }),
            PaletteKind::Custom => {
                let colors: Vec<String> = self
                    .colors
                    .iter()
                    .map(String::as_str)
                    .map(str::trim)
                    .filter(|color| !color.is_empty())
                    .map(str::to_owned)
                    .collect();
                if colors.is_empty() {
                    return Err(MosaicError::EmptyPalette);
                }
                Ok(PaletteStrategy::Custom(colors))
            }
        }
    }

    /// Pipeline request described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the palette flags are inconsistent
    pub fn to_request(&self) -> Result<MosaicRequest> {
        Ok(MosaicRequest::new(self.tile_size)
            .with_palette(self.palette_strategy()?)
            .with_tile_size_cm(self.tile_width_cm, self.tile_height_cm)
            .with_panel_size(PanelSize::from_dimensions(
                self.panel_width_cm,
                self.panel_height_cm,
            ))
            .with_dpi(self.dpi))
    }
}

/// Output file locations for one input image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Rendered mosaic PNG
    pub render: PathBuf,
    /// Grid JSON
    pub grid: PathBuf,
    /// Panel JSON
    pub panels: PathBuf,
    /// Tile id CSV
    pub tile_csv: PathBuf,
    /// Tile id JSON
    pub tile_json: PathBuf,
    /// Combined response JSON
    pub response: PathBuf,
}

impl OutputPaths {
    /// Paths named after the input's stem, inside `output_dir` or beside the input
    pub fn for_input(input_path: &Path, output_dir: Option<&Path>) -> Self {
        let stem = input_path.file_stem().unwrap_or_default().to_string_lossy();
        let directory = output_dir
            .map(Path::to_path_buf)
            .or_else(|| input_path.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        let named = |suffix: &str| directory.join(format!("{stem}{OUTPUT_SUFFIX}{suffix}"));

        Self {
            render: named(".png"),
            grid: named("_grid.json"),
            panels: named("_panels.json"),
            tile_csv: named("_tiles.csv"),
            tile_json: named("_tiles.json"),
            response: named("_response.json"),
        }
    }
}

/// Runs the pipeline on one image file with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the target image according to CLI arguments
    ///
    /// Returns the number of images processed, zero when the target was
    /// skipped because its output already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or processing fails
    pub fn process(&self) -> Result<usize> {
        let request = self.cli.to_request()?;
        let target = self.validate_target()?;

        if !self.should_process_file(target) {
            return Ok(0);
        }

        self.process_file(&MosaicPipeline::new(request), target)?;
        Ok(1)
    }

    fn validate_target(&self) -> Result<&Path> {
        let target = self.cli.target.as_path();
        if !target.is_file() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an existing image file",
            ));
        }
        if ImageFormat::from_path(target).is_err() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"file is not a supported image",
            ));
        }
        Ok(target)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let outputs = OutputPaths::for_input(input_path, self.cli.output_dir.as_deref());
        if outputs.render.exists() {
            warn!(input = %input_path.display(), "Skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, pipeline: &MosaicPipeline, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let outputs = OutputPaths::for_input(input_path, self.cli.output_dir.as_deref());

        if let Some(pm) = &self.progress_manager {
            pm.start_file(input_path);
        }

        let image = load_image(input_path)?;
        let outcome = pipeline
            .run_with(&image, |stage| {
                if let Some(pm) = &self.progress_manager {
                    pm.update_stage(stage);
                }
            })
            .inspect_err(|_| {
                if let Some(pm) = &self.progress_manager {
                    pm.abandon();
                }
            })?;

        write_outputs(&outcome, &outputs)?;

        if let Some(pm) = &self.progress_manager {
            pm.complete_file(start_time.elapsed());
        }
        info!(
            input = %input_path.display(),
            output = %outputs.render.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "Mosaic written"
        );

        Ok(())
    }
}

/// Write the rendered PNG and every export payload
///
/// # Errors
///
/// Returns an error if any file cannot be written or the response cannot be
/// encoded
pub fn write_outputs(outcome: &MosaicOutcome, outputs: &OutputPaths) -> Result<()> {
    save_png(&outcome.render, &outputs.render)?;
    write_text(&outputs.grid, &outcome.exports.grid_json)?;
    write_text(&outputs.panels, &outcome.exports.panels_json)?;
    write_text(&outputs.tile_csv, &outcome.exports.tile_id_csv)?;
    write_text(&outputs.tile_json, &outcome.exports.tile_id_json)?;

    let response = MosaicResponse::from_outcome(outcome)?;
    write_text(&outputs.response, &response.to_json()?)
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
