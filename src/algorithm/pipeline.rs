//! End-to-end mosaic processing for a single request
//!
//! Stages run strictly in order: tile sizing, grid sizing, tile averaging,
//! palette construction, color mapping, code assignment, grid assembly,
//! panel partitioning, rendering and export. Any stage failure aborts the
//! whole request; nothing partial is returned.

use crate::algorithm::codes::assign_color_codes;
use crate::algorithm::mapping::map_colors;
use crate::algorithm::palette::{PaletteStrategy, build_palette};
use crate::analysis::averaging::{SourceImage, average_tiles};
use crate::analysis::summary::{PaletteEntry, summarize_palette};
use crate::io::configuration::{DEFAULT_DPI, DEFAULT_TILE_SIZE};
use crate::io::error::Result;
use crate::io::export::{MosaicExports, build_exports};
use crate::io::image::render_mosaic;
use crate::math::color::Color;
use crate::spatial::grid::{MosaicGrid, build_grid};
use crate::spatial::panels::{Panel, PanelSize, build_panels};
use crate::spatial::sizing::{TileSizeInfo, calculate_grid, calculate_tile_size};
use image::RgbaImage;
use tracing::{debug, info};

/// Parameters for one mosaic
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicRequest {
    /// Tile edge in pixels, used unless a physical tile size is given
    pub tile_size_px: u32,
    /// Palette selection
    pub palette: PaletteStrategy,
    /// Physical tile width
    pub tile_width_cm: Option<f64>,
    /// Physical tile height
    pub tile_height_cm: Option<f64>,
    /// Physical panel size; `None` keeps the mosaic as one panel
    pub panel_size: Option<PanelSize>,
    /// Source image resolution
    pub dpi: f64,
}

impl Default for MosaicRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE)
    }
}

impl MosaicRequest {
    /// Request with a pixel tile size, dynamic palette and default DPI
    pub const fn new(tile_size_px: u32) -> Self {
        Self {
            tile_size_px,
            palette: PaletteStrategy::Dynamic,
            tile_width_cm: None,
            tile_height_cm: None,
            panel_size: None,
            dpi: DEFAULT_DPI,
        }
    }

    /// Use the given palette strategy
    #[must_use]
    pub fn with_palette(mut self, palette: PaletteStrategy) -> Self {
        self.palette = palette;
        self
    }

    /// Size tiles physically instead of in pixels
    #[must_use]
    pub fn with_tile_size_cm(mut self, width_cm: Option<f64>, height_cm: Option<f64>) -> Self {
        self.tile_width_cm = width_cm;
        self.tile_height_cm = height_cm;
        self
    }

    /// Split the mosaic into panels of this size
    #[must_use]
    pub fn with_panel_size(mut self, panel_size: Option<PanelSize>) -> Self {
        self.panel_size = panel_size;
        self
    }

    /// Use the given source resolution
    #[must_use]
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }
}

/// Pipeline stage about to run, reported to progress observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolving the tile size and grid dimensions
    Sizing,
    /// Averaging source pixels per tile
    Averaging,
    /// Building the palette
    BuildingPalette,
    /// Mapping tile colors onto the palette
    Mapping,
    /// Assigning color codes and assembling the grid
    BuildingGrid,
    /// Partitioning the grid into panels
    BuildingPanels,
    /// Painting the preview image
    Rendering,
    /// Serializing export payloads
    Exporting,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 8] = [
        Self::Sizing,
        Self::Averaging,
        Self::BuildingPalette,
        Self::Mapping,
        Self::BuildingGrid,
        Self::BuildingPanels,
        Self::Rendering,
        Self::Exporting,
    ];

    /// Zero-based position of this stage in [`Stage::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Sizing => 0,
            Self::Averaging => 1,
            Self::BuildingPalette => 2,
            Self::Mapping => 3,
            Self::BuildingGrid => 4,
            Self::BuildingPanels => 5,
            Self::Rendering => 6,
            Self::Exporting => 7,
        }
    }

    /// Short human-readable description
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sizing => "Sizing grid",
            Self::Averaging => "Averaging tiles",
            Self::BuildingPalette => "Building palette",
            Self::Mapping => "Mapping colors",
            Self::BuildingGrid => "Assigning color codes",
            Self::BuildingPanels => "Building panels",
            Self::Rendering => "Rendering preview",
            Self::Exporting => "Exporting",
        }
    }
}

/// Everything produced for one mosaic
#[derive(Debug, Clone)]
pub struct MosaicOutcome {
    /// Resolved tile size
    pub tile_size: TileSizeInfo,
    /// Palette the tiles were mapped onto
    pub palette: Vec<Color>,
    /// The tile grid
    pub grid: MosaicGrid,
    /// Color usage, most used first
    pub palette_summary: Vec<PaletteEntry>,
    /// Printable panels
    pub panels: Vec<Panel>,
    /// JSON and CSV payloads
    pub exports: MosaicExports,
    /// Preview image
    pub render: RgbaImage,
}

/// Runs every stage for a fixed request
#[derive(Debug, Clone)]
pub struct MosaicPipeline {
    request: MosaicRequest,
}

impl MosaicPipeline {
    /// Create a pipeline for the given request
    pub const fn new(request: MosaicRequest) -> Self {
        Self { request }
    }

    /// The request this pipeline runs
    pub const fn request(&self) -> &MosaicRequest {
        &self.request
    }

    /// Process an image into a mosaic
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage
    pub fn run(&self, image: &SourceImage) -> Result<MosaicOutcome> {
        self.run_with(image, |_| {})
    }

    /// Process an image, calling `on_stage` before each stage starts
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage
    pub fn run_with(
        &self,
        image: &SourceImage,
        mut on_stage: impl FnMut(Stage),
    ) -> Result<MosaicOutcome> {
        let request = &self.request;
        info!(
            tile_size = request.tile_size_px,
            palette = request.palette.name(),
            "Processing mosaic"
        );

        on_stage(Stage::Sizing);
        let tile_size = calculate_tile_size(
            request.tile_size_px,
            request.tile_width_cm,
            request.tile_height_cm,
            request.dpi,
        )?;
        let tile_px = tile_size.tile_size_px;
        let (grid_width, grid_height) = calculate_grid(image.width(), image.height(), tile_px)?;
        info!(
            image_width = image.width(),
            image_height = image.height(),
            grid_width,
            grid_height,
            tile_px,
            "Grid calculated"
        );

        on_stage(Stage::Averaging);
        let averages = average_tiles(image, grid_width, grid_height, tile_px)?;
        debug!(tiles = averages.len(), "Average colors calculated");

        on_stage(Stage::BuildingPalette);
        let palette = build_palette(&request.palette, &averages)?;
        info!(
            strategy = request.palette.name(),
            palette_size = palette.len(),
            "Palette built"
        );

        on_stage(Stage::Mapping);
        let mapped = map_colors(&request.palette, &averages, &palette)?;

        on_stage(Stage::BuildingGrid);
        let mapped_hexes: Vec<String> = mapped.iter().map(|color| color.to_hex()).collect();
        let codes = assign_color_codes(mapped_hexes.iter().map(String::as_str))?;
        let grid = build_grid(grid_width, grid_height, &mapped, &codes)?;
        let palette_summary = summarize_palette(&grid);
        info!(unique_colors = palette_summary.len(), "Color summary generated");

        on_stage(Stage::BuildingPanels);
        let panels = build_panels(&grid, request.panel_size, tile_size.dpi, tile_px)?;
        info!(panels = panels.len(), "Panels built");

        on_stage(Stage::Rendering);
        let render = render_mosaic(grid.tiles(), grid_width, grid_height, tile_px)?;
        debug!(
            width = render.width(),
            height = render.height(),
            "Mosaic rendered"
        );

        on_stage(Stage::Exporting);
        let exports = build_exports(&grid, &panels)?;

        Ok(MosaicOutcome {
            tile_size,
            palette,
            grid,
            palette_summary,
            panels,
            exports,
            render,
        })
    }
}
