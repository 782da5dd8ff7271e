//! Tile mosaic generation from raster images
//!
//! An image is divided into square tiles, each tile is averaged to one color,
//! and the colors are reduced onto a palette (every distinct color, a custom
//! list, or a seeded clustering). Palette colors receive short hue-family
//! codes, and the resulting grid is partitioned into labelled panels for
//! physical production, rendered as a preview and exported as JSON and CSV.

#![forbid(unsafe_code)]

/// Palette construction, color mapping, color codes and the processing pipeline
pub mod algorithm;
/// Per-tile color sampling and palette usage statistics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color values and unit conversions
pub mod math;
/// Grid sizing, tile layout and panel partitioning
pub mod spatial;

pub use algorithm::palette::PaletteStrategy;
pub use algorithm::pipeline::{MosaicOutcome, MosaicPipeline, MosaicRequest};
pub use io::error::{MosaicError, Result};
