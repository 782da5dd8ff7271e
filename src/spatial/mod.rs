//! Spatial layout of the mosaic
//!
//! This module contains layout-related functionality including:
//! - Grid and tile sizing from pixel or physical dimensions
//! - The logical tile grid with render and production coordinates
//! - Partitioning of the grid into printable panels

/// Logical tile grid construction
pub mod grid;
/// Printable panel partitioning
pub mod panels;
/// Grid dimensions and tile size resolution
pub mod sizing;

pub use grid::{MosaicGrid, Tile};
