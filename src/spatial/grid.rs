//! Logical mosaic grid assembled from mapped tile colors
//!
//! Tiles carry two coordinate systems: zero-based (x, y) used for rendering,
//! and one-based (row, column) used on printed production sheets.

use crate::algorithm::codes::ColorCodes;
use crate::io::error::{MosaicError, Result};
use crate::math::color::Color;

/// A single placed tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Zero-based column for rendering
    pub x: u32,
    /// Zero-based row for rendering
    pub y: u32,
    /// One-based row for production
    pub row: u32,
    /// One-based column for production
    pub column: u32,
    /// Resolved tile color
    pub color: Color,
    /// Resolved color as `#RRGGBB`
    pub color_hex: String,
    /// Code of the tile's color family, e.g. `R01`
    pub color_id: String,
    /// Identifier printed on the tile (same as the color code)
    pub tile_id: String,
}

/// The full tile grid in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl MosaicGrid {
    /// Number of tile columns
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of tile rows
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Tiles in scan order (y outer, x inner)
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at one-based production coordinates
    pub fn tile_at(&self, row: u32, column: u32) -> Option<&Tile> {
        if row == 0 || column == 0 || row > self.height || column > self.width {
            return None;
        }
        let index = (row - 1) as usize * self.width as usize + (column - 1) as usize;
        self.tiles.get(index)
    }
}

/// Assemble the grid from per-tile mapped colors in scan order
///
/// # Errors
///
/// Returns an error if:
/// - `mapped_colors` does not hold exactly `width * height` entries
/// - A mapped color has no code in `codes`, which indicates the code table
///   was built from different colors than the grid
pub fn build_grid(
    width: u32,
    height: u32,
    mapped_colors: &[Color],
    codes: &ColorCodes,
) -> Result<MosaicGrid> {
    let expected = width as usize * height as usize;
    if mapped_colors.len() != expected {
        return Err(MosaicError::GridMismatch {
            expected,
            actual: mapped_colors.len(),
        });
    }

    let mut tiles = Vec::with_capacity(expected);
    let mut colors = mapped_colors.iter();
    for y in 0..height {
        for x in 0..width {
            let Some(&color) = colors.next() else {
                return Err(MosaicError::GridMismatch {
                    expected,
                    actual: tiles.len(),
                });
            };
            let color_hex = color.to_hex();
            let color_id = codes
                .code_for(&color_hex)
                .ok_or_else(|| MosaicError::MissingColorCode {
                    hex: color_hex.clone(),
                })?
                .to_string();

            tiles.push(Tile {
                x,
                y,
                row: y + 1,
                column: x + 1,
                color,
                color_hex,
                tile_id: color_id.clone(),
                color_id,
            });
        }
    }

    Ok(MosaicGrid {
        width,
        height,
        tiles,
    })
}
