//! Response payload combining every pipeline output

use crate::algorithm::pipeline::MosaicOutcome;
use crate::analysis::summary::PaletteEntry;
use crate::io::error::{MosaicError, Result};
use crate::io::export::MosaicExports;
use crate::io::image::to_data_uri;
use crate::spatial::grid::Tile;
use crate::spatial::panels::Panel;
use crate::spatial::sizing::TileSizeInfo;
use serde::Serialize;

/// A tile's position, color and ids in the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileColor {
    /// Zero-based render column
    pub x: u32,
    /// Zero-based render row
    pub y: u32,
    /// One-based production row
    pub row: u32,
    /// One-based production column
    pub column: u32,
    /// Color as `#RRGGBB`
    pub hex: String,
    /// Color code
    pub color_id: String,
    /// Printed tile id
    pub tile_id: String,
}

impl From<&Tile> for TileColor {
    fn from(tile: &Tile) -> Self {
        Self {
            x: tile.x,
            y: tile.y,
            row: tile.row,
            column: tile.column,
            hex: tile.color_hex.clone(),
            color_id: tile.color_id.clone(),
            tile_id: tile.tile_id.clone(),
        }
    }
}

/// Grid dimensions with the tile list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridInfo {
    /// Tile columns
    pub grid_width: u32,
    /// Tile rows
    pub grid_height: u32,
    /// Tiles in scan order
    pub tiles: Vec<TileColor>,
}

/// Complete result of processing one image
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicResponse {
    /// Tile columns
    pub grid_width: u32,
    /// Tile rows
    pub grid_height: u32,
    /// Tiles in scan order
    pub colors: Vec<TileColor>,
    /// Grid dimensions with tiles
    pub grid: GridInfo,
    /// Color usage, most used first
    pub palette_summary: Vec<PaletteEntry>,
    /// Resolved tile sizing
    pub tile_size_info: TileSizeInfo,
    /// Rendered preview as a PNG data URI
    pub render_image_base64: String,
    /// Printable panels
    pub panels: Vec<Panel>,
    /// Export payloads
    pub exports: MosaicExports,
}

impl MosaicResponse {
    /// Assemble the response, encoding the preview as PNG
    ///
    /// # Errors
    ///
    /// Returns `ImageEncode` if the preview cannot be encoded
    pub fn from_outcome(outcome: &MosaicOutcome) -> Result<Self> {
        let colors: Vec<TileColor> = outcome.grid.tiles().iter().map(TileColor::from).collect();

        Ok(Self {
            grid_width: outcome.grid.width(),
            grid_height: outcome.grid.height(),
            grid: GridInfo {
                grid_width: outcome.grid.width(),
                grid_height: outcome.grid.height(),
                tiles: colors.clone(),
            },
            colors,
            palette_summary: outcome.palette_summary.clone(),
            tile_size_info: outcome.tile_size,
            render_image_base64: to_data_uri(&outcome.render)?,
            panels: outcome.panels.clone(),
            exports: outcome.exports.clone(),
        })
    }

    /// Pretty-printed JSON form of the response
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if JSON encoding fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MosaicError::Serialization {
            payload: "response",
            source: e,
        })
    }
}
