//! JSON and CSV payloads for production hand-off
//!
//! All JSON payloads use camelCase keys and two-space indentation. The CSV
//! never needs quoting: hex values and codes contain no commas.

use crate::io::error::{MosaicError, Result};
use crate::spatial::grid::{MosaicGrid, Tile};
use crate::spatial::panels::Panel;
use serde::Serialize;
use std::fmt::Write as _;

/// Header row of the tile identifier CSV
pub const TILE_ID_CSV_HEADER: &str = "row,column,colorHex,tileId";

/// The four export documents for one mosaic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicExports {
    /// Grid dimensions with every tile's coordinates and ids
    pub grid_json: String,
    /// Full panel list
    pub panels_json: String,
    /// Tile identifiers as CSV
    pub tile_id_csv: String,
    /// Tile identifiers as JSON
    pub tile_id_json: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridTileRecord<'a> {
    row: u32,
    column: u32,
    color_hex: &'a str,
    color_id: &'a str,
    tile_id: &'a str,
}

#[derive(Serialize)]
struct GridRecord<'a> {
    width: u32,
    height: u32,
    tiles: Vec<GridTileRecord<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileIdRecord<'a> {
    row: u32,
    column: u32,
    color_hex: &'a str,
    tile_id: &'a str,
    color_id: &'a str,
}

fn to_pretty_json<T: Serialize + ?Sized>(payload: &'static str, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| MosaicError::Serialization { payload, source: e })
}

/// Grid dimensions and per-tile row, column, color and ids
///
/// # Errors
///
/// Returns `Serialization` if JSON encoding fails
pub fn grid_json(grid: &MosaicGrid) -> Result<String> {
    let record = GridRecord {
        width: grid.width(),
        height: grid.height(),
        tiles: grid
            .tiles()
            .iter()
            .map(|tile| GridTileRecord {
                row: tile.row,
                column: tile.column,
                color_hex: &tile.color_hex,
                color_id: &tile.color_id,
                tile_id: &tile.tile_id,
            })
            .collect(),
    };
    to_pretty_json("grid", &record)
}

/// The panel list with local and global tile coordinates
///
/// # Errors
///
/// Returns `Serialization` if JSON encoding fails
pub fn panels_json(panels: &[Panel]) -> Result<String> {
    to_pretty_json("panels", panels)
}

/// One `row,column,colorHex,tileId` line per tile after the header
pub fn tile_id_csv(tiles: &[Tile]) -> String {
    let mut csv = String::with_capacity((tiles.len() + 1) * 24);
    csv.push_str(TILE_ID_CSV_HEADER);
    csv.push('\n');
    for tile in tiles {
        // Writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{},{}",
            tile.row, tile.column, tile.color_hex, tile.tile_id
        );
    }
    csv
}

/// Tile identifiers with their coordinates and color
///
/// # Errors
///
/// Returns `Serialization` if JSON encoding fails
pub fn tile_id_json(tiles: &[Tile]) -> Result<String> {
    let records: Vec<TileIdRecord<'_>> = tiles
        .iter()
        .map(|tile| TileIdRecord {
            row: tile.row,
            column: tile.column,
            color_hex: &tile.color_hex,
            tile_id: &tile.tile_id,
            color_id: &tile.color_id,
        })
        .collect();
    to_pretty_json("tile ids", &records)
}

/// Build all four export documents
///
/// # Errors
///
/// Returns `Serialization` if any JSON payload fails to encode
pub fn build_exports(grid: &MosaicGrid, panels: &[Panel]) -> Result<MosaicExports> {
    Ok(MosaicExports {
        grid_json: grid_json(grid)?,
        panels_json: panels_json(panels)?,
        tile_id_csv: tile_id_csv(grid.tiles()),
        tile_id_json: tile_id_json(grid.tiles())?,
    })
}
