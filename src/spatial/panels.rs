//! Partitioning of the tile grid into printable panels
//!
//! Panels are laid out on a regular lattice starting at the top-left tile.
//! Every panel except those on the right and bottom edges holds the same
//! number of tiles; edge panels are cut short by the grid boundary. Each
//! grid tile belongs to exactly one panel.

use crate::io::configuration::MAX_PANEL_ROWS;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::math::units::{cm_to_px_exact, validate_dpi};
use crate::spatial::grid::MosaicGrid;
use serde::Serialize;

/// Physical size of one printed panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    /// Panel width in centimeters
    pub width_cm: f64,
    /// Panel height in centimeters
    pub height_cm: f64,
}

impl PanelSize {
    /// Panel size from optional dimensions; a single dimension gives a square panel
    pub const fn from_dimensions(
        width_cm: Option<f64>,
        height_cm: Option<f64>,
    ) -> Option<Self> {
        match (width_cm, height_cm) {
            (Some(width_cm), Some(height_cm)) => Some(Self {
                width_cm,
                height_cm,
            }),
            (Some(side), None) | (None, Some(side)) => Some(Self {
                width_cm: side,
                height_cm: side,
            }),
            (None, None) => None,
        }
    }
}

/// A tile as seen from inside its panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelTile {
    /// Row inside the panel, starting at 1
    pub local_row: u32,
    /// Column inside the panel, starting at 1
    pub local_column: u32,
    /// Row in the full grid, starting at 1
    pub global_row: u32,
    /// Column in the full grid, starting at 1
    pub global_column: u32,
    /// Tile color as `#RRGGBB`
    pub color_hex: String,
    /// Code of the tile's color
    pub color_id: String,
    /// Identifier printed on the tile
    pub tile_id: String,
}

/// A rectangular block of tiles printed as one sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    /// Zero-based panel row
    pub panel_row: u32,
    /// Zero-based panel column
    pub panel_column: u32,
    /// Label such as `Panel B3`
    pub label: String,
    /// First grid row covered, starting at 1
    pub start_row: u32,
    /// First grid column covered, starting at 1
    pub start_column: u32,
    /// Number of tile columns in the panel
    pub tiles_wide: u32,
    /// Number of tile rows in the panel
    pub tiles_high: u32,
    /// Tiles in row-major local order
    pub tiles: Vec<PanelTile>,
}

/// Label for a panel: a row letter followed by the one-based column
///
/// # Errors
///
/// Returns `PanelRowsExceeded` if `panel_row` has no single-letter name
pub fn panel_label(panel_row: u32, panel_column: u32) -> Result<String> {
    let letter = u8::try_from(panel_row)
        .ok()
        .filter(|&row| usize::from(row) < MAX_PANEL_ROWS)
        .map(|row| char::from(b'A' + row))
        .ok_or(MosaicError::PanelRowsExceeded {
            panel_rows: panel_row as usize + 1,
            max: MAX_PANEL_ROWS,
        })?;
    Ok(format!("Panel {letter}{}", u64::from(panel_column) + 1))
}

/// Whole tiles that fit along one panel edge, never fewer than one
pub fn tiles_per_panel(panel_cm: f64, dpi: f64, tile_size_px: u32) -> u32 {
    (cm_to_px_exact(panel_cm, dpi) / f64::from(tile_size_px))
        .floor()
        .max(1.0) as u32
}

/// Split the grid into panels of the given physical size
///
/// Without a panel size the whole grid becomes a single panel `Panel A1`.
///
/// # Errors
///
/// Returns an error if:
/// - `tile_size_px` is zero
/// - A panel size is given with a non-positive dimension or an invalid DPI
/// - The layout needs more panel rows than can be labelled
pub fn build_panels(
    grid: &MosaicGrid,
    panel_size: Option<PanelSize>,
    dpi: f64,
    tile_size_px: u32,
) -> Result<Vec<Panel>> {
    if tile_size_px == 0 {
        return Err(MosaicError::InvalidTileSize {
            value: tile_size_px,
        });
    }

    let (per_x, per_y) = match panel_size {
        None => (grid.width().max(1), grid.height().max(1)),
        Some(size) => {
            let dpi = validate_dpi(dpi)?;
            for (parameter, cm) in [
                ("panel_width_cm", size.width_cm),
                ("panel_height_cm", size.height_cm),
            ] {
                if !(cm.is_finite() && cm > 0.0) {
                    return Err(invalid_parameter(
                        parameter,
                        &cm,
                        &"must be a positive length",
                    ));
                }
            }
            (
                tiles_per_panel(size.width_cm, dpi, tile_size_px),
                tiles_per_panel(size.height_cm, dpi, tile_size_px),
            )
        }
    };

    let panel_columns = grid.width().div_ceil(per_x);
    let panel_rows = grid.height().div_ceil(per_y);
    if panel_rows as usize > MAX_PANEL_ROWS {
        return Err(MosaicError::PanelRowsExceeded {
            panel_rows: panel_rows as usize,
            max: MAX_PANEL_ROWS,
        });
    }

    let mut panels = Vec::with_capacity(panel_rows as usize * panel_columns as usize);
    for panel_row in 0..panel_rows {
        for panel_column in 0..panel_columns {
            let start_row = panel_row * per_y + 1;
            let start_column = panel_column * per_x + 1;
            let end_row = start_row.saturating_add(per_y - 1).min(grid.height());
            let end_column = start_column.saturating_add(per_x - 1).min(grid.width());

            let mut tiles = Vec::new();
            for global_row in start_row..=end_row {
                for global_column in start_column..=end_column {
                    if let Some(tile) = grid.tile_at(global_row, global_column) {
                        tiles.push(PanelTile {
                            local_row: global_row - start_row + 1,
                            local_column: global_column - start_column + 1,
                            global_row,
                            global_column,
                            color_hex: tile.color_hex.clone(),
                            color_id: tile.color_id.clone(),
                            tile_id: tile.tile_id.clone(),
                        });
                    }
                }
            }

            panels.push(Panel {
                panel_row,
                panel_column,
                label: panel_label(panel_row, panel_column)?,
                start_row,
                start_column,
                tiles_wide: end_column - start_column + 1,
                tiles_high: end_row - start_row + 1,
                tiles,
            });
        }
    }

    Ok(panels)
}
