//! Palette usage statistics over a finished grid

use crate::spatial::grid::MosaicGrid;
use serde::Serialize;
use std::collections::HashMap;

/// Usage of one palette color in the mosaic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    /// Color as `#RRGGBB`
    pub hex: String,
    /// Number of tiles using the color
    pub count: usize,
    /// Code assigned to the color
    pub color_id: String,
}

/// Count tiles per color, most used first
///
/// Colors with equal counts keep the order in which they first appear in
/// the grid.
pub fn summarize_palette(grid: &MosaicGrid) -> Vec<PaletteEntry> {
    let mut entries: Vec<PaletteEntry> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for tile in grid.tiles() {
        if let Some(entry) = positions
            .get(tile.color_hex.as_str())
            .and_then(|&index| entries.get_mut(index))
        {
            entry.count += 1;
            continue;
        }

        positions.insert(tile.color_hex.as_str(), entries.len());
        entries.push(PaletteEntry {
            hex: tile.color_hex.clone(),
            count: 1,
            color_id: tile.color_id.clone(),
        });
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
