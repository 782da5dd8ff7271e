//! Nearest-palette-color mapping

use crate::algorithm::palette::PaletteStrategy;
use crate::io::error::{MosaicError, Result};
use crate::math::color::{Color, nearest_index};
use std::collections::HashMap;

/// Palette color nearest to `color` by Euclidean RGB distance
///
/// On ties the color that comes first in the palette wins.
///
/// # Errors
///
/// Returns `EmptyPalette` if `palette` is empty
pub fn closest(color: Color, palette: &[Color]) -> Result<Color> {
    nearest_index(color, palette)
        .and_then(|index| palette.get(index).copied())
        .ok_or(MosaicError::EmptyPalette)
}

/// Resolve every tile color against the palette
///
/// The dynamic strategy keeps colors unchanged; the palette is not consulted.
///
/// # Errors
///
/// Returns `EmptyPalette` if mapping is needed and `palette` is empty
pub fn map_colors(
    strategy: &PaletteStrategy,
    colors: &[Color],
    palette: &[Color],
) -> Result<Vec<Color>> {
    if strategy.is_identity() {
        return Ok(colors.to_vec());
    }
    if palette.is_empty() {
        return Err(MosaicError::EmptyPalette);
    }

    // Tiles repeat colors heavily; resolve each distinct color once
    let mut resolved: HashMap<Color, Color> = HashMap::new();
    colors
        .iter()
        .map(|&color| match resolved.get(&color) {
            Some(&mapped) => Ok(mapped),
            None => {
                let mapped = closest(color, palette)?;
                resolved.insert(color, mapped);
                Ok(mapped)
            }
        })
        .collect()
}
