//! Palette construction strategies

use crate::algorithm::clustering::quantize;
use crate::io::configuration::{DEFAULT_PALETTE_SIZE, DEFAULT_SEED};
use crate::io::error::{MosaicError, Result};
use crate::math::color::{Color, dedup_preserving_order};

/// How the palette for a mosaic is chosen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaletteStrategy {
    /// Keep every tile's own average color
    #[default]
    Dynamic,
    /// Snap tiles to a caller-supplied list of hex colors
    Custom(Vec<String>),
    /// Snap tiles to a palette found by centroid clustering
    Clustering {
        /// Target number of palette colors
        palette_size: usize,
        /// Seed for the initial centroid shuffle
        seed: u64,
    },
}

impl PaletteStrategy {
    /// Clustering with the given palette size and the default seed
    pub const fn clustering(palette_size: usize) -> Self {
        Self::Clustering {
            palette_size,
            seed: DEFAULT_SEED,
        }
    }

    /// Clustering with the default palette size and seed
    pub const fn default_clustering() -> Self {
        Self::clustering(DEFAULT_PALETTE_SIZE)
    }

    /// Name of the strategy as used on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::Custom(_) => "custom",
            Self::Clustering { .. } => "kmeans",
        }
    }

    /// Whether tile colors pass through unchanged
    pub const fn is_identity(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

/// Distinct tile colors in first-occurrence order
pub fn dynamic_palette(colors: &[Color]) -> Vec<Color> {
    dedup_preserving_order(colors)
}

/// Parse a list of hex colors, dropping repeats
///
/// # Errors
///
/// Returns an error if:
/// - `hexes` is empty
/// - Any entry is not a valid hex color (the error names the entry)
pub fn parse_custom_palette<S: AsRef<str>>(hexes: &[S]) -> Result<Vec<Color>> {
    if hexes.is_empty() {
        return Err(MosaicError::EmptyPalette);
    }

    let parsed = hexes
        .iter()
        .map(|hex| Color::from_hex(hex.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(dedup_preserving_order(&parsed))
}

/// Build the palette for the given tile colors
///
/// # Errors
///
/// Propagates parse errors from custom palettes and validation errors from
/// clustering
pub fn build_palette(strategy: &PaletteStrategy, colors: &[Color]) -> Result<Vec<Color>> {
    match strategy {
        PaletteStrategy::Dynamic => Ok(dynamic_palette(colors)),
        PaletteStrategy::Custom(hexes) => parse_custom_palette(hexes),
        PaletteStrategy::Clustering { palette_size, seed } => {
            quantize(colors, *palette_size, *seed)
        }
    }
}
