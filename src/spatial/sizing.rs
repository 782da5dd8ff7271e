//! Tile grid dimensions and physical tile sizing
//!
//! A mosaic is always laid out on square pixel tiles. Physical tile sizes in
//! centimeters are converted through the image DPI; when both a width and a
//! height are requested, the square tile takes their mean pixel size.

use crate::io::configuration::MAX_TILE_SIZE;
use crate::io::error::{Result, invalid_dimension, invalid_parameter};
use crate::math::units::{cm_to_px, px_to_cm, validate_dpi};
use serde::Serialize;

/// Tile sizing in both physical and pixel units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSizeInfo {
    /// Resolution used for the cm/px conversion
    pub dpi: f64,
    /// Tile width in centimeters
    pub tile_width_cm: f64,
    /// Tile height in centimeters
    pub tile_height_cm: f64,
    /// Edge length of the square rendering tile in pixels
    #[serde(rename = "tileSizePixels")]
    pub tile_size_px: u32,
}

/// Number of tiles needed to cover an image, partial edge tiles included
///
/// # Errors
///
/// Returns `InvalidDimension` if any argument is zero
pub fn calculate_grid(
    image_width: u32,
    image_height: u32,
    tile_size_px: u32,
) -> Result<(u32, u32)> {
    if image_width == 0 {
        return Err(invalid_dimension("image_width", image_width));
    }
    if image_height == 0 {
        return Err(invalid_dimension("image_height", image_height));
    }
    if tile_size_px == 0 {
        return Err(invalid_dimension("tile_size_px", tile_size_px));
    }

    Ok((
        image_width.div_ceil(tile_size_px),
        image_height.div_ceil(tile_size_px),
    ))
}

/// Resolve the square tile size from a pixel fallback and optional physical size
///
/// A single physical dimension is used for both axes.
///
/// # Errors
///
/// Returns an error if:
/// - `dpi` is not a positive finite number
/// - `tile_size_px_fallback` is zero or above `MAX_TILE_SIZE`
/// - The physical size resolves to more than `MAX_TILE_SIZE` pixels
/// - A supplied centimeter value is not positive
pub fn calculate_tile_size(
    tile_size_px_fallback: u32,
    tile_width_cm: Option<f64>,
    tile_height_cm: Option<f64>,
    dpi: f64,
) -> Result<TileSizeInfo> {
    let dpi = validate_dpi(dpi)?;
    if tile_size_px_fallback == 0 || tile_size_px_fallback > MAX_TILE_SIZE {
        return Err(invalid_dimension("tile_size_px", tile_size_px_fallback));
    }
    for (parameter, value) in [
        ("tile_width_cm", tile_width_cm),
        ("tile_height_cm", tile_height_cm),
    ] {
        if let Some(cm) = value.filter(|cm| !(cm.is_finite() && *cm > 0.0)) {
            return Err(invalid_parameter(parameter, &cm, &"must be a positive length"));
        }
    }

    let (width_cm, height_cm) = match (tile_width_cm, tile_height_cm) {
        (Some(w), Some(h)) => (w, h),
        (Some(side), None) | (None, Some(side)) => (side, side),
        (None, None) => {
            let side = px_to_cm(tile_size_px_fallback, dpi);
            return Ok(TileSizeInfo {
                dpi,
                tile_width_cm: side,
                tile_height_cm: side,
                tile_size_px: tile_size_px_fallback,
            });
        }
    };

    let width_px = cm_to_px(width_cm, dpi);
    let height_px = cm_to_px(height_cm, dpi);
    let mean_px = ((f64::from(width_px) + f64::from(height_px)) / 2.0).round() as u32;
    if mean_px > MAX_TILE_SIZE {
        return Err(invalid_dimension("tile_size_px", mean_px));
    }

    Ok(TileSizeInfo {
        dpi,
        tile_width_cm: width_cm,
        tile_height_cm: height_cm,
        tile_size_px: mean_px.max(1),
    })
}
