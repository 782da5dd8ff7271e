//! Image decoding, mosaic rendering and PNG encoding

use crate::analysis::averaging::SourceImage;
use crate::io::error::{MosaicError, Result, invalid_dimension, invalid_parameter};
use crate::math::color::Color;
use crate::spatial::grid::Tile;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Load and decode an image file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a supported image
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(SourceImage::from_rgb_image(&img.to_rgb8()))
}

/// Decode an encoded image (PNG, JPEG, ...) held in memory
///
/// # Errors
///
/// Returns `ImageDecode` if the bytes are not a supported image
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(SourceImage::from_rgb_image(&img.to_rgb8()))
}

/// Decode a base64 image payload, with or without a `data:` URI prefix
///
/// # Errors
///
/// Returns an error if:
/// - The payload is empty
/// - The payload is not valid base64
/// - The decoded bytes are not a supported image
pub fn decode_base64_image(payload: &str) -> Result<SourceImage> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Err(MosaicError::EmptyInput {
            collection: "image data",
        });
    }

    let encoded = trimmed
        .split_once(',')
        .map_or(trimmed, |(_, data)| data);
    let bytes = STANDARD.decode(encoded)?;
    decode_image(&bytes)
}

/// Paint every tile as a solid square of its color
///
/// The buffer is `grid_width * tile_size_px` by `grid_height * tile_size_px`
/// pixels, fully opaque. Tiles outside the grid are clipped away.
///
/// # Errors
///
/// Returns an error if:
/// - `tiles` is empty
/// - Any grid dimension or the tile size is zero, or the buffer would not
///   fit in `u32` pixel coordinates or an addressable RGBA buffer
/// - A tile's hex color cannot be parsed (the error names the tile)
pub fn render_mosaic(
    tiles: &[Tile],
    grid_width: u32,
    grid_height: u32,
    tile_size_px: u32,
) -> Result<RgbaImage> {
    if tiles.is_empty() {
        return Err(MosaicError::EmptyInput {
            collection: "tiles",
        });
    }
    if grid_width == 0 {
        return Err(invalid_dimension("grid_width", grid_width));
    }
    if grid_height == 0 {
        return Err(invalid_dimension("grid_height", grid_height));
    }
    if tile_size_px == 0 {
        return Err(invalid_dimension("tile_size_px", tile_size_px));
    }

    let width = grid_width.checked_mul(tile_size_px).ok_or_else(|| {
        invalid_parameter("grid_width", &grid_width, &"rendered width overflows")
    })?;
    let height = grid_height.checked_mul(tile_size_px).ok_or_else(|| {
        invalid_parameter("grid_height", &grid_height, &"rendered height overflows")
    })?;
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| {
            invalid_parameter(
                "tile_size_px",
                &tile_size_px,
                &"rendered buffer does not fit in memory",
            )
        })?;

    let mut img = RgbaImage::new(width, height);

    for tile in tiles {
        let Ok(color) = Color::from_hex(&tile.color_hex) else {
            return Err(MosaicError::InvalidTileData {
                x: tile.x,
                y: tile.y,
                hex: tile.color_hex.clone(),
            });
        };
        let pixel = Rgba([color.r, color.g, color.b, u8::MAX]);

        let start_x = tile.x.saturating_mul(tile_size_px).min(width);
        let start_y = tile.y.saturating_mul(tile_size_px).min(height);
        let end_x = start_x.saturating_add(tile_size_px).min(width);
        let end_y = start_y.saturating_add(tile_size_px).min(height);

        for y in start_y..end_y {
            for x in start_x..end_x {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    Ok(img)
}

/// Encode a rendered mosaic as PNG bytes
///
/// # Errors
///
/// Returns `ImageEncode` if the encoder fails
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| MosaicError::ImageEncode { source: e })?;
    Ok(bytes)
}

/// Encode a rendered mosaic as a `data:image/png;base64,` URI
///
/// # Errors
///
/// Returns `ImageEncode` if the encoder fails
pub fn to_data_uri(img: &RgbaImage) -> Result<String> {
    let bytes = encode_png(img)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}

/// Save a rendered mosaic as a PNG file, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
