//! Per-tile mean color sampling from source images

use crate::io::error::{MosaicError, Result, invalid_dimension, invalid_parameter};
use crate::math::color::Color;
use image::RgbImage;
use ndarray::{Array3, Axis, Slice};

/// Decoded source pixels as a (height, width, channel) array of RGB bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pixels: Array3<u8>,
}

impl SourceImage {
    /// Copy an RGB image buffer into array form
    pub fn from_rgb_image(rgb_img: &RgbImage) -> Self {
        let (width, height) = (rgb_img.width() as usize, rgb_img.height() as usize);
        let mut pixels = Array3::zeros((height, width, 3));

        for (x, y, pixel) in rgb_img.enumerate_pixels() {
            for (c, &value) in pixel.0.iter().enumerate() {
                if let Some(slot) = pixels.get_mut((y as usize, x as usize, c)) {
                    *slot = value;
                }
            }
        }

        Self { pixels }
    }

    /// Wrap raw row-major RGB bytes
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `data` does not hold
    /// exactly `width * height * 3` bytes
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 {
            return Err(invalid_dimension("image_width", width));
        }
        if height == 0 {
            return Err(invalid_dimension("image_height", height));
        }
        let len = data.len();
        let pixels = Array3::from_shape_vec((height as usize, width as usize, 3), data)
            .map_err(|e| invalid_parameter("pixel_data", &len, &e))?;
        Ok(Self { pixels })
    }

    /// An image of a single color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let channels = color.channels();
        let pixels = Array3::from_shape_fn((height as usize, width as usize, 3), |(_, _, c)| {
            channels.get(c).copied().unwrap_or(0)
        });
        Self { pixels }
    }

    /// Build an image by evaluating `pixel(x, y)` at every position
    pub fn from_fn(width: u32, height: u32, pixel: impl Fn(u32, u32) -> Color) -> Self {
        let mut pixels = Array3::zeros((height as usize, width as usize, 3));
        for y in 0..height {
            for x in 0..width {
                let channels = pixel(x, y).channels();
                for (c, &value) in channels.iter().enumerate() {
                    if let Some(slot) = pixels.get_mut((y as usize, x as usize, c)) {
                        *slot = value;
                    }
                }
            }
        }
        Self { pixels }
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.dim().1 as u32
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.dim().0 as u32
    }

    /// Underlying pixel array
    pub const fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Mean color of the tile whose top-left pixel is `(start_x, start_y)`
    ///
    /// The sampled rectangle is clipped to the image, so edge tiles average
    /// only the pixels they actually cover. Channels are averaged
    /// independently with truncating division. A rectangle that lies
    /// entirely outside the image yields black.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `start_x` or `start_y` is negative
    /// - `tile_size_px` is zero
    pub fn average_color(&self, start_x: i64, start_y: i64, tile_size_px: u32) -> Result<Color> {
        if start_x < 0 || start_y < 0 {
            return Err(MosaicError::InvalidRegion {
                x: start_x,
                y: start_y,
            });
        }
        if tile_size_px == 0 {
            return Err(invalid_dimension("tile_size_px", tile_size_px));
        }

        let (height, width, _) = self.pixels.dim();
        let clip = |start: i64, limit: usize| {
            let begin = usize::try_from(start).unwrap_or(usize::MAX).min(limit);
            let end = begin.saturating_add(tile_size_px as usize).min(limit);
            (begin, end)
        };
        let (x0, x1) = clip(start_x, width);
        let (y0, y1) = clip(start_y, height);

        let count = ((x1 - x0) * (y1 - y0)) as u64;
        if count == 0 {
            return Ok(Color::BLACK);
        }

        let region = self.pixels.slice_each_axis(|axis| match axis.axis.index() {
            0 => Slice::from(y0..y1),
            1 => Slice::from(x0..x1),
            _ => Slice::from(..),
        });
        let mut sums = [0u64; 3];
        for (c, sum) in sums.iter_mut().enumerate() {
            *sum = region
                .index_axis(Axis(2), c)
                .iter()
                .map(|&value| u64::from(value))
                .sum();
        }

        let [r, g, b] = sums.map(|sum| (sum / count) as u8);
        Ok(Color::new(r, g, b))
    }
}

/// Mean colors of every tile in scan order (y outer, x inner)
///
/// # Errors
///
/// Returns an error if `tile_size_px` is zero
pub fn average_tiles(
    image: &SourceImage,
    grid_width: u32,
    grid_height: u32,
    tile_size_px: u32,
) -> Result<Vec<Color>> {
    let mut colors = Vec::with_capacity(grid_width as usize * grid_height as usize);
    for y in 0..grid_height {
        for x in 0..grid_width {
            let start_x = i64::from(x) * i64::from(tile_size_px);
            let start_y = i64::from(y) * i64::from(tile_size_px);
            colors.push(image.average_color(start_x, start_y, tile_size_px)?);
        }
    }
    Ok(colors)
}
