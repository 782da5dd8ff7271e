//! Tests for per-tile color averaging and source image construction

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tilemosaic::MosaicError;
    use tilemosaic::analysis::averaging::{SourceImage, average_tiles};
    use tilemosaic::math::color::Color;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    // Tests a uniform image averages to its own color
    // Verified by dividing by the tile area instead of the pixel count
    #[test]
    fn test_average_uniform() {
        let image = SourceImage::filled(20, 20, RED);
        assert_eq!(image.average_color(0, 0, 10).unwrap(), RED);
        assert_eq!(image.average_color(10, 10, 10).unwrap(), RED);
    }

    // Tests channel means truncate toward zero
    // Verified by rounding the channel means
    #[test]
    fn test_average_truncates() {
        let image = SourceImage::from_raw(2, 1, vec![0, 0, 0, 1, 3, 5]).unwrap();
        assert_eq!(image.average_color(0, 0, 2).unwrap(), Color::new(0, 1, 2));
    }

    // Tests edge tiles only average the pixels inside the image
    // Verified by counting clipped pixels as black
    #[test]
    fn test_average_clips_to_image() {
        let image = SourceImage::from_fn(3, 3, |x, y| {
            if (x, y) == (2, 2) {
                BLUE
            } else {
                RED
            }
        });
        assert_eq!(image.average_color(2, 2, 2).unwrap(), BLUE);
    }

    // Tests a region entirely outside the image yields black
    // Verified by returning an error for empty regions
    #[test]
    fn test_average_outside_is_black() {
        let image = SourceImage::filled(3, 3, RED);
        assert_eq!(image.average_color(10, 0, 2).unwrap(), Color::BLACK);
        assert_eq!(image.average_color(0, 3, 2).unwrap(), Color::BLACK);
    }

    // Tests negative starts and zero tile sizes are rejected
    // Verified by clamping negative starts to zero
    #[test]
    fn test_average_invalid_region() {
        let image = SourceImage::filled(3, 3, RED);
        assert!(matches!(
            image.average_color(-1, 0, 2),
            Err(MosaicError::InvalidRegion { x: -1, y: 0 })
        ));
        assert!(matches!(
            image.average_color(0, 0, 0),
            Err(MosaicError::InvalidDimension { .. })
        ));
    }

    // Tests tiles are averaged in scan order
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_average_tiles_order() {
        let image = SourceImage::from_fn(4, 4, |x, y| match (x < 2, y < 2) {
            (true, true) => RED,
            (false, true) => BLUE,
            (true, false) => Color::BLACK,
            (false, false) => Color::new(255, 255, 255),
        });
        let colors = average_tiles(&image, 2, 2, 2).unwrap();
        assert_eq!(
            colors,
            vec![RED, BLUE, Color::BLACK, Color::new(255, 255, 255)]
        );
    }

    // Tests raw construction validates dimensions and buffer length
    // Verified by skipping the length check
    #[test]
    fn test_from_raw_validation() {
        assert!(matches!(
            SourceImage::from_raw(2, 2, vec![0; 5]),
            Err(MosaicError::InvalidParameter { .. })
        ));
        assert!(matches!(
            SourceImage::from_raw(0, 2, Vec::new()),
            Err(MosaicError::InvalidDimension { .. })
        ));
    }

    // Tests conversion from an image buffer keeps dimensions and pixels
    // Verified by transposing the array axes
    #[test]
    fn test_from_rgb_image() {
        let mut buffer = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        buffer.put_pixel(2, 1, Rgb([9, 8, 7]));
        let image = SourceImage::from_rgb_image(&buffer);

        assert_eq!((image.width(), image.height()), (3, 2));
        assert_eq!(image.average_color(0, 0, 1).unwrap(), Color::new(1, 2, 3));
        assert_eq!(image.average_color(2, 1, 1).unwrap(), Color::new(9, 8, 7));
        assert_eq!(image.pixels().dim(), (2, 3, 3));
    }
}
