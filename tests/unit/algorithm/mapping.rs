//! Tests for nearest-palette-color mapping

#[cfg(test)]
mod tests {
    use tilemosaic::MosaicError;
    use tilemosaic::algorithm::mapping::{closest, map_colors};
    use tilemosaic::algorithm::palette::PaletteStrategy;
    use tilemosaic::math::color::Color;

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);

    // Tests the nearest palette color is chosen
    // Verified by choosing the farthest color
    #[test]
    fn test_closest() {
        let palette = [Color::BLACK, RED];
        assert_eq!(closest(Color::new(200, 10, 10), &palette).unwrap(), RED);
        assert_eq!(closest(Color::new(20, 10, 10), &palette).unwrap(), Color::BLACK);
    }

    // Tests the earlier palette entry wins a tie
    // Verified by preferring the later entry
    #[test]
    fn test_closest_tie() {
        let palette = [Color::new(0, 10, 10), Color::new(20, 10, 10)];
        assert_eq!(
            closest(Color::new(10, 10, 10), &palette).unwrap(),
            Color::new(0, 10, 10)
        );
    }

    // Tests an empty palette is an error
    // Verified by returning black for an empty palette
    #[test]
    fn test_closest_empty_palette() {
        assert!(matches!(
            closest(RED, &[]),
            Err(MosaicError::EmptyPalette)
        ));
    }

    // Tests the dynamic strategy leaves colors untouched
    // Verified by mapping through the palette for every strategy
    #[test]
    fn test_map_colors_dynamic_identity() {
        let colors = [Color::new(1, 2, 3), Color::new(4, 5, 6)];
        let mapped = map_colors(&PaletteStrategy::Dynamic, &colors, &[]).unwrap();
        assert_eq!(mapped, colors.to_vec());
    }

    // Tests every mapped color is a palette member
    // Verified by returning the input colors for custom palettes
    #[test]
    fn test_map_colors_custom() {
        let strategy = PaletteStrategy::Custom(vec!["#FF0000".into(), "#00FF00".into()]);
        let colors = [
            Color::new(250, 5, 5),
            Color::new(5, 240, 5),
            Color::new(250, 5, 5),
        ];
        let mapped = map_colors(&strategy, &colors, &[RED, GREEN]).unwrap();
        assert_eq!(mapped, vec![RED, GREEN, RED]);
    }

    // Tests mapping with an empty palette fails for non-dynamic strategies
    // Verified by skipping the palette check
    #[test]
    fn test_map_colors_empty_palette() {
        assert!(matches!(
            map_colors(&PaletteStrategy::clustering(16), &[RED], &[]),
            Err(MosaicError::EmptyPalette)
        ));
    }
}
