//! Tests for pipeline configuration constants

#[cfg(test)]
mod tests {
    use tilemosaic::io::configuration::{
        CM_PER_INCH, DEFAULT_DPI, DEFAULT_PALETTE_SIZE, DEFAULT_SEED, DEFAULT_TILE_SIZE,
        MAX_CLUSTER_ITERATIONS, MAX_PALETTE_SIZE, MAX_PANEL_ROWS, MAX_TILE_SIZE,
        MIN_PALETTE_SIZE, OUTPUT_SUFFIX,
    };

    // Tests the default palette size lies within the accepted range
    // Verified by raising the default above the maximum
    #[test]
    fn test_palette_size_bounds() {
        assert_eq!(MIN_PALETTE_SIZE, 16);
        assert_eq!(MAX_PALETTE_SIZE, 512);
        assert!((MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&DEFAULT_PALETTE_SIZE));
    }

    // Tests clustering defaults
    // Verified by changing the seed
    #[test]
    fn test_clustering_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(MAX_CLUSTER_ITERATIONS, 20);
    }

    // Tests tile sizing defaults
    // Verified by setting a zero default tile size
    #[test]
    fn test_tile_defaults() {
        assert_eq!(DEFAULT_TILE_SIZE, 10);
        assert!((1..=MAX_TILE_SIZE).contains(&DEFAULT_TILE_SIZE));
        assert!((DEFAULT_DPI - 96.0).abs() < f64::EPSILON);
        assert!((CM_PER_INCH - 2.54).abs() < f64::EPSILON);
    }

    // Tests panel rows match the single-letter alphabet
    // Verified by allowing 27 rows
    #[test]
    fn test_panel_rows() {
        assert_eq!(MAX_PANEL_ROWS, 26);
    }

    // Tests output suffix format
    // Verified by changing suffix string
    #[test]
    fn test_output_suffix() {
        assert_eq!(OUTPUT_SUFFIX, "_mosaic");
        assert!(OUTPUT_SUFFIX.starts_with('_'));
    }
}
