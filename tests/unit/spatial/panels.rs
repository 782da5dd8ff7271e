//! Tests for panel labelling and partitioning

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tilemosaic::MosaicError;
    use tilemosaic::algorithm::codes::assign_color_codes;
    use tilemosaic::math::color::Color;
    use tilemosaic::spatial::grid::{MosaicGrid, build_grid};
    use tilemosaic::spatial::panels::{PanelSize, build_panels, panel_label, tiles_per_panel};

    fn uniform_grid(width: u32, height: u32) -> MosaicGrid {
        let color = Color::new(200, 30, 30);
        let colors = vec![color; (width * height) as usize];
        let hex = color.to_hex();
        let codes = assign_color_codes([hex.as_str()]).unwrap();
        build_grid(width, height, &colors, &codes).unwrap()
    }

    // 1.1 cm at 254 DPI is 110 px, which holds five 20 px tiles
    const FIVE_TILE_PANEL: PanelSize = PanelSize {
        width_cm: 1.1,
        height_cm: 1.1,
    };

    // Tests labels combine a row letter with a one-based column
    // Verified by starting columns at zero
    #[test]
    fn test_panel_label() {
        assert_eq!(panel_label(0, 0).unwrap(), "Panel A1");
        assert_eq!(panel_label(1, 2).unwrap(), "Panel B3");
        assert_eq!(panel_label(25, 9).unwrap(), "Panel Z10");
    }

    // Tests rows beyond Z are reported instead of wrapping
    // Verified by wrapping the row letter modulo 26
    #[test]
    fn test_panel_label_rows_exceeded() {
        let err = panel_label(26, 0).unwrap_err();
        assert!(matches!(
            err,
            MosaicError::PanelRowsExceeded {
                panel_rows: 27,
                max: 26
            }
        ));
    }

    // Tests whole tiles per panel edge with a floor of one
    // Verified by rounding instead of flooring
    #[test]
    fn test_tiles_per_panel() {
        assert_eq!(tiles_per_panel(1.1, 254.0, 20), 5);
        assert_eq!(tiles_per_panel(1.0, 254.0, 30), 3);
        assert_eq!(tiles_per_panel(0.01, 96.0, 10), 1);
    }

    // Tests a 10x10 grid splits into four 5x5 panels
    // Verified by swapping panel row and column in the label
    #[test]
    fn test_build_panels_even_split() {
        let grid = uniform_grid(10, 10);
        let panels = build_panels(&grid, Some(FIVE_TILE_PANEL), 254.0, 20).unwrap();

        let labels: Vec<&str> = panels.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Panel A1", "Panel A2", "Panel B1", "Panel B2"]);

        for panel in &panels {
            assert_eq!((panel.tiles_wide, panel.tiles_high), (5, 5));
            assert_eq!(panel.tiles.len(), 25);
        }

        let b2 = &panels[3];
        assert_eq!((b2.panel_row, b2.panel_column), (1, 1));
        assert_eq!((b2.start_row, b2.start_column), (6, 6));
        let first = &b2.tiles[0];
        assert_eq!((first.local_row, first.local_column), (1, 1));
        assert_eq!((first.global_row, first.global_column), (6, 6));
    }

    // Tests edge panels are cut short by the grid boundary
    // Verified by padding edge panels to full size
    #[test]
    fn test_build_panels_partial_edges() {
        let grid = uniform_grid(7, 3);
        let panels = build_panels(&grid, Some(FIVE_TILE_PANEL), 254.0, 20).unwrap();

        assert_eq!(panels.len(), 2);
        assert_eq!((panels[0].tiles_wide, panels[0].tiles_high), (5, 3));
        assert_eq!((panels[1].tiles_wide, panels[1].tiles_high), (2, 3));
        assert_eq!(panels[1].start_column, 6);
        assert_eq!(panels[1].tiles.len(), 6);

        let last = panels[1].tiles.last().unwrap();
        assert_eq!((last.local_row, last.local_column), (3, 2));
        assert_eq!((last.global_row, last.global_column), (3, 7));
    }

    // Tests every grid tile lands in exactly one panel
    // Verified by overlapping adjacent panels by one tile
    #[test]
    fn test_build_panels_cover_grid_once() {
        let grid = uniform_grid(13, 11);
        let panels = build_panels(&grid, Some(FIVE_TILE_PANEL), 254.0, 20).unwrap();

        let mut seen = HashSet::new();
        for panel in &panels {
            for tile in &panel.tiles {
                assert!(seen.insert((tile.global_row, tile.global_column)));
                assert_eq!(tile.color_id, "R01");
            }
        }
        assert_eq!(seen.len(), 13 * 11);
        assert_eq!(panels.len(), 9);
    }

    // Tests rectangular panels use separate tile counts per axis
    // Verified by using the width for both axes
    #[test]
    fn test_build_panels_rectangular() {
        let grid = uniform_grid(10, 10);
        let size = PanelSize::from_dimensions(Some(1.1), Some(2.2)).unwrap();
        let panels = build_panels(&grid, Some(size), 254.0, 20).unwrap();

        assert_eq!(panels.len(), 2);
        assert_eq!((panels[0].tiles_wide, panels[0].tiles_high), (5, 10));
    }

    // Tests the whole grid is one panel without a panel size
    // Verified by returning no panels
    #[test]
    fn test_build_panels_single() {
        let grid = uniform_grid(4, 3);
        let panels = build_panels(&grid, None, 96.0, 10).unwrap();

        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].label, "Panel A1");
        assert_eq!((panels[0].tiles_wide, panels[0].tiles_high), (4, 3));
        assert_eq!(panels[0].tiles.len(), 12);
    }

    // Tests a single panel dimension is applied to both axes
    // Verified by leaving the missing dimension unset
    #[test]
    fn test_panel_size_from_dimensions() {
        let square = PanelSize::from_dimensions(Some(30.0), None).unwrap();
        assert!((square.height_cm - 30.0).abs() < f64::EPSILON);
        let square = PanelSize::from_dimensions(None, Some(12.0)).unwrap();
        assert!((square.width_cm - 12.0).abs() < f64::EPSILON);
        assert!(PanelSize::from_dimensions(None, None).is_none());
    }

    // Tests invalid tile sizes and panel lengths are rejected
    // Verified by removing the tile size check
    #[test]
    fn test_build_panels_invalid_inputs() {
        let grid = uniform_grid(2, 2);
        assert!(matches!(
            build_panels(&grid, None, 96.0, 0),
            Err(MosaicError::InvalidTileSize { value: 0 })
        ));

        let negative = PanelSize {
            width_cm: -1.0,
            height_cm: 5.0,
        };
        assert!(matches!(
            build_panels(&grid, Some(negative), 96.0, 10),
            Err(MosaicError::InvalidParameter {
                parameter: "panel_width_cm",
                ..
            })
        ));
        assert!(matches!(
            build_panels(&grid, Some(FIVE_TILE_PANEL), 0.0, 10),
            Err(MosaicError::InvalidDpi { .. })
        ));
    }

    // Tests layouts needing more than 26 panel rows fail
    // Verified by removing the row limit check
    #[test]
    fn test_build_panels_too_many_rows() {
        let grid = uniform_grid(1, 27);
        let tiny = PanelSize {
            width_cm: 0.01,
            height_cm: 0.01,
        };
        let err = build_panels(&grid, Some(tiny), 96.0, 10).unwrap_err();
        assert!(matches!(
            err,
            MosaicError::PanelRowsExceeded { panel_rows: 27, .. }
        ));
        assert!(err.is_user_error());
    }

    // Tests panel serialization uses camelCase keys
    // Verified by removing the rename attribute
    #[test]
    fn test_panel_serialization() {
        let grid = uniform_grid(1, 1);
        let panels = build_panels(&grid, None, 96.0, 10).unwrap();
        let value = serde_json::to_value(&panels[0]).unwrap();

        assert_eq!(value["label"], "Panel A1");
        assert_eq!(value["tilesWide"], 1);
        assert_eq!(value["tiles"][0]["globalRow"], 1);
        assert_eq!(value["tiles"][0]["tileId"], "R01");
    }
}
