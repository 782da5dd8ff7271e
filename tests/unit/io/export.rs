//! Tests for JSON and CSV export payloads

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use tilemosaic::algorithm::codes::assign_color_codes;
    use tilemosaic::io::export::{
        TILE_ID_CSV_HEADER, build_exports, grid_json, panels_json, tile_id_csv, tile_id_json,
    };
    use tilemosaic::math::color::Color;
    use tilemosaic::spatial::grid::{MosaicGrid, build_grid};
    use tilemosaic::spatial::panels::build_panels;

    fn red_blue_grid() -> MosaicGrid {
        let colors = [Color::new(255, 0, 0), Color::new(0, 0, 255)];
        let codes = assign_color_codes(["#FF0000", "#0000FF"]).unwrap();
        build_grid(2, 1, &colors, &codes).unwrap()
    }

    // Tests the CSV has a header and one line per tile
    // Verified by swapping row and column in each line
    #[test]
    fn test_tile_id_csv() {
        let grid = red_blue_grid();
        let csv = tile_id_csv(grid.tiles());

        assert_eq!(csv, "row,column,colorHex,tileId\n1,1,#FF0000,R01\n1,2,#0000FF,B01\n");
        assert_eq!(csv.lines().next(), Some(TILE_ID_CSV_HEADER));
    }

    // Tests an empty tile list yields only the header
    // Verified by omitting the header for empty input
    #[test]
    fn test_tile_id_csv_empty() {
        assert_eq!(tile_id_csv(&[]), format!("{TILE_ID_CSV_HEADER}\n"));
    }

    // Tests the grid JSON carries dimensions and tile ids
    // Verified by dropping the tile list
    #[test]
    fn test_grid_json() {
        let grid = red_blue_grid();
        let value: Value = serde_json::from_str(&grid_json(&grid).unwrap()).unwrap();

        assert_eq!(value["width"], 2);
        assert_eq!(value["height"], 1);
        assert_eq!(value["tiles"].as_array().unwrap().len(), 2);
        assert_eq!(value["tiles"][1]["column"], 2);
        assert_eq!(value["tiles"][1]["colorHex"], "#0000FF");
        assert_eq!(value["tiles"][1]["colorId"], "B01");
        assert_eq!(value["tiles"][1]["tileId"], "B01");
    }

    // Tests the tile id JSON uses camelCase records
    // Verified by serializing snake_case keys
    #[test]
    fn test_tile_id_json() {
        let grid = red_blue_grid();
        let value: Value = serde_json::from_str(&tile_id_json(grid.tiles()).unwrap()).unwrap();

        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["row"], 1);
        assert_eq!(records[0]["colorHex"], "#FF0000");
        assert_eq!(records[0]["tileId"], "R01");
        assert!(records[0].get("color_hex").is_none());
    }

    // Tests the four exports are built together
    // Verified by leaving the panel export empty
    #[test]
    fn test_build_exports() {
        let grid = red_blue_grid();
        let panels = build_panels(&grid, None, 96.0, 10).unwrap();
        let exports = build_exports(&grid, &panels).unwrap();

        assert_eq!(exports.panels_json, panels_json(&panels).unwrap());
        assert_eq!(exports.tile_id_csv, tile_id_csv(grid.tiles()));

        let panel_value: Value = serde_json::from_str(&exports.panels_json).unwrap();
        assert_eq!(panel_value[0]["label"], "Panel A1");

        let value = serde_json::to_value(&exports).unwrap();
        assert!(value.get("gridJson").is_some());
        assert!(value.get("tileIdCsv").is_some());
    }
}
