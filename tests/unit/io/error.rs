//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilemosaic::MosaicError;
    use tilemosaic::io::error::{invalid_dimension, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/out/photo_mosaic.png".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("write"));
        assert!(message.contains("photo_mosaic.png"));
    }

    // Tests errors without an underlying cause have no source
    // Verified by returning a source for every variant
    #[test]
    fn test_error_without_source() {
        assert!(MosaicError::EmptyPalette.source().is_none());
        assert!(invalid_dimension("tile_size_px", 0u32).source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("panel_width_cm", &-1.5, &"must be a positive length");

        let message = error.to_string();
        assert!(message.contains("panel_width_cm"));
        assert!(message.contains("-1.5"));
        assert!(message.contains("must be a positive length"));
    }

    // Tests hex errors name the offending input
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_hex_message() {
        let error = MosaicError::InvalidHex {
            value: "#XYZ".to_string(),
            reason: "expected six hexadecimal digits",
        };
        assert!(error.to_string().contains("'#XYZ'"));
    }

    // Tests bad input and internal failures are classified apart
    // Verified by marking every error as user error
    #[test]
    fn test_user_error_classification() {
        let user_errors = [
            MosaicError::EmptyPalette,
            MosaicError::InvalidDpi { value: 0.0 },
            MosaicError::InvalidTileSize { value: 0 },
            MosaicError::PanelRowsExceeded {
                panel_rows: 30,
                max: 26,
            },
            MosaicError::InvalidRegion { x: -1, y: 0 },
        ];
        for error in &user_errors {
            assert!(error.is_user_error(), "{error}");
        }

        let internal_errors = [
            MosaicError::GridMismatch {
                expected: 4,
                actual: 3,
            },
            MosaicError::MissingColorCode {
                hex: "#000000".to_string(),
            },
        ];
        for error in &internal_errors {
            assert!(!error.is_user_error(), "{error}");
        }
    }

    // Tests conversions from library errors
    // Verified by mapping decode failures to file system errors
    #[test]
    fn test_from_conversions() {
        let decode = image::load_from_memory(b"not an image").unwrap_err();
        assert!(matches!(
            MosaicError::from(decode),
            MosaicError::ImageDecode { .. }
        ));

        let io_error = std::io::Error::other("disk full");
        assert!(matches!(
            MosaicError::from(io_error),
            MosaicError::FileSystem { .. }
        ));
    }
}
