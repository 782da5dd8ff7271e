//! Error types for mosaic processing and the I/O boundary

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// A width, height or tile size was zero
    InvalidDimension {
        /// Name of the offending dimension
        parameter: &'static str,
        /// Provided value
        value: u64,
    },

    /// DPI was not a positive finite number
    InvalidDpi {
        /// Provided DPI value
        value: f64,
    },

    /// A sampling rectangle started at negative coordinates
    InvalidRegion {
        /// Requested start column in pixels
        x: i64,
        /// Requested start row in pixels
        y: i64,
    },

    /// A color string is not a valid `#RRGGBB` value
    InvalidHex {
        /// The offending input, verbatim
        value: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A palette with no colors was supplied
    EmptyPalette,

    /// A required collection was empty
    EmptyInput {
        /// Name of the empty collection
        collection: &'static str,
    },

    /// Clustering was asked for a palette of size zero
    InvalidPaletteSize {
        /// Requested palette size
        value: usize,
    },

    /// Panel partitioning was given a zero tile size
    InvalidTileSize {
        /// Provided tile size in pixels
        value: u32,
    },

    /// A tile could not be painted during rendering
    InvalidTileData {
        /// Zero-based tile column
        x: u32,
        /// Zero-based tile row
        y: u32,
        /// Color string carried by the tile
        hex: String,
    },

    /// Request parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The panel layout needs more rows than single-letter labels can name
    PanelRowsExceeded {
        /// Panel rows the layout would need
        panel_rows: usize,
        /// Largest supported number of panel rows
        max: usize,
    },

    /// A mapped color has no entry in the color code table
    ///
    /// Mapping and code assignment disagree; this is a defect, not bad input.
    MissingColorCode {
        /// Hex value with no assigned code
        hex: String,
    },

    /// The number of tile colors does not match the grid size
    GridMismatch {
        /// Tiles implied by the grid dimensions
        expected: usize,
        /// Colors actually supplied
        actual: usize,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to decode an in-memory image payload
    ImageDecode {
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to encode the rendered image in memory
    ImageEncode {
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Image payload was not valid base64
    Base64Decode {
        /// Underlying decoding error
        source: base64::DecodeError,
    },

    /// An export payload could not be serialized
    Serialization {
        /// Which payload was being produced
        payload: &'static str,
        /// Underlying serializer error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl MosaicError {
    /// Whether the error was caused by the caller's input rather than a defect
    /// or an environment failure
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::InvalidDimension { .. }
            | Self::InvalidDpi { .. }
            | Self::InvalidRegion { .. }
            | Self::InvalidHex { .. }
            | Self::EmptyPalette
            | Self::EmptyInput { .. }
            | Self::InvalidPaletteSize { .. }
            | Self::InvalidTileSize { .. }
            | Self::InvalidTileData { .. }
            | Self::InvalidParameter { .. }
            | Self::PanelRowsExceeded { .. }
            | Self::ImageLoad { .. }
            | Self::ImageDecode { .. }
            | Self::Base64Decode { .. } => true,
            Self::MissingColorCode { .. }
            | Self::GridMismatch { .. }
            | Self::ImageExport { .. }
            | Self::ImageEncode { .. }
            | Self::Serialization { .. }
            | Self::FileSystem { .. } => false,
        }
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { parameter, value } => {
                write!(f, "Invalid dimension '{parameter}' = {value}: must be positive")
            }
            Self::InvalidDpi { value } => {
                write!(f, "Invalid DPI {value}: must be a positive number")
            }
            Self::InvalidRegion { x, y } => {
                write!(f, "Invalid region start ({x}, {y}): coordinates cannot be negative")
            }
            Self::InvalidHex { value, reason } => {
                write!(f, "Invalid hex color '{value}': {reason}")
            }
            Self::EmptyPalette => write!(f, "Palette cannot be empty"),
            Self::EmptyInput { collection } => write!(f, "Input {collection} cannot be empty"),
            Self::InvalidPaletteSize { value } => {
                write!(f, "Invalid palette size {value}: must be positive")
            }
            Self::InvalidTileSize { value } => {
                write!(f, "Invalid tile size {value}: must be positive")
            }
            Self::InvalidTileData { x, y, hex } => {
                write!(f, "Failed to render tile at ({x}, {y}): invalid color '{hex}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PanelRowsExceeded { panel_rows, max } => {
                write!(
                    f,
                    "Panel layout needs {panel_rows} panel rows but labels support at most {max}"
                )
            }
            Self::MissingColorCode { hex } => {
                write!(f, "No color code assigned to mapped color {hex}")
            }
            Self::GridMismatch { expected, actual } => {
                write!(f, "Grid expects {expected} tile colors, got {actual}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageDecode { source } => write!(f, "Failed to decode image data: {source}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::ImageEncode { source } => write!(f, "Failed to encode image: {source}"),
            Self::Base64Decode { source } => write!(f, "Invalid base64 image data: {source}"),
            Self::Serialization { payload, source } => {
                write!(f, "Failed to serialize {payload}: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::ImageDecode { source }
            | Self::ImageExport { source, .. }
            | Self::ImageEncode { source } => Some(source),
            Self::Base64Decode { source } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode { source: err }
    }
}

impl From<base64::DecodeError> for MosaicError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64Decode { source: err }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimension error for a zero-sized input
pub fn invalid_dimension(parameter: &'static str, value: impl Into<u64>) -> MosaicError {
    MosaicError::InvalidDimension {
        parameter,
        value: value.into(),
    }
}
