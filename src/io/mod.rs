//! Input/output boundary: errors, configuration, codecs and the command line

/// Command-line parsing and single-image processing
pub mod cli;
/// Default parameters and limits
pub mod configuration;
/// Error types shared by every stage
pub mod error;
/// JSON and CSV export payloads
pub mod export;
/// Image decoding, rendering and PNG encoding
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Terminal progress display
pub mod progress;
/// Combined response payload
pub mod response;
