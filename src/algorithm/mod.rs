//! Color-processing algorithms and the pipeline that drives them

/// Centroid clustering for fixed-size palettes
pub mod clustering;
/// Hue-family color codes
pub mod codes;
/// Nearest-palette-color mapping
pub mod mapping;
/// Palette construction strategies
pub mod palette;
/// End-to-end processing of one request
pub mod pipeline;
