//! Mathematical utilities for color and unit handling

/// RGB color value type, hex parsing and distance
pub mod color;
/// Centimeter and pixel conversions
pub mod units;
