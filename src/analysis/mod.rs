//! Analysis of source pixels and finished grids

/// Per-tile mean color sampling
pub mod averaging;
/// Palette usage statistics
pub mod summary;
