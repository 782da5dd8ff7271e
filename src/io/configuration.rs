//! Pipeline constants and runtime configuration defaults

// Clustering
/// Fixed seed for reproducible palette clustering
pub const DEFAULT_SEED: u64 = 42;
/// Palette size used when clustering without an explicit size
pub const DEFAULT_PALETTE_SIZE: usize = 256;
/// Smallest palette size accepted on the command line
pub const MIN_PALETTE_SIZE: usize = 16;
/// Largest palette size accepted on the command line
pub const MAX_PALETTE_SIZE: usize = 512;
/// Upper bound on centroid refinement passes
pub const MAX_CLUSTER_ITERATIONS: usize = 20;

// Tile sizing
/// Tile edge length in pixels when none is given
pub const DEFAULT_TILE_SIZE: u32 = 10;
/// Largest tile edge length accepted on the command line
pub const MAX_TILE_SIZE: u32 = 1000;
/// Resolution assumed when the caller supplies none
pub const DEFAULT_DPI: f64 = 96.0;
/// Centimeters per inch, for DPI conversions
pub const CM_PER_INCH: f64 = 2.54;

// Panels are labelled with a single letter per row
/// Maximum number of panel rows that can be labelled
pub const MAX_PANEL_ROWS: usize = 26;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
