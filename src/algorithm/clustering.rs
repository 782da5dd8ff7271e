//! Iterative centroid clustering for fixed-size palettes
//!
//! Centroids start as a seeded shuffle of the input colors and are refined
//! by alternating nearest-centroid assignment with per-channel mean updates.
//! The seed is an explicit argument, so equal inputs and seeds always give
//! equal palettes.

use crate::io::configuration::MAX_CLUSTER_ITERATIONS;
use crate::io::error::{MosaicError, Result};
use crate::math::color::{Color, dedup_preserving_order, nearest_index};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::debug;

/// Running channel sums for one cluster
#[derive(Debug, Clone, Copy, Default)]
struct ClusterAccumulator {
    sums: [u64; 3],
    count: u64,
}

impl ClusterAccumulator {
    fn add(&mut self, color: Color) {
        for (sum, value) in self.sums.iter_mut().zip(color.channels()) {
            *sum += u64::from(value);
        }
        self.count += 1;
    }

    // Truncating per-channel mean, None for an empty cluster
    fn mean(&self) -> Option<Color> {
        (self.count > 0).then(|| {
            let [r, g, b] = self.sums.map(|sum| (sum / self.count) as u8);
            Color::new(r, g, b)
        })
    }
}

/// Reduce `colors` to at most `palette_size` representative colors
///
/// When the input already has no more distinct colors than requested they
/// are returned as-is, deduplicated in first-occurrence order. Otherwise up
/// to [`MAX_CLUSTER_ITERATIONS`] refinement passes run, stopping early once
/// no centroid moves. Collapsed or empty clusters can leave the result
/// smaller than `palette_size`.
///
/// # Errors
///
/// Returns an error if:
/// - `palette_size` is zero
/// - `colors` is empty
pub fn quantize(colors: &[Color], palette_size: usize, seed: u64) -> Result<Vec<Color>> {
    if palette_size == 0 {
        return Err(MosaicError::InvalidPaletteSize {
            value: palette_size,
        });
    }
    if colors.is_empty() {
        return Err(MosaicError::EmptyInput {
            collection: "colors",
        });
    }

    let distinct = dedup_preserving_order(colors);
    if distinct.len() <= palette_size {
        debug!(
            distinct = distinct.len(),
            palette_size, "Distinct colors fit the palette, skipping clustering"
        );
        return Ok(distinct);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids = colors.to_vec();
    centroids.shuffle(&mut rng);
    centroids.truncate(palette_size);

    for iteration in 1..=MAX_CLUSTER_ITERATIONS {
        let mut clusters = vec![ClusterAccumulator::default(); centroids.len()];
        for &color in colors {
            if let Some(cluster) =
                nearest_index(color, &centroids).and_then(|index| clusters.get_mut(index))
            {
                cluster.add(color);
            }
        }

        let mut changed = false;
        for (centroid, cluster) in centroids.iter_mut().zip(&clusters) {
            if let Some(mean) = cluster.mean().filter(|mean| mean != centroid) {
                *centroid = mean;
                changed = true;
            }
        }

        if !changed {
            debug!(iteration, "Centroids converged");
            break;
        }
    }

    Ok(dedup_preserving_order(&centroids))
}
