//! Statistical connection relation between block pairs
//!
//! A pair is connected when its test statistic falls below the chi-squared
//! significance threshold (similarity that strong occurs by chance less
//! than 1% of the time) and the pair does not spatially overlap.

use crate::math::probability::chi_squared_quantile;
use ndarray::{Array2, Zip};

/// Per-pair false-positive rate for the significance test
pub const SIGNIFICANCE_LEVEL: f64 = 0.01;

/// Chi-squared quantile separating chance similarity from shared origin
///
/// One degree of freedom per pixel in the sub-block: the statistic
/// aggregates squared differences over `sub_size^2` pixel comparisons.
pub fn significance_threshold(sub_size: usize) -> f64 {
    chi_squared_quantile(SIGNIFICANCE_LEVEL, sub_size * sub_size)
}

/// Pairwise connection matrix: suspiciously similar and non-overlapping
///
/// Diagonal entries come out false because every block overlaps itself.
pub fn connection_matrix(
    statistic: &Array2<f64>,
    overlap: &Array2<bool>,
    threshold: f64,
) -> Array2<bool> {
    Zip::from(statistic)
        .and(overlap)
        .map_collect(|&stat, &over| stat < threshold && !over)
}

/// Reduce the connection matrix to a per-block survival flag
///
/// A block survives when it is connected to at least one other block.
/// Self-pairs are excluded explicitly: a block is never evidence for its
/// own survival.
pub fn connected_flags(connection: &Array2<bool>) -> Vec<bool> {
    let n = connection.nrows();
    (0..n)
        .map(|i| {
            (0..n).any(|j| i != j && connection.get([i, j]).copied().unwrap_or(false))
        })
        .collect()
}
