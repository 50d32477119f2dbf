//! Pairwise similarity test statistic between sub-blocks
//!
//! For sub-blocks i and j the statistic is the summed squared pixel
//! difference normalized by the pair's averaged variance and the sub-block
//! edge length. Under the null hypothesis that both sub-blocks are
//! independent noisy samples of the same signal, the statistic behaves
//! like a chi-squared variable; small values mean suspicious similarity.

use ndarray::Array2;

/// Pairwise test statistics over one bucket snapshot
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    /// `statistic[[i, j]]` for every ordered sub-block pair; symmetric
    pub statistic: Array2<f64>,
    /// Unordered off-diagonal pairs whose combined variance was zero
    ///
    /// Those pairs get statistic 0 instead of an undefined division. A
    /// large count signals degenerate image content (e.g. flat color)
    /// and is surfaced to the caller through the filter trace.
    pub degenerate_pairs: usize,
}

/// Population variance (N denominator) of a sub-block's pixel values
///
/// Two-pass form for numerical stability; returns 0.0 for an empty array.
pub fn population_variance(values: &Array2<f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }

    let mean = values.sum() / n as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64
}

/// Compute the full pairwise test statistic matrix
///
/// Every entry is computed with its own pair's averaged variance:
/// `sum((a - b)^2) / (((var_a + var_b) / 2) * sub_size)`. The denominator
/// scales with the edge length, not the pixel count; the significance
/// threshold compensates by using `sub_size^2` degrees of freedom.
pub fn test_statistic(sub_blocks: &[Array2<f64>], sub_size: usize) -> SimilarityMatrix {
    let n = sub_blocks.len();
    let variance: Vec<f64> = sub_blocks.iter().map(population_variance).collect();

    let mut statistic = Array2::<f64>::zeros((n, n));
    let mut degenerate_pairs = 0;

    for (i, a) in sub_blocks.iter().enumerate() {
        for (j, b) in sub_blocks.iter().enumerate() {
            let pixel_diff: f64 = a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y) * (x - y))
                .sum();

            let var_i = variance.get(i).copied().unwrap_or(0.0);
            let var_j = variance.get(j).copied().unwrap_or(0.0);
            let sigma_sq = (var_i + var_j) / 2.0;

            let value = if sigma_sq == 0.0 {
                if i < j {
                    degenerate_pairs += 1;
                }
                0.0
            } else {
                pixel_diff / (sigma_sq * sub_size as f64)
            };

            if let Some(entry) = statistic.get_mut([i, j]) {
                *entry = value;
            }
        }
    }

    SimilarityMatrix {
        statistic,
        degenerate_pairs,
    }
}
