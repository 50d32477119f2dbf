//! Resolution-doubling filter loop over one bucket
//!
//! Comparison starts on small sub-blocks and doubles the edge length each
//! pass up to the full block size. Coarse passes reject clearly unrelated
//! blocks cheaply; later passes carry more degrees of freedom and confirm
//! only the most robust matches. Blocks with no connection at the current
//! resolution are pruned before the next pass, and every derived matrix is
//! rebuilt from the pruned membership so indices stay aligned.

use crate::algorithm::connection::{connected_flags, connection_matrix, significance_threshold};
use crate::algorithm::overlap::overlap_matrix;
use crate::algorithm::similarity::test_statistic;
use crate::analysis::trace::{FilterTrace, RoundRecord};
use crate::io::error::{Result, invalid_block, invalid_parameter};
use crate::spatial::block::Block;
use num_traits::ToPrimitive;

/// Validated filter configuration
#[derive(Debug, Clone, Copy)]
pub struct ExpansionConfig {
    /// Maximum sub-block edge length used for comparison
    pub block_size: usize,
    /// Minimum aggregate coverage (`bucket_len * block_size`) worth processing
    pub min_area: usize,
}

impl ExpansionConfig {
    /// Create a configuration, rejecting non-positive parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `block_size` or `min_area` is zero.
    pub fn new(block_size: usize, min_area: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(invalid_parameter(
                "block_size",
                &block_size,
                &"must be positive",
            ));
        }
        if min_area == 0 {
            return Err(invalid_parameter("min_area", &min_area, &"must be positive"));
        }
        Ok(Self {
            block_size,
            min_area,
        })
    }

    /// Aggregate coverage of a bucket with `count` surviving blocks
    const fn coverage(&self, count: usize) -> usize {
        count * self.block_size
    }
}

/// Result of filtering one bucket
///
/// Survivors are indices into the caller's bucket, so the caller's blocks
/// are never copied or mutated; `select` borrows them back out.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Indices of surviving blocks, in input order
    pub survivors: Vec<usize>,
    /// Per-resolution diagnostics recorded during filtering
    pub trace: FilterTrace,
}

impl FilterOutcome {
    /// Whether no block survived
    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty()
    }

    /// Total zero-variance pairs encountered across all passes
    pub fn degenerate_pairs(&self) -> usize {
        self.trace.degenerate_pairs()
    }

    /// Borrow the surviving blocks out of the input bucket
    pub fn select<'a, T>(&self, bucket: &'a [Block<T>]) -> Vec<&'a Block<T>> {
        self.survivors
            .iter()
            .filter_map(|&i| bucket.get(i))
            .collect()
    }

    const fn empty(trace: FilterTrace) -> Self {
        Self {
            survivors: Vec::new(),
            trace,
        }
    }
}

/// Filter a bucket down to its statistically connected blocks
///
/// Runs the expanding-resolution loop: per pass, extract the current
/// sub-blocks of every surviving block, score all pairs, convert scores to
/// connections via the chi-squared significance threshold combined with
/// the overlap exclusion, and drop blocks with no connection. Terminates
/// early with an empty outcome whenever the surviving coverage falls below
/// `min_area`, and normally after the pass at full block size.
///
/// # Errors
///
/// Returns `InvalidBlockData` if any block's pixel array is smaller than
/// `block_size` in either dimension. Validation happens before the first
/// pass; a malformed bucket is never partially processed.
pub fn filter_bucket<T: ToPrimitive>(
    bucket: &[Block<T>],
    config: &ExpansionConfig,
) -> Result<FilterOutcome> {
    for (index, block) in bucket.iter().enumerate() {
        if !block.covers(config.block_size) {
            let (rows, cols) = block.pixel.dim();
            return Err(invalid_block(
                index,
                &format!(
                    "pixel array is {rows}x{cols}, need at least {0}x{0}",
                    config.block_size
                ),
            ));
        }
    }

    let mut alive: Vec<usize> = (0..bucket.len()).collect();
    let mut trace = FilterTrace::new();
    let mut sub_size = 1;

    loop {
        if config.coverage(alive.len()) < config.min_area {
            return Ok(FilterOutcome::empty(trace));
        }

        sub_size = (sub_size * 2).min(config.block_size);

        let members: Vec<&Block<T>> = alive.iter().filter_map(|&i| bucket.get(i)).collect();
        let positions: Vec<(i32, i32)> = members.iter().map(|b| b.position()).collect();
        let sub_blocks: Vec<_> = members.iter().map(|b| b.sub_block(sub_size)).collect();

        let overlap = overlap_matrix(&positions, config.block_size);
        let similarity = test_statistic(&sub_blocks, sub_size);
        let threshold = significance_threshold(sub_size);
        let connection = connection_matrix(&similarity.statistic, &overlap, threshold);
        let flags = connected_flags(&connection);

        let entered = alive.len();
        alive = alive
            .into_iter()
            .zip(flags)
            .filter_map(|(index, connected)| connected.then_some(index))
            .collect();

        trace.record(RoundRecord {
            sub_size,
            threshold,
            entered,
            retained: alive.len(),
            degenerate_pairs: similarity.degenerate_pairs,
        });

        if config.coverage(alive.len()) < config.min_area {
            return Ok(FilterOutcome::empty(trace));
        }

        if sub_size == config.block_size {
            return Ok(FilterOutcome {
                survivors: alive,
                trace,
            });
        }
    }
}
