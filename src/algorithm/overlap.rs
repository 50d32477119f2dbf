//! Spatial overlap detection between block pairs
//!
//! Near-identical content separated by less than a block width is expected
//! to be similar even without forgery (ordinary texture autocorrelates), so
//! overlapping pairs must never count as evidence of a connection. The
//! relation depends only on block positions, never on resolution.

use ndarray::Array2;

/// Pairwise overlap matrix over one bucket snapshot
///
/// `overlap[[i, j]]` is true iff blocks i and j are closer than
/// `block_size` along the row axis or the column axis. The diagonal is
/// always true: a block overlaps itself.
pub fn overlap_matrix(positions: &[(i32, i32)], block_size: usize) -> Array2<bool> {
    let n = positions.len();
    let limit = block_size as u32;

    Array2::from_shape_fn((n, n), |(i, j)| {
        let (row_i, col_i) = positions.get(i).copied().unwrap_or((0, 0));
        let (row_j, col_j) = positions.get(j).copied().unwrap_or((0, 0));

        row_i.abs_diff(row_j) < limit || col_i.abs_diff(col_j) < limit
    })
}
