//! Candidate image patch with known source position
//!
//! Blocks are created upstream and treated as read-only here: the filter
//! selects subsets of a bucket and extracts sub-arrays of pixel data, but
//! never mutates a block.

use ndarray::{Array2, s};
use num_traits::ToPrimitive;

/// A square patch of source-image pixel data at a known position
///
/// The pixel array must be at least `block_size × block_size` for the
/// configuration it is filtered under; `filter_bucket` validates this
/// before any comparison runs.
#[derive(Debug, Clone)]
pub struct Block<T> {
    /// Top-left row coordinate in the source image
    pub row: i32,
    /// Top-left column coordinate in the source image
    pub col: i32,
    /// Intensity values, row-major
    pub pixel: Array2<T>,
}

impl<T> Block<T> {
    /// Create a block descriptor from a position and pixel data
    pub const fn new(row: i32, col: i32, pixel: Array2<T>) -> Self {
        Self { row, col, pixel }
    }

    /// Top-left position as a coordinate pair
    pub const fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Whether the pixel array covers at least `edge × edge`
    pub fn covers(&self, edge: usize) -> bool {
        let (rows, cols) = self.pixel.dim();
        rows >= edge && cols >= edge
    }
}

impl<T: ToPrimitive> Block<T> {
    /// Extract the top-left `sub_size × sub_size` corner promoted to `f64`
    ///
    /// Comparison always happens in floating point regardless of the
    /// source pixel type. Values that cannot be represented map to 0.0,
    /// which cannot occur for the integer and float types buckets are
    /// built from in practice.
    pub fn sub_block(&self, sub_size: usize) -> Array2<f64> {
        self.pixel
            .slice(s![..sub_size, ..sub_size])
            .map(|v| v.to_f64().unwrap_or(0.0))
    }
}
