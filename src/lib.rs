//! Expanding-block statistical filter for copy-move forgery detection
//!
//! Consumes a bucket of candidate image blocks believed to share near-identical
//! content, compares them pairwise at doubling sub-block resolutions under a
//! chi-squared significance model, and returns the subset whose resemblance is
//! too strong to be coincidental. Candidate discovery, clustering and image I/O
//! happen upstream; this crate operates purely on in-memory block descriptors.

/// Pairwise overlap, similarity scoring, significance filtering and the expansion loop
pub mod algorithm;
/// Per-resolution diagnostics captured while filtering
pub mod analysis;
/// Error types and result handling
pub mod io;
/// Special functions backing the chi-squared significance threshold
pub mod math;
/// Block descriptors and sub-block extraction
pub mod spatial;

pub use algorithm::expansion::{ExpansionConfig, FilterOutcome, filter_bucket};
pub use io::error::{FilterError, Result};
pub use spatial::block::Block;
