//! Spatial data structures for candidate image patches
//!
//! A bucket is an ordered sequence of blocks; every derived matrix in the
//! filtering pipeline is indexed positionally against one bucket snapshot.

/// Block descriptor and sub-block extraction
pub mod block;

pub use block::Block;
