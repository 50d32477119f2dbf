//! Error types and result handling

/// Error enum, result alias and constructor helpers
pub mod error;
