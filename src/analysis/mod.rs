//! Diagnostics captured during filtering

/// Per-resolution round records
pub mod trace;

pub use trace::{FilterTrace, RoundRecord};
