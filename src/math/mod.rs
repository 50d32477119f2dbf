//! Mathematical utilities for the significance model

/// Gamma-family special functions and the chi-squared distribution
pub mod probability;
