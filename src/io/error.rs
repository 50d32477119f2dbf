//! Error types for bucket filtering
//!
//! The taxonomy is narrow on purpose: malformed configuration or block data
//! fails fast before any comparison runs, while degenerate numeric content
//! (zero-variance sub-blocks) and insufficient coverage are expected control
//! flow, not errors.

use std::fmt;

/// Main error type for filtering operations
#[derive(Debug)]
pub enum FilterError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A block in the bucket doesn't meet the configured dimensions
    InvalidBlockData {
        /// Position of the offending block in the input bucket
        index: usize,
        /// Description of what's wrong with the block
        reason: String,
    },

    /// Numerical computation was handed out-of-domain arguments
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidBlockData { index, reason } => {
                write!(f, "Invalid block at bucket index {index}: {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Convenience type alias for filtering results
pub type Result<T> = std::result::Result<T, FilterError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FilterError {
    FilterError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid block data error
pub fn invalid_block(index: usize, reason: &impl ToString) -> FilterError {
    FilterError::InvalidBlockData {
        index,
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> FilterError {
    FilterError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
