//! Per-resolution diagnostics for one filtering invocation
//!
//! The filter is a pure reduction, so observability is a value: each pass
//! appends a record, and the caller reads the trace off the outcome. The
//! degenerate-pair counts matter in practice: many zero-variance pairs
//! mean the bucket holds flat, information-free content and its survivors
//! deserve less trust downstream.

/// Diagnostics for a single resolution pass
#[derive(Debug, Clone, Copy)]
pub struct RoundRecord {
    /// Sub-block edge length evaluated this pass
    pub sub_size: usize,
    /// Chi-squared significance threshold applied this pass
    pub threshold: f64,
    /// Blocks entering the pass
    pub entered: usize,
    /// Blocks surviving the pass
    pub retained: usize,
    /// Zero-variance pairs substituted with statistic 0 this pass
    pub degenerate_pairs: usize,
}

/// Ordered round records for one bucket invocation
#[derive(Debug, Clone, Default)]
pub struct FilterTrace {
    rounds: Vec<RoundRecord>,
}

impl FilterTrace {
    /// Create an empty trace
    pub const fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Append one pass's record
    pub fn record(&mut self, round: RoundRecord) {
        self.rounds.push(round);
    }

    /// All recorded passes, in execution order
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Total zero-variance pairs across all passes
    pub fn degenerate_pairs(&self) -> usize {
        self.rounds.iter().map(|r| r.degenerate_pairs).sum()
    }

    /// Bucket size after the last recorded pass, if any pass ran
    pub fn last_retained(&self) -> Option<usize> {
        self.rounds.last().map(|r| r.retained)
    }
}
