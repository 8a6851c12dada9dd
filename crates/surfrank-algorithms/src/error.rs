//! Error types for the ranking engines

use thiserror::Error;

/// Errors raised by graph construction, the linear-algebra primitives and
/// the two ranking engines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    /// Zero-sized graph, or a graph the engines cannot sample from
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// Node index or vector/matrix dimension outside the expected range
    #[error("Index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Engine configuration outside its valid domain
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// Shared guard for the damping model's jump probability.
pub(crate) fn check_jump_probability(m: f64) -> AlgoResult<()> {
    if !(0.0..=1.0).contains(&m) {
        return Err(AlgoError::InvalidConfig(format!(
            "jump probability must be within [0, 1], got {}",
            m
        )));
    }
    Ok(())
}
