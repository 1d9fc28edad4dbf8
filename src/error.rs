//! Error types for bin reduction

use std::fmt;

use thiserror::Error;

use crate::warning::DeprecationWarning;

/// The call argument an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// The bin index array
    List,
    /// The weight array
    Weights,
    /// The minimum output length
    MinLength,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Argument::List => "list",
            Argument::Weights => "weights",
            Argument::MinLength => "minlength",
        };
        f.write_str(name)
    }
}

/// Errors produced by a bin reduction
///
/// Every variant aborts the whole call; no partial result is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BinReduceError {
    /// The operator name is neither `"max"` nor `"min"`
    #[error("'op' unknown: {op:?} (expected \"max\" or \"min\")")]
    InvalidOperator { op: String },

    /// The index array contains a negative element
    #[error(
        "'list' argument must have no negative elements (found {value} at position {position})"
    )]
    NegativeIndex { position: usize, value: i64 },

    /// The minimum output length is negative
    #[error("'minlength' must not be negative (got {value})")]
    NegativeMinLength { value: i64 },

    /// Weight and index arrays differ in length
    #[error(
        "The weights and list don't have the same length ({weights} weights, {indices} indices)"
    )]
    LengthMismatch { indices: usize, weights: usize },

    /// An input could not be coerced to the required 1-D numeric buffer
    #[error("cannot convert '{argument}': {reason}")]
    Conversion { argument: Argument, reason: String },

    /// The output buffer cannot be represented or allocated
    #[error("output of {len} bins cannot be allocated")]
    OutputTooLarge { len: u128 },

    /// A deprecation warning was escalated to an error by the warning sink
    #[error("{0}")]
    DeprecatedUsage(DeprecationWarning),

    /// The batch worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl BinReduceError {
    pub(crate) fn conversion(argument: Argument, reason: impl Into<String>) -> Self {
        BinReduceError::Conversion {
            argument,
            reason: reason.into(),
        }
    }
}

pub type BinResult<T> = Result<T, BinReduceError>;
