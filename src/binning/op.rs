//! Reduction operators

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::error::BinReduceError;

/// Binary operator folded over all weights that land in the same bin
///
/// Both operators are commutative and associative, so the fold result does
/// not depend on visitation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    /// Element-wise maximum
    Max,
    /// Element-wise minimum
    Min,
}

impl ReduceOp {
    /// Combine the running value of a bin with a new weight
    ///
    /// Only called once the bin holds a value; unset detection is the
    /// caller's job.
    #[inline]
    pub fn apply<T: Float>(self, current: T, val: T) -> T {
        match self {
            ReduceOp::Max => current.max(val),
            ReduceOp::Min => current.min(val),
        }
    }

    /// The operator name accepted by [`ReduceOp::from_str`]
    pub fn name(self) -> &'static str {
        match self {
            ReduceOp::Max => "max",
            ReduceOp::Min => "min",
        }
    }
}

impl FromStr for ReduceOp {
    type Err = BinReduceError;

    /// Exact, case-sensitive match on `"max"` or `"min"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" => Ok(ReduceOp::Max),
            "min" => Ok(ReduceOp::Min),
            other => Err(BinReduceError::InvalidOperator {
                op: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
