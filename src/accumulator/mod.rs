//! Accumulators for bin reduction
//!
//! An accumulator owns the dense output of one reduction and folds weights
//! into it bin by bin. Bins that never receive a weight keep the NaN
//! sentinel.

pub mod dense;

pub use dense::{is_unset, DenseAccumulator};
