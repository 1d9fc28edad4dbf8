//! The bin reduction kernel
//!
//! One validation scan over the indices sizes the output, then one
//! sequential pass folds every weight into its bin.

use num_traits::Float;

use crate::accumulator::DenseAccumulator;
use crate::binning::ReduceOp;
use crate::error::{BinReduceError, BinResult};

/// Find the largest index, rejecting negative entries
///
/// Returns `None` for an empty slice. The error names the first negative
/// element in scan order.
pub fn max_index(indices: &[i64]) -> BinResult<Option<i64>> {
    let mut max = None;
    for (position, &value) in indices.iter().enumerate() {
        if value < 0 {
            return Err(BinReduceError::NegativeIndex { position, value });
        }
        if max.map_or(true, |m| value > m) {
            max = Some(value);
        }
    }
    Ok(max)
}

/// Number of output bins for the given largest index and lower bound
///
/// `max(max_index + 1, min_length)`, or `min_length` when there are no
/// indices.
pub fn output_len(max_index: Option<i64>, min_length: usize) -> BinResult<usize> {
    let Some(max_index) = max_index else {
        return Ok(min_length);
    };
    let needed = usize::try_from(max_index)
        .ok()
        .and_then(|m| m.checked_add(1))
        .ok_or(BinReduceError::OutputTooLarge {
            len: max_index as u128 + 1,
        })?;
    Ok(needed.max(min_length))
}

/// Reduce `weights` into bins given by `indices`
///
/// Returns a dense vector of `max(max(indices) + 1, min_length)` bins where
/// each bin holds the maximum (or minimum) weight assigned to it and NaN if
/// no weight was assigned. An empty `indices` yields `min_length` NaN bins
/// without looking at `weights`.
///
/// # Errors
///
/// * [`BinReduceError::NegativeIndex`] if any index is negative
/// * [`BinReduceError::LengthMismatch`] if `weights.len() != indices.len()`
/// * [`BinReduceError::OutputTooLarge`] if the output cannot be allocated
///
/// # Examples
///
/// ```
/// use binreduce::{reduce_bins, ReduceOp};
///
/// let out = reduce_bins(ReduceOp::Max, &[0, 2, 0, 1], &[5.0, 3.0, 9.0, 1.0], 0).unwrap();
/// assert_eq!(out, vec![9.0, 1.0, 3.0]);
///
/// let out = reduce_bins(ReduceOp::Min, &[0, 2, 0, 1], &[5.0f64, 3.0, 9.0, 1.0], 5).unwrap();
/// assert_eq!(&out[..3], &[5.0, 1.0, 3.0]);
/// assert!(out[3].is_nan() && out[4].is_nan());
/// ```
pub fn reduce_bins<T>(
    op: ReduceOp,
    indices: &[i64],
    weights: &[T],
    min_length: usize,
) -> BinResult<Vec<T>>
where
    T: Float,
{
    if indices.is_empty() {
        return Ok(DenseAccumulator::try_new(min_length, op)?.extract_result());
    }

    let n_bins = output_len(max_index(indices)?, min_length)?;

    if weights.len() != indices.len() {
        return Err(BinReduceError::LengthMismatch {
            indices: indices.len(),
            weights: weights.len(),
        });
    }

    let mut accumulator = DenseAccumulator::try_new(n_bins, op)?;

    // Indices were validated as non-negative and below n_bins
    for (&bin, &weight) in indices.iter().zip(weights) {
        accumulator.accumulate(bin as usize, weight);
    }

    Ok(accumulator.extract_result())
}
