//! Coercion of caller arrays into contiguous numeric buffers
//!
//! Inputs may be any `ndarray` array of primitive numbers in any memory
//! layout. They are copied, in logical order, into owned 1-D buffers of the
//! types the kernel works on.

use ndarray::{ArrayBase, Data, Dimension};
use num_traits::{PrimInt, ToPrimitive};

use crate::error::{Argument, BinReduceError, BinResult};

fn ensure_1d(argument: Argument, ndim: usize) -> BinResult<()> {
    if ndim != 1 {
        return Err(BinReduceError::conversion(
            argument,
            format!("expected a 1-D array, got {}-D", ndim),
        ));
    }
    Ok(())
}

/// Copy an integer array into an `i64` index buffer
///
/// Fails if the array is not 1-D or an element does not fit in `i64`.
/// Negative values are kept; rejecting them is the kernel's job.
pub fn index_buffer<S, D>(list: &ArrayBase<S, D>) -> BinResult<Vec<i64>>
where
    S: Data,
    S::Elem: PrimInt,
    D: Dimension,
{
    ensure_1d(Argument::List, list.ndim())?;

    list.iter()
        .enumerate()
        .map(|(position, value)| {
            value.to_i64().ok_or_else(|| {
                BinReduceError::conversion(
                    Argument::List,
                    format!("element {} does not fit in a 64-bit index", position),
                )
            })
        })
        .collect()
}

/// Copy a numeric array into an `f64` weight buffer
///
/// Fails if the array is not 1-D or an element has no `f64` representation.
pub fn weight_buffer<S, D>(weights: &ArrayBase<S, D>) -> BinResult<Vec<f64>>
where
    S: Data,
    S::Elem: ToPrimitive,
    D: Dimension,
{
    ensure_1d(Argument::Weights, weights.ndim())?;

    weights
        .iter()
        .enumerate()
        .map(|(position, value)| {
            value.to_f64().ok_or_else(|| {
                BinReduceError::conversion(
                    Argument::Weights,
                    format!("element {} cannot be represented as f64", position),
                )
            })
        })
        .collect()
}
