//! Dense NaN-sentinel accumulator
//!
//! Every bin starts as NaN. The first weight that lands in a bin replaces
//! the sentinel outright; later weights are folded in with the reduction
//! operator.

use num_traits::Float;

use crate::binning::ReduceOp;
use crate::error::{BinReduceError, BinResult};

/// Whether a bin still holds the "no value" sentinel
///
/// Must stay an `is_nan` test; NaN never compares equal to itself.
#[inline]
pub fn is_unset<T: Float>(val: T) -> bool {
    val.is_nan()
}

/// Dense accumulator for a single reduction
///
/// The output length is fixed at construction; the accumulator never
/// resizes during a pass.
#[derive(Debug, Clone)]
pub struct DenseAccumulator<T> {
    /// One slot per bin, NaN while unset
    values: Vec<T>,

    /// Operator used once a bin holds a value
    op: ReduceOp,
}

impl<T> DenseAccumulator<T>
where
    T: Float,
{
    /// Create an accumulator with `n_bins` unset bins
    ///
    /// Allocation failure is reported as [`BinReduceError::OutputTooLarge`]
    /// since `n_bins` is derived from caller input.
    pub fn try_new(n_bins: usize, op: ReduceOp) -> BinResult<Self> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(n_bins)
            .map_err(|_| BinReduceError::OutputTooLarge {
                len: n_bins as u128,
            })?;
        values.resize(n_bins, T::nan());

        Ok(Self { values, op })
    }

    /// Fold a single weight into `bin`
    ///
    /// # Panics
    ///
    /// Panics if `bin` is not below the bin count given at construction.
    #[inline]
    pub fn accumulate(&mut self, bin: usize, val: T) {
        let slot = &mut self.values[bin];
        if is_unset(*slot) {
            // First contribution to this bin
            *slot = val;
        } else {
            *slot = self.op.apply(*slot, val);
        }
    }

    /// Hand the dense result to the caller
    pub fn extract_result(self) -> Vec<T> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_accumulator<T: Float>(n_bins: usize, op: ReduceOp) -> DenseAccumulator<T> {
        DenseAccumulator::try_new(n_bins, op).unwrap()
    }

    #[test]
    fn test_dense_accumulator_empty() {
        let accumulator = new_accumulator::<f64>(3, ReduceOp::Max);

        let values = accumulator.extract_result();

        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_dense_accumulator_first_write_replaces_sentinel() {
        let mut accumulator = new_accumulator::<f64>(4, ReduceOp::Min);

        accumulator.accumulate(2, 3.5);

        let values = accumulator.extract_result();
        assert!(values[0].is_nan());
        assert!(values[1].is_nan());
        assert_eq!(values[2], 3.5);
        assert!(values[3].is_nan());
    }

    #[test]
    fn test_dense_accumulator_duplicate_bins_max() {
        let mut accumulator = new_accumulator::<f64>(3, ReduceOp::Max);

        accumulator.accumulate(1, 1.5);
        accumulator.accumulate(1, 2.5);
        accumulator.accumulate(1, -1.0);
        accumulator.accumulate(0, -4.0);

        let values = accumulator.extract_result();
        assert_eq!(values[0], -4.0);
        assert_eq!(values[1], 2.5);
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_dense_accumulator_duplicate_bins_min() {
        let mut accumulator = new_accumulator::<f32>(2, ReduceOp::Min);

        accumulator.accumulate(0, 1.5);
        accumulator.accumulate(0, 2.5);
        accumulator.accumulate(0, -1.0);

        assert_eq!(accumulator.extract_result()[0], -1.0);
    }

    #[test]
    fn test_negative_first_weight_is_kept() {
        // A max fold seeded from zero would lose this
        let mut accumulator = new_accumulator::<f64>(1, ReduceOp::Max);
        accumulator.accumulate(0, -7.0);
        assert_eq!(accumulator.extract_result(), vec![-7.0]);
    }

    #[test]
    fn test_nan_weight_does_not_mask_real_values() {
        let mut accumulator = new_accumulator::<f64>(2, ReduceOp::Max);

        accumulator.accumulate(0, f64::NAN);
        accumulator.accumulate(0, 2.0);
        accumulator.accumulate(1, 3.0);
        accumulator.accumulate(1, f64::NAN);

        assert_eq!(accumulator.extract_result(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_try_new_reports_oversized_output() {
        let err = DenseAccumulator::<f64>::try_new(usize::MAX, ReduceOp::Max).unwrap_err();
        assert_eq!(
            err,
            BinReduceError::OutputTooLarge {
                len: usize::MAX as u128
            }
        );
    }

    #[test]
    #[should_panic]
    fn test_accumulate_out_of_range_panics() {
        let mut accumulator = new_accumulator::<f64>(2, ReduceOp::Max);
        accumulator.accumulate(2, 1.0);
    }

    #[test]
    fn test_is_unset() {
        assert!(is_unset(f64::NAN));
        assert!(is_unset(-f64::NAN));
        assert!(!is_unset(0.0f64));
        assert!(!is_unset(f64::INFINITY));
        assert!(!is_unset(f64::NEG_INFINITY));
    }
}
