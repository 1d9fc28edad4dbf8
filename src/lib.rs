//! # binreduce: weighted bin reduction
//!
//! Given a list of non-negative bin indices and a parallel list of weights,
//! compute for every bin the maximum (or minimum) weight assigned to it.
//! Bins that receive no weight are reported as NaN.
//!
//! ## Overview
//!
//! - **Kernel**: [`reduce_bins`] sizes the output from the indices, fills it
//!   with the NaN sentinel and folds every weight into its bin in a single
//!   sequential pass.
//! - **Boundary**: [`binreduce`] accepts operator names and arbitrary
//!   `ndarray` inputs, coerces them, and reports the legacy unspecified
//!   `minlength` form through a [`WarningSink`].
//! - **Batches**: [`binreduce_batch`] runs many independent reductions on a
//!   worker pool.
//!
//! ## Usage
//!
//! ```
//! use binreduce::{binreduce, MinLength, RecordWarnings};
//! use ndarray::arr1;
//!
//! let mut warnings = RecordWarnings::new();
//! let out = binreduce(
//!     "max",
//!     &arr1(&[0i64, 2, 0, 1]),
//!     Some(&arr1(&[5.0, 3.0, 9.0, 1.0])),
//!     MinLength::Explicit(0),
//!     &mut warnings,
//! )
//! .unwrap();
//!
//! assert_eq!(out.to_vec(), vec![9.0, 1.0, 3.0]);
//! assert!(warnings.is_empty());
//! ```

pub mod accumulator;
pub mod binning;
pub mod error;
pub mod parallel;
pub mod utils;
pub mod warning;

use ndarray::{Array1, ArrayBase, Data, Dimension};
use num_traits::{PrimInt, ToPrimitive};

// Re-export primary components
pub use accumulator::{is_unset, DenseAccumulator};
pub use binning::{reduce_bins, BinReduceConfig, MinLength, ReduceOp, SystemParameters};
// Panicking baseline for tests and benchmarks
#[doc(hidden)]
pub use binning::reference_reduce;
pub use error::{Argument, BinReduceError, BinResult};
pub use parallel::{binreduce_batch, BinReduceJob};
pub use warning::{
    DenyWarnings, DeprecationPolicy, DeprecationWarning, LogWarnings, RecordWarnings, WarningSink,
};

/// Placeholder for an omitted `weights` argument
pub const NO_WEIGHTS: Option<&Array1<f64>> = None;

/// Reduce weights into bins by operator name
///
/// This is the external call surface: `op` must be exactly `"max"` or
/// `"min"`, `list` and `weights` may be any 1-D `ndarray` arrays of
/// primitive numbers, and `minlength` records whether the caller supplied a
/// lower bound at all.
///
/// Omitting `weights` ([`NO_WEIGHTS`]) is only valid for an empty `list`.
/// [`MinLength::Unspecified`] produces the same result as
/// `MinLength::Explicit(0)` but first reports a [`DeprecationWarning`] to
/// `sink`; if the sink returns an error the call fails with it.
///
/// # Errors
///
/// * [`BinReduceError::InvalidOperator`] for an unknown `op`
/// * [`BinReduceError::Conversion`] if an input is not 1-D, does not fit the
///   target type, or `weights` is missing for a non-empty `list`
/// * [`BinReduceError::NegativeMinLength`] for a negative explicit `minlength`
/// * [`BinReduceError::NegativeIndex`] / [`BinReduceError::LengthMismatch`]
///   as for [`reduce_bins`]
/// * [`BinReduceError::DeprecatedUsage`] if `sink` escalates the warning
///
/// # Examples
///
/// ```
/// use binreduce::{binreduce, DeprecationPolicy, MinLength, NO_WEIGHTS};
/// use ndarray::Array1;
///
/// let empty: Array1<i32> = Array1::zeros(0);
/// let mut policy = DeprecationPolicy::Ignore;
/// let out = binreduce("min", &empty, NO_WEIGHTS, MinLength::Explicit(3), &mut policy).unwrap();
/// assert_eq!(out.len(), 3);
/// assert!(out.iter().all(|v| v.is_nan()));
/// ```
pub fn binreduce<SL, DL, SW, DW, K>(
    op: &str,
    list: &ArrayBase<SL, DL>,
    weights: Option<&ArrayBase<SW, DW>>,
    minlength: MinLength,
    sink: &mut K,
) -> BinResult<Array1<f64>>
where
    SL: Data,
    SL::Elem: PrimInt,
    DL: Dimension,
    SW: Data,
    SW::Elem: ToPrimitive,
    DW: Dimension,
    K: WarningSink + ?Sized,
{
    let op: ReduceOp = op.parse()?;
    let indices = utils::index_buffer(list)?;

    if minlength.is_unspecified() {
        sink.deprecation(&DeprecationWarning::unspecified_min_length())?;
    }
    let min_length = minlength.resolve()?;

    if indices.is_empty() {
        return Ok(Array1::from_vec(reduce_bins::<f64>(op, &[], &[], min_length)?));
    }

    // Negative indices are reported before weights are looked at
    binning::max_index(&indices)?;

    let weights = weights.ok_or_else(|| {
        BinReduceError::conversion(
            Argument::Weights,
            "weights are required for a non-empty list",
        )
    })?;
    let weights = utils::weight_buffer(weights)?;

    reduce_bins(op, &indices, &weights, min_length).map(Array1::from_vec)
}

/// [`binreduce`] with deprecated usage handled by `config.deprecation`
pub fn binreduce_with_config<SL, DL, SW, DW>(
    op: &str,
    list: &ArrayBase<SL, DL>,
    weights: Option<&ArrayBase<SW, DW>>,
    minlength: MinLength,
    config: &BinReduceConfig,
) -> BinResult<Array1<f64>>
where
    SL: Data,
    SL::Elem: PrimInt,
    DL: Dimension,
    SW: Data,
    SW::Elem: ToPrimitive,
    DW: Dimension,
{
    let mut policy = config.deprecation;
    binreduce(op, list, weights, minlength, &mut policy)
}

/// Version information for the binreduce library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_binreduce_by_name() {
        let out = binreduce(
            "max",
            &arr1(&[0i64, 2, 0, 1]),
            Some(&arr1(&[5.0, 3.0, 9.0, 1.0])),
            MinLength::Explicit(0),
            &mut DenyWarnings,
        )
        .unwrap();
        assert_eq!(out.to_vec(), vec![9.0, 1.0, 3.0]);
    }

    #[test]
    fn test_unknown_operator_fails_even_for_empty_list() {
        let empty: Array1<i64> = Array1::zeros(0);
        let err = binreduce(
            "sum",
            &empty,
            NO_WEIGHTS,
            MinLength::Explicit(2),
            &mut DenyWarnings,
        )
        .unwrap_err();
        assert_eq!(
            err,
            BinReduceError::InvalidOperator {
                op: "sum".to_string()
            }
        );
    }

    #[test]
    fn test_missing_weights() {
        let err = binreduce(
            "max",
            &arr1(&[0i64]),
            NO_WEIGHTS,
            MinLength::Explicit(0),
            &mut DenyWarnings,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BinReduceError::Conversion {
                argument: Argument::Weights,
                ..
            }
        ));
    }

    #[test]
    fn test_two_dimensional_list_is_a_conversion_error() {
        let err = binreduce(
            "max",
            &arr2(&[[0i64, 1]]),
            Some(&arr1(&[1.0, 2.0])),
            MinLength::Explicit(0),
            &mut DenyWarnings,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BinReduceError::Conversion {
                argument: Argument::List,
                ..
            }
        ));
    }

    #[test]
    fn test_unspecified_min_length_warns_once() {
        let mut sink = RecordWarnings::new();
        let out = binreduce(
            "min",
            &arr1(&[1i32, 1]),
            Some(&arr1(&[4.0f32, 2.0])),
            MinLength::Unspecified,
            &mut sink,
        )
        .unwrap();

        assert_eq!(out.len(), 2);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 2.0);
        assert_eq!(
            sink.warnings,
            vec![DeprecationWarning::unspecified_min_length()]
        );
    }

    #[test]
    fn test_config_policy_controls_deprecation() {
        let list = arr1(&[0i64]);
        let weights = arr1(&[1.0]);

        let strict = BinReduceConfig {
            deprecation: DeprecationPolicy::Error,
            ..BinReduceConfig::default()
        };
        let legacy = binreduce_with_config(
            "max",
            &list,
            Some(&weights),
            MinLength::Unspecified,
            &strict,
        );
        assert!(matches!(legacy, Err(BinReduceError::DeprecatedUsage(_))));

        let explicit =
            binreduce_with_config("max", &list, Some(&weights), MinLength::Explicit(0), &strict);
        assert!(explicit.is_ok());

        let lenient = BinReduceConfig {
            deprecation: DeprecationPolicy::Ignore,
            ..BinReduceConfig::default()
        };
        let out = binreduce_with_config(
            "max",
            &list,
            Some(&weights),
            MinLength::Unspecified,
            &lenient,
        )
        .unwrap();
        assert_eq!(out.to_vec(), vec![1.0]);
    }

    #[test]
    fn test_negative_min_length() {
        let err = binreduce(
            "max",
            &arr1(&[0i64]),
            Some(&arr1(&[1.0])),
            MinLength::Explicit(-2),
            &mut DenyWarnings,
        )
        .unwrap_err();
        assert_eq!(err, BinReduceError::NegativeMinLength { value: -2 });
    }
}
