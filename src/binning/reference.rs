//! Reference implementation of bin reduction
//!
//! Groups weights per bin, then folds each group. It is slower and
//! allocates more than the kernel but is straightforward enough to serve
//! as a correctness baseline.

use std::collections::BTreeMap;

use num_traits::Float;

use crate::binning::ReduceOp;

/// Reduce `weights` into bins by grouping first
///
/// Meant as a baseline for tests and benchmarks, not for production use:
/// it asserts on its inputs instead of returning errors. Call
/// [`reduce_bins`](crate::reduce_bins) for validated reductions.
///
/// # Panics
///
/// Panics if an index is negative or the slices differ in length; callers
/// are expected to pass inputs the kernel accepts.
pub fn reference_reduce<T>(
    op: ReduceOp,
    indices: &[i64],
    weights: &[T],
    min_length: usize,
) -> Vec<T>
where
    T: Float,
{
    if indices.is_empty() {
        return vec![T::nan(); min_length];
    }
    assert_eq!(
        indices.len(),
        weights.len(),
        "indices and weights must have the same length"
    );

    let mut groups: BTreeMap<usize, Vec<T>> = BTreeMap::new();
    for (&bin, &weight) in indices.iter().zip(weights) {
        let bin = usize::try_from(bin).expect("indices must be non-negative");
        groups.entry(bin).or_default().push(weight);
    }

    let n_bins = groups
        .keys()
        .next_back()
        .map_or(0, |&max| max + 1)
        .max(min_length);

    let mut result = vec![T::nan(); n_bins];
    for (bin, group) in groups {
        // Skip NaN weights so a group folds only real values
        let folded = group
            .into_iter()
            .filter(|w| !w.is_nan())
            .reduce(|acc, w| op.apply(acc, w));
        if let Some(value) = folded {
            result[bin] = value;
        }
    }
    result
}
