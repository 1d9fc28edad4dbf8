//! # Parallel batch reduction
//!
//! Independent reductions share no state, so a batch of them can run on a
//! Rayon pool. Each reduction is still a single sequential pass.

use rayon::prelude::*;

use crate::binning::{reduce_bins, BinReduceConfig, ReduceOp};
use crate::error::{BinReduceError, BinResult};

/// One self-contained reduction
#[derive(Debug, Clone, PartialEq)]
pub struct BinReduceJob {
    pub op: ReduceOp,
    pub indices: Vec<i64>,
    pub weights: Vec<f64>,
    pub min_length: usize,
}

impl BinReduceJob {
    pub fn new(op: ReduceOp, indices: Vec<i64>, weights: Vec<f64>, min_length: usize) -> Self {
        Self {
            op,
            indices,
            weights,
            min_length,
        }
    }

    /// Run this job on the calling thread
    pub fn run(&self) -> BinResult<Vec<f64>> {
        reduce_bins(self.op, &self.indices, &self.weights, self.min_length)
    }
}

/// Runs every job and returns their results in job order
///
/// A failing job yields its error in its own slot and does not affect the
/// others. Batches below `config.parallel_threshold` run serially.
///
/// # Errors
///
/// The outer `Result` fails only if the worker pool cannot be built.
///
/// # Examples
///
/// ```
/// use binreduce::{binreduce_batch, BinReduceConfig, BinReduceJob, ReduceOp};
///
/// let jobs = vec![
///     BinReduceJob::new(ReduceOp::Max, vec![0, 0, 1], vec![1.0, 4.0, 2.0], 0),
///     BinReduceJob::new(ReduceOp::Min, vec![1, -1], vec![1.0, 2.0], 0),
/// ];
///
/// let results = binreduce_batch(&jobs, &BinReduceConfig::default()).unwrap();
///
/// assert_eq!(results[0].as_ref().unwrap(), &vec![4.0, 2.0]);
/// assert!(results[1].is_err());
/// ```
pub fn binreduce_batch(
    jobs: &[BinReduceJob],
    config: &BinReduceConfig,
) -> BinResult<Vec<BinResult<Vec<f64>>>> {
    let n_threads = config.system_params.n_threads.max(1);

    if jobs.len() < config.parallel_threshold || n_threads == 1 {
        return Ok(jobs.iter().map(BinReduceJob::run).collect());
    }

    log::debug!(
        "binreduce: running {} jobs on {} threads",
        jobs.len(),
        n_threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build()
        .map_err(|e| BinReduceError::ThreadPool(e.to_string()))?;

    Ok(pool.install(|| jobs.par_iter().map(BinReduceJob::run).collect()))
}
