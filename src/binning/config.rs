//! Configuration and system parameters for bin reduction

use crate::warning::DeprecationPolicy;

/// System parameters for batch execution
#[derive(Debug, Clone)]
pub struct SystemParameters {
    /// Number of worker threads for batch reductions
    pub n_threads: usize,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

/// Configuration for batch reductions and legacy call handling
#[derive(Debug, Clone)]
pub struct BinReduceConfig {
    /// System parameters for performance tuning
    pub system_params: SystemParameters,

    /// Batches with fewer jobs than this run on the calling thread
    pub parallel_threshold: usize,

    /// How an unspecified minimum length is reported
    pub deprecation: DeprecationPolicy,
}

impl Default for BinReduceConfig {
    fn default() -> Self {
        Self {
            system_params: SystemParameters::default(),
            parallel_threshold: 4,
            deprecation: DeprecationPolicy::Log,
        }
    }
}

impl BinReduceConfig {
    /// Create a config that uses exactly `n_threads` workers
    pub fn with_threads(n_threads: usize) -> Self {
        Self {
            system_params: SystemParameters {
                n_threads: n_threads.max(1),
            },
            ..Self::default()
        }
    }
}
