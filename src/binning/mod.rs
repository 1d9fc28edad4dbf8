// Bin reduction operators, sizing and kernels

pub mod config;
pub mod min_length;
pub mod op;
pub mod reduce;
pub mod reference;

pub use config::{BinReduceConfig, SystemParameters};
pub use min_length::MinLength;
pub use op::ReduceOp;
pub use reduce::{max_index, output_len, reduce_bins};
pub use reference::reference_reduce;
