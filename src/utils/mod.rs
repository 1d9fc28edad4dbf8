//! Utility functions for bin reduction

pub mod conversion;

pub use conversion::{index_buffer, weight_buffer};
