//! Minimum output length with call-site provenance

use crate::error::{Argument, BinReduceError, BinResult};

/// Lower bound on the number of output bins, as supplied by the caller
///
/// `Unspecified` is the legacy form (argument omitted or passed as "no
/// value"). It behaves exactly like `Explicit(0)` for the result but is
/// reported as deprecated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinLength {
    #[default]
    Unspecified,
    Explicit(i64),
}

impl MinLength {
    /// Whether this is the deprecated legacy form
    pub fn is_unspecified(&self) -> bool {
        matches!(self, MinLength::Unspecified)
    }

    /// The effective bin count lower bound
    pub fn resolve(self) -> BinResult<usize> {
        match self {
            MinLength::Unspecified => Ok(0),
            MinLength::Explicit(value) if value < 0 => {
                Err(BinReduceError::NegativeMinLength { value })
            }
            MinLength::Explicit(value) => usize::try_from(value).map_err(|_| {
                BinReduceError::conversion(
                    Argument::MinLength,
                    format!("{} does not fit in a platform index", value),
                )
            }),
        }
    }
}

impl From<i64> for MinLength {
    fn from(value: i64) -> Self {
        MinLength::Explicit(value)
    }
}

impl From<Option<i64>> for MinLength {
    fn from(value: Option<i64>) -> Self {
        value.map_or(MinLength::Unspecified, MinLength::Explicit)
    }
}
