//! Warning channel for legacy call forms
//!
//! The kernel never writes diagnostics itself. Deprecated usage is reported
//! to a [`WarningSink`] chosen by the caller, which may log it, record it,
//! drop it, or turn it into an error.

use std::fmt;

use crate::error::{BinReduceError, BinResult};

/// Message emitted when `minlength` is left unspecified
pub const MINLENGTH_NONE_DEPRECATION: &str =
    "0 should be passed as minlength instead of None; this will error in future.";

/// A deprecated call form that is still accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationWarning {
    /// Human-readable migration hint
    pub message: &'static str,
}

impl DeprecationWarning {
    /// The warning for an omitted or `None` minimum length
    pub fn unspecified_min_length() -> Self {
        Self {
            message: MINLENGTH_NONE_DEPRECATION,
        }
    }
}

impl fmt::Display for DeprecationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeprecationWarning: {}", self.message)
    }
}

/// Receiver for warnings raised during a call
///
/// Returning an error aborts the call with that error.
pub trait WarningSink {
    fn deprecation(&mut self, warning: &DeprecationWarning) -> BinResult<()>;
}

/// Forwards warnings to the `log` facade at `warn` level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn deprecation(&mut self, warning: &DeprecationWarning) -> BinResult<()> {
        log::warn!("{}", warning);
        Ok(())
    }
}

/// Collects warnings for later inspection
#[derive(Debug, Default, Clone)]
pub struct RecordWarnings {
    pub warnings: Vec<DeprecationWarning>,
}

impl RecordWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl WarningSink for RecordWarnings {
    fn deprecation(&mut self, warning: &DeprecationWarning) -> BinResult<()> {
        self.warnings.push(warning.clone());
        Ok(())
    }
}

/// Escalates every warning to [`BinReduceError::DeprecatedUsage`]
#[derive(Debug, Default, Clone, Copy)]
pub struct DenyWarnings;

impl WarningSink for DenyWarnings {
    fn deprecation(&mut self, warning: &DeprecationWarning) -> BinResult<()> {
        Err(BinReduceError::DeprecatedUsage(warning.clone()))
    }
}

/// Config-level choice of how deprecated usage is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeprecationPolicy {
    /// Log through `log::warn!`
    #[default]
    Log,
    /// Silently accept
    Ignore,
    /// Fail the call
    Error,
}

impl WarningSink for DeprecationPolicy {
    fn deprecation(&mut self, warning: &DeprecationWarning) -> BinResult<()> {
        match self {
            DeprecationPolicy::Log => LogWarnings.deprecation(warning),
            DeprecationPolicy::Ignore => Ok(()),
            DeprecationPolicy::Error => DenyWarnings.deprecation(warning),
        }
    }
}
