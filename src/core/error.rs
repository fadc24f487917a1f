// License: MIT

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation at startup.
    ///
    /// The tracker itself is total over its inputs: spurious or
    /// out-of-order lifecycle events at runtime are absorbed as no-ops,
    /// never surfaced as errors.
    InvalidConfig(ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `tick_interval` must be positive.
    ZeroTickInterval,

    /// `break_threshold` must be positive.
    ZeroBreakThreshold,

    /// A reminder threshold was zero.
    ZeroReminder,

    /// The same reminder threshold appeared twice.
    DuplicateReminder,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTickInterval =>
                write!(f, "tick interval must be greater than zero"),
            ConfigError::ZeroBreakThreshold =>
                write!(f, "break threshold must be greater than zero"),
            ConfigError::ZeroReminder =>
                write!(f, "reminder thresholds must be greater than zero"),
            ConfigError::DuplicateReminder =>
                write!(f, "reminder thresholds must not repeat"),
        }
    }
}

impl std::error::Error for Error {}
