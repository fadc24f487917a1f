// License: MIT

use crate::core::error::{ConfigError, Error};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_BREAK_THRESHOLD_MS: u64 = 3 * 60 * 1_000;
pub const DEFAULT_REMINDERS_MS: [u64; 2] = [3_600_000, 7_200_000];

/// Validated tracker configuration.
///
/// Built once before the session starts; a failed check here prevents the
/// tracker from initializing at all (there is no partial/degraded mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub tick_interval_ms: u64,
    pub break_threshold_ms: u64,

    /// Reminder thresholds, sorted ascending. The threshold duration
    /// doubles as its identifier.
    pub reminders_ms: Vec<u64>,
}

impl TrackerConfig {
    pub fn new(
        tick_interval_ms: u64,
        break_threshold_ms: u64,
        mut reminders_ms: Vec<u64>,
    ) -> Result<Self, Error> {
        if tick_interval_ms == 0 {
            return Err(Error::InvalidConfig(ConfigError::ZeroTickInterval));
        }
        if break_threshold_ms == 0 {
            return Err(Error::InvalidConfig(ConfigError::ZeroBreakThreshold));
        }
        if reminders_ms.iter().any(|t| *t == 0) {
            return Err(Error::InvalidConfig(ConfigError::ZeroReminder));
        }

        reminders_ms.sort_unstable();
        if reminders_ms.windows(2).any(|w| w[0] == w[1]) {
            return Err(Error::InvalidConfig(ConfigError::DuplicateReminder));
        }

        Ok(Self {
            tick_interval_ms,
            break_threshold_ms,
            reminders_ms,
        })
    }

    /// The last (largest) reminder threshold, used as the "alert" interval
    /// the pie-clock icon is scaled against.
    pub fn alert_ms(&self) -> Option<u64> {
        self.reminders_ms.last().copied()
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            break_threshold_ms: DEFAULT_BREAK_THRESHOLD_MS,
            reminders_ms: DEFAULT_REMINDERS_MS.to_vec(),
        }
    }
}
