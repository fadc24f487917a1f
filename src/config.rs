use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::core::config::TrackerConfig;
use crate::core::error::Error;
use crate::rdebug;

/// On-disk configuration, all durations in whole seconds.
///
/// A missing file is not an error: the daemon runs with defaults, same as
/// every field left out of a partial file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    pub tick_interval_seconds: u64,
    pub break_seconds: u64,
    pub reminder_seconds: Vec<u64>,
    pub silent: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            tick_interval_seconds: 1,
            break_seconds: 3 * 60,
            reminder_seconds: vec![3600, 7200],
            silent: false,
        }
    }
}

impl FileConfig {
    /// Validate and convert into the millisecond config the tracker
    /// consumes. All startup checks happen here, before any session state
    /// exists.
    pub fn to_tracker_config(&self) -> Result<TrackerConfig, Error> {
        TrackerConfig::new(
            self.tick_interval_seconds.saturating_mul(1_000),
            self.break_seconds.saturating_mul(1_000),
            self.reminder_seconds
                .iter()
                .map(|s| s.saturating_mul(1_000))
                .collect(),
        )
    }
}

pub fn resolve_default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/etc"))
        .join("respite")
        .join("config.json")
}

pub fn load_from_path(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        rdebug!("config", "no config at {}, using defaults", path.display());
        return Ok(FileConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config from {}", path.display()))?;

    let cfg: FileConfig = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse config from {}", path.display()))?;

    rdebug!("config", "loaded config from {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ConfigError, Error};

    #[test]
    fn defaults_convert_to_tracker_config() {
        let cfg = FileConfig::default().to_tracker_config().unwrap();
        assert_eq!(cfg.tick_interval_ms, 1_000);
        assert_eq!(cfg.break_threshold_ms, 180_000);
        assert_eq!(cfg.reminders_ms, vec![3_600_000, 7_200_000]);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: FileConfig = serde_json::from_str(r#"{"break_seconds": 300}"#).unwrap();
        assert_eq!(cfg.break_seconds, 300);
        assert_eq!(cfg.tick_interval_seconds, 1);
        assert_eq!(cfg.reminder_seconds, vec![3600, 7200]);
    }

    #[test]
    fn zero_break_is_rejected_before_startup() {
        let cfg: FileConfig = serde_json::from_str(r#"{"break_seconds": 0}"#).unwrap();
        assert_eq!(
            cfg.to_tracker_config().unwrap_err(),
            Error::InvalidConfig(ConfigError::ZeroBreakThreshold)
        );
    }
}
