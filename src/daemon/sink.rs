// License: MIT

use std::path::PathBuf;

use serde::Serialize;

use crate::core::info::icon_phase;
use crate::core::session::Mode;
use crate::core::utils::{escape_single_quotes, format_clock};
use crate::{rdebug, rwarn};

/// Where tracker output becomes visible to the user.
///
/// The daemon calls this after every tick (snapshot) and once per newly
/// crossed reminder threshold. Nothing here may touch tracker state, and
/// failures stay inside the sink: a broken notifier must not stall the
/// session.
pub trait PresentationSink: Send + Sync {
    fn on_snapshot(&self, mode: Mode, active_ms: u64);
    fn on_threshold_crossed(&self, threshold_ms: u64);
}

/// Production sink: a status file for bars to poll plus `notify-send`
/// reminders, mirroring the menu-bar icon and notifications of a classic
/// screen-time tray app.
pub struct DesktopSink {
    /// Largest configured reminder; scales the pie icon and marks which
    /// crossing is the final "take a break" alert.
    alert_ms: Option<u64>,

    /// Status JSON written each tick, `None` disables the file.
    status_path: Option<PathBuf>,
}

#[derive(Serialize)]
struct StatusLine<'a> {
    text: String,
    alt: &'a str,
    class: &'a str,
    icon_phase: u32,
}

impl DesktopSink {
    pub fn new(alert_ms: Option<u64>, status_path: Option<PathBuf>) -> Self {
        Self {
            alert_ms,
            status_path,
        }
    }
}

impl PresentationSink for DesktopSink {
    fn on_snapshot(&self, mode: Mode, active_ms: u64) {
        let Some(path) = &self.status_path else {
            return;
        };

        let alt = match mode {
            Mode::Active => "active",
            Mode::Idle => "idle",
        };

        let line = StatusLine {
            text: format_clock(active_ms),
            alt,
            class: alt,
            icon_phase: icon_phase(active_ms, self.alert_ms),
        };

        match serde_json::to_string(&line) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    rdebug!("sink", "status write failed: {e}");
                }
            }
            Err(e) => rdebug!("sink", "status encode failed: {e}"),
        }
    }

    fn on_threshold_crossed(&self, threshold_ms: u64) {
        let (summary, body) = reminder_message(threshold_ms, self.alert_ms);

        let cmd = format!(
            "notify-send -a Respite '{}' '{}'",
            escape_single_quotes(&summary),
            escape_single_quotes(&body),
        );

        let spawned = std::process::Command::new("sh")
            .arg("-lc")
            .arg(cmd)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();

        if let Err(e) = spawned {
            rwarn!("sink", "notify-send failed: {e}");
        }
    }
}

/// Reminder wording: the last threshold is the hard "take a break" alert,
/// earlier ones are plain elapsed-time notices.
fn reminder_message(threshold_ms: u64, alert_ms: Option<u64>) -> (String, String) {
    let clock = format_clock(threshold_ms);

    if alert_ms == Some(threshold_ms) {
        (
            "Take a break!".to_string(),
            format!("Your screen time is {clock}"),
        )
    } else {
        ("Screen time".to_string(), format!("{clock} elapsed"))
    }
}
