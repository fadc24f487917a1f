// License: MIT

use serde::Serialize;

/// Snapshot returned from the daemon for `respite info`.
///
/// - `waybar` is the stable JSON contract.
/// - `pretty_text` is CLI-facing output for `respite info`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoSnapshot {
    pub waybar: WaybarInfo,

    #[serde(skip_serializing)]
    pub pretty_text: String,

    pub silent: bool,
}

/// Waybar JSON contract.
#[derive(Debug, Clone, Serialize)]
pub struct WaybarInfo {
    /// Elapsed active time as `H:MM`.
    pub text: String,
    pub alt: String,
    pub class: String,
    pub tooltip: String,
    /// Pie-clock angle, 0..=360 in 15-degree steps.
    pub icon_phase: u32,
}

impl InfoSnapshot {
    pub fn new(waybar: WaybarInfo, pretty_text: impl Into<String>, silent: bool) -> Self {
        Self {
            waybar,
            pretty_text: pretty_text.into(),
            silent,
        }
    }
}

/// Angle of the pie-clock icon for the elapsed fraction of the alert
/// interval, quantized down to 15-degree steps and clamped to 0..=360.
pub fn icon_phase(active_ms: u64, alert_ms: Option<u64>) -> u32 {
    let Some(alert_ms) = alert_ms.filter(|a| *a > 0) else {
        return 0;
    };

    // Integer math so exact fractions land on exact steps.
    let raw = (active_ms as u128 * 360) / alert_ms as u128;
    let stepped = (raw / 15) * 15;
    stepped.min(360) as u32
}
