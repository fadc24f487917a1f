// License: MIT

use std::time::Duration;

pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

pub fn format_duration(dur: Duration) -> String {
    let secs = dur.as_secs();

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        let minutes = secs / 60;
        let seconds = secs % 60;
        format!("{}m {}s", minutes, seconds)
    } else {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        format!("{}h {}m", hours, minutes)
    }
}

/// `H:MM` rendering used for the status text, minute granularity.
pub fn format_clock(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 3600, (secs / 60) % 60)
}

pub fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', r"'\''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_renders_hours_and_minutes() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65 * 60 * 1000), "1:05");
        assert_eq!(format_clock(2 * 3600 * 1000), "2:00");
    }

    #[test]
    fn duration_renders_per_magnitude() {
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3660)), "1h 1m");
    }
}
