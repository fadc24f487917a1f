// License: MIT

use std::time::Duration;

use crate::core::action::Action;
use crate::core::utils::format_duration;
use crate::rinfo;

use super::Daemon;

impl Daemon {
    pub(super) fn exec_action(&self, action: Action) {
        match action {
            Action::Snapshot { mode, active_ms } => {
                self.sink.on_snapshot(mode, active_ms);
            }

            Action::ThresholdCrossed { threshold_ms } => {
                rinfo!(
                    "daemon",
                    "reminder: {} of screen time",
                    format_duration(Duration::from_millis(threshold_ms))
                );
                self.sink.on_threshold_crossed(threshold_ms);
            }
        }
    }
}
