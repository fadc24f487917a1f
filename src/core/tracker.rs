// License: MIT

use std::time::Duration;

use crate::core::{
    action::Action,
    config::TrackerConfig,
    events::Event,
    info::{icon_phase, InfoSnapshot, WaybarInfo},
    policy,
    session::{Mode, Session},
    utils::{format_clock, format_duration},
};
use crate::rinfo;

/// The activity-tracking state machine.
///
/// Holds only immutable configuration; all mutable state lives in the
/// `Session` the caller owns. `handle_event` is total: duplicate or
/// out-of-order lifecycle events are no-ops on an already-consistent
/// session, since the event source's delivery order is not guaranteed to
/// be perfectly paired.
#[derive(Debug)]
pub struct Tracker {
    cfg: TrackerConfig,
}

impl Tracker {
    pub fn new(cfg: TrackerConfig) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &TrackerConfig {
        &self.cfg
    }

    pub fn handle_event(&self, session: &mut Session, event: Event) -> Vec<Action> {
        let mut out = Vec::new();

        match event {
            Event::Tick { .. } => match session.mode() {
                Mode::Active => {
                    // Accumulate by the configured interval, never by wall
                    // clock deltas, so active time is an exact tick count.
                    session.add_active(self.cfg.tick_interval_ms);

                    out.push(Action::Snapshot {
                        mode: session.mode(),
                        active_ms: session.active_ms(),
                    });

                    if !session.silent() {
                        let due = policy::due_reminders(
                            session.active_ms(),
                            &self.cfg.reminders_ms,
                            session.fired(),
                        );
                        for threshold_ms in due {
                            session.mark_fired(threshold_ms);
                            out.push(Action::ThresholdCrossed { threshold_ms });
                        }
                    }
                }

                Mode::Idle => {
                    if !session.break_taken() {
                        session.add_idle(self.cfg.tick_interval_ms);

                        if session.idle_ms() >= self.cfg.break_threshold_ms {
                            rinfo!(
                                "tracker",
                                "reset (idle for {})",
                                format_duration(Duration::from_millis(session.idle_ms()))
                            );
                            session.reset();
                            // A qualified break stays qualified; stop idle
                            // accounting until an explicit resume arrives.
                            session.latch_break();
                        }
                    }

                    out.push(Action::Snapshot {
                        mode: session.mode(),
                        active_ms: session.active_ms(),
                    });
                }
            },

            Event::ScreensaverStarted { .. } | Event::PrepareForSleep { .. } => {
                if session.mode() == Mode::Active {
                    rinfo!("tracker", "idle ({})", lifecycle_name(&event));
                    session.enter_idle();
                }
            }

            Event::ScreensaverStopped { .. } | Event::ResumedFromSleep { .. } => {
                if session.mode() == Mode::Idle {
                    rinfo!("tracker", "active ({})", lifecycle_name(&event));
                    session.enter_active();
                }
            }

            Event::ManualReset { .. } => {
                rinfo!("tracker", "reset (requested)");
                session.reset();

                out.push(Action::Snapshot {
                    mode: session.mode(),
                    active_ms: session.active_ms(),
                });
            }

            Event::SilentChanged { silent, .. } => {
                rinfo!("tracker", "silent mode {}", if silent { "on" } else { "off" });
                session.set_silent(silent);
            }
        }

        out
    }

    pub fn snapshot(&self, session: &Session) -> InfoSnapshot {
        let text = format_clock(session.active_ms());

        let alt = if session.silent() {
            "silent"
        } else {
            match session.mode() {
                Mode::Active => "active",
                Mode::Idle => "idle",
            }
        };

        let tooltip = format!(
            "Screen time: {}",
            format_duration(Duration::from_millis(session.active_ms()))
        );

        let pretty = render_pretty(session, &self.cfg);

        let waybar = WaybarInfo {
            text,
            alt: alt.to_string(),
            class: alt.to_string(),
            tooltip,
            icon_phase: icon_phase(session.active_ms(), self.cfg.alert_ms()),
        };

        InfoSnapshot::new(waybar, pretty, session.silent())
    }
}

fn lifecycle_name(event: &Event) -> &'static str {
    match event {
        Event::ScreensaverStarted { .. } => "screensaver started",
        Event::ScreensaverStopped { .. } => "screensaver stopped",
        Event::PrepareForSleep { .. } => "sleep",
        Event::ResumedFromSleep { .. } => "wake",
        _ => "event",
    }
}

fn render_pretty(session: &Session, cfg: &TrackerConfig) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Screen time: {}",
        format_duration(Duration::from_millis(session.active_ms()))
    ));

    let state = if session.silent() {
        "silent"
    } else {
        match session.mode() {
            Mode::Active => "active",
            Mode::Idle => "idle",
        }
    };
    lines.push(format!("State: {state}"));

    if session.mode() == Mode::Idle && !session.break_taken() {
        lines.push(format!(
            "Idle for: {} (break at {})",
            format_duration(Duration::from_millis(session.idle_ms())),
            format_duration(Duration::from_millis(cfg.break_threshold_ms)),
        ));
    }

    for t in &cfg.reminders_ms {
        let mark = if session.fired().contains(t) { "x" } else { " " };
        lines.push(format!(
            "  [{mark}] remind at {}",
            format_duration(Duration::from_millis(*t))
        ));
    }

    lines.join("\n")
}
