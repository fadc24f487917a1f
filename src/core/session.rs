// License: MIT

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Active,
    Idle,
}

/// Live state of one tracking session.
///
/// Owned by the daemon loop and mutated only by the `Tracker`; services
/// and sinks never see more than read-only snapshots of it.
///
/// Invariants:
/// - `idle_ms` is zero whenever `mode == Active`.
/// - `active_ms` and `fired` reset together, in one call, exactly when an
///   idle span reaches the break threshold (or on a manual reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    mode: Mode,

    /// Accumulated active screen time. Sum of tick intervals applied while
    /// Active; wall-clock time is never read back into this.
    active_ms: u64,

    /// Idle time accumulated since the most recent idle entry. Spans are
    /// never merged: re-entering Idle starts from zero.
    idle_ms: u64,

    /// Latched once the current idle span qualified as a break. Stops idle
    /// accounting so the counter cannot grow without bound overnight.
    break_taken: bool,

    /// Reminder thresholds already fired this session.
    fired: HashSet<u64>,

    silent: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: Mode::Active,
            active_ms: 0,
            idle_ms: 0,
            break_taken: false,
            fired: HashSet::new(),
            silent: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_ms(&self) -> u64 {
        self.active_ms
    }

    pub fn idle_ms(&self) -> u64 {
        self.idle_ms
    }

    pub fn break_taken(&self) -> bool {
        self.break_taken
    }

    pub fn fired(&self) -> &HashSet<u64> {
        &self.fired
    }

    pub fn silent(&self) -> bool {
        self.silent
    }

    pub fn set_silent(&mut self, silent: bool) {
        self.silent = silent;
    }

    pub(crate) fn add_active(&mut self, ms: u64) {
        self.active_ms = self.active_ms.saturating_add(ms);
    }

    pub(crate) fn add_idle(&mut self, ms: u64) {
        self.idle_ms = self.idle_ms.saturating_add(ms);
    }

    pub(crate) fn mark_fired(&mut self, threshold_ms: u64) {
        self.fired.insert(threshold_ms);
    }

    pub(crate) fn enter_idle(&mut self) {
        self.mode = Mode::Idle;
        self.idle_ms = 0;
        self.break_taken = false;
    }

    pub(crate) fn enter_active(&mut self) {
        self.mode = Mode::Active;
        self.idle_ms = 0;
        self.break_taken = false;
    }

    /// Latch the current idle span as a taken break.
    pub(crate) fn latch_break(&mut self) {
        self.break_taken = true;
    }

    /// Atomic reset: back to the counters of a fresh session. Mode and
    /// silent flag are left alone.
    pub(crate) fn reset(&mut self) {
        self.active_ms = 0;
        self.idle_ms = 0;
        self.fired.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
