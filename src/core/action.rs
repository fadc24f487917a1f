// License: MIT

use crate::core::session::Mode;

/// Outputs of the tracker state machine.
///
/// The tracker performs no I/O itself; the daemon translates these into
/// presentation-sink calls after each `handle_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Display refresh, emitted after every tick (and after a manual
    /// reset, so the display does not lag a whole tick behind).
    Snapshot {
        mode: Mode,
        active_ms: u64,
    },

    /// A reminder threshold was crossed for the first time this session.
    /// Emitted in ascending threshold order when several cross at once.
    ThresholdCrossed {
        threshold_ms: u64,
    },
}
