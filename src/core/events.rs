// License: MIT

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Tick {
        now_ms: u64,
    },

    ScreensaverStarted {
        now_ms: u64,
    },
    ScreensaverStopped {
        now_ms: u64,
    },

    PrepareForSleep {
        now_ms: u64,
    },
    ResumedFromSleep {
        now_ms: u64,
    },

    /// Explicit reset requested by the user (`respite reset`).
    ManualReset {
        now_ms: u64,
    },

    /// Silent mode switched on/off. While silent, reminders are held back
    /// and fire on the first non-silent tick once they are overdue.
    SilentChanged {
        silent: bool,
        now_ms: u64,
    },
}

impl Event {
    pub fn now_ms(&self) -> u64 {
        match self {
            Event::Tick { now_ms }
            | Event::ScreensaverStarted { now_ms }
            | Event::ScreensaverStopped { now_ms }
            | Event::PrepareForSleep { now_ms }
            | Event::ResumedFromSleep { now_ms }
            | Event::ManualReset { now_ms }
            | Event::SilentChanged { now_ms, .. } => *now_ms,
        }
    }
}
