// License: MIT

mod actions;
mod run;
pub mod sink;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::core::{
    action::Action,
    config::TrackerConfig,
    events::Event,
    session::Session,
    tracker::Tracker,
    tracker_msg::TrackerMsg,
};
use crate::rdebug;
use crate::services::dbus::EventSink;

use self::sink::PresentationSink;

pub(crate) type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// Bridges the D-Bus listener thread into the daemon's message loop.
struct MpscEventSink {
    tx: mpsc::Sender<TrackerMsg>,
}

impl EventSink for MpscEventSink {
    fn push(&self, ev: Event) {
        let _ = self.tx.try_send(TrackerMsg::Event(ev));
    }
}

pub struct Daemon {
    tracker: Tracker,
    session: Session,
    sink: Arc<dyn PresentationSink>,
}

impl Daemon {
    pub fn new(cfg: TrackerConfig, silent_at_start: bool, sink: Arc<dyn PresentationSink>) -> Self {
        let mut session = Session::new();
        session.set_silent(silent_at_start);

        Self {
            tracker: Tracker::new(cfg),
            session,
            sink,
        }
    }

    fn handle_one_event(&mut self, event: Event) -> Vec<Action> {
        if !matches!(event, Event::Tick { .. }) {
            rdebug!("daemon", "incoming: {:?} (t={})", event, event.now_ms());
        }

        self.tracker.handle_event(&mut self.session, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Mode;
    use crate::core::utils::now_ms;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        snapshots: Mutex<Vec<(Mode, u64)>>,
        crossed: Mutex<Vec<u64>>,
    }

    impl PresentationSink for RecordingSink {
        fn on_snapshot(&self, mode: Mode, active_ms: u64) {
            self.snapshots.lock().unwrap().push((mode, active_ms));
        }

        fn on_threshold_crossed(&self, threshold_ms: u64) {
            self.crossed.lock().unwrap().push(threshold_ms);
        }
    }

    #[test]
    fn actions_are_routed_to_the_sink() {
        let sink = Arc::new(RecordingSink::default());
        let cfg = TrackerConfig::new(1_000, 180_000, vec![2_000]).unwrap();
        let mut daemon = Daemon::new(cfg, false, sink.clone());

        for _ in 0..2 {
            let actions = daemon.handle_one_event(Event::Tick { now_ms: now_ms() });
            for action in actions {
                daemon.exec_action(action);
            }
        }

        assert_eq!(
            sink.snapshots.lock().unwrap().as_slice(),
            &[(Mode::Active, 1_000), (Mode::Active, 2_000)]
        );
        assert_eq!(sink.crossed.lock().unwrap().as_slice(), &[2_000]);
    }
}
