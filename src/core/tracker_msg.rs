// License: MIT

use tokio::sync::oneshot;

use crate::core::{events::Event, info::InfoSnapshot};

/// Messages consumed by the daemon loop. Everything that touches the
/// session funnels through this one channel, so a tick and a lifecycle
/// event can never be applied concurrently.
#[derive(Debug)]
pub enum TrackerMsg {
    Event(Event),

    GetInfo {
        reply: oneshot::Sender<InfoSnapshot>,
    },

    Reset {
        reply: oneshot::Sender<Result<String, String>>,
    },

    /// `None` toggles the current silent state.
    SetSilent {
        silent: Option<bool>,
        reply: oneshot::Sender<Result<String, String>>,
    },

    StopDaemon {
        reply: oneshot::Sender<Result<String, String>>,
    },
}
