// License: MIT

use crate::core::events::Event;
use crate::core::tracker_msg::TrackerMsg;
use crate::core::utils::now_ms;
use crate::{rinfo, rwarn};

use tokio::sync::mpsc::Sender;
use tokio::time::{sleep, Duration};

/// The clock source: one `Event::Tick` per configured interval. The
/// tracker accumulates by the interval itself, so a delayed tick skews
/// the session by at most one interval and never double-counts.
pub async fn run_ticker(tx: Sender<TrackerMsg>, interval_ms: u64) {
    rinfo!("ticker", "started ({}ms interval)", interval_ms);

    loop {
        sleep(Duration::from_millis(interval_ms)).await;

        // If the daemon is gone, stop.
        if tx
            .send(TrackerMsg::Event(Event::Tick { now_ms: now_ms() }))
            .await
            .is_err()
        {
            rwarn!("ticker", "stopping (receiver dropped)");
            break;
        }
    }
}
