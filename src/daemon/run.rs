// License: MIT

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::core::{events::Event, tracker_msg::TrackerMsg, utils::now_ms};
use crate::services::dbus::EventSink;
use crate::{rinfo, rwarn};

use super::{AnyError, Daemon, MpscEventSink};

impl Daemon {
    pub async fn run(
        &mut self,
        mut shutdown: watch::Receiver<bool>,
        shutdown_tx: watch::Sender<bool>,
    ) -> Result<(), AnyError> {
        rinfo!("daemon", "starting");

        let (tx, mut rx) = mpsc::channel::<TrackerMsg>(256);

        if let Err(e) = crate::ipc::server::spawn_ipc_server(tx.clone()).await {
            rwarn!("ipc", "failed to start: {}", e);
        }

        {
            let sink: Arc<dyn EventSink> = Arc::new(MpscEventSink { tx: tx.clone() });
            let shutdown = shutdown.clone();

            tokio::spawn(async move {
                if let Err(e) = crate::services::dbus::run_dbus(sink, shutdown).await {
                    rwarn!("dbus", "listener failed: {e:?}");
                }
            });
        }

        tokio::spawn(crate::services::ticker::run_ticker(
            tx.clone(),
            self.tracker.cfg().tick_interval_ms,
        ));

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        rinfo!("daemon", "stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        rinfo!("daemon", "stopping (event channel closed)");
                        break;
                    };

                    match msg {
                        TrackerMsg::Event(event) => {
                            for action in self.handle_one_event(event) {
                                self.exec_action(action);
                            }
                        }

                        TrackerMsg::GetInfo { reply } => {
                            let _ = reply.send(self.tracker.snapshot(&self.session));
                        }

                        TrackerMsg::Reset { reply } => {
                            let actions = self.handle_one_event(Event::ManualReset { now_ms: now_ms() });
                            for action in actions {
                                self.exec_action(action);
                            }
                            let _ = reply.send(Ok("Timer reset".to_string()));
                        }

                        TrackerMsg::SetSilent { silent, reply } => {
                            let target = silent.unwrap_or(!self.session.silent());

                            let actions = self.handle_one_event(Event::SilentChanged {
                                silent: target,
                                now_ms: now_ms(),
                            });
                            for action in actions {
                                self.exec_action(action);
                            }

                            let out = if target {
                                "Silent mode on"
                            } else {
                                "Silent mode off"
                            };
                            let _ = reply.send(Ok(out.to_string()));
                        }

                        TrackerMsg::StopDaemon { reply } => {
                            rinfo!("daemon", "stopping (stop requested via IPC)");
                            let _ = reply.send(Ok("Stopping respite daemon".to_string()));
                            let _ = shutdown_tx.send(true);
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
