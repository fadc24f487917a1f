// License: MIT

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;
use zbus::{Connection, Proxy};

use crate::core::events::Event;
use crate::core::utils::now_ms;
use crate::{rdebug, rinfo, rwarn};

/// Sink for pushing events into the daemon loop.
/// Implement this for whatever channel/queue you're using.
pub trait EventSink: Send + Sync + 'static {
    fn push(&self, ev: Event);
}

/// Screensaver services to watch on the session bus. Both freedesktop
/// and GNOME variants emit `ActiveChanged(bool)`.
const SCREENSAVER_SERVICES: [(&str, &str); 2] = [
    ("org.freedesktop.ScreenSaver", "/org/freedesktop/ScreenSaver"),
    ("org.gnome.ScreenSaver", "/org/gnome/ScreenSaver"),
];

/// Run the D-Bus listeners that feed lifecycle events into the tracker:
///
/// - `ActiveChanged` (session bus, screensaver) -> screensaver start/stop
/// - `PrepareForSleep` (system bus, login1 Manager) -> sleep/wake
///
/// Either bus being unavailable downgrades to a warning; the tracker is
/// designed to absorb a lopsided event stream.
pub async fn run_dbus(sink: Arc<dyn EventSink>, mut shutdown: watch::Receiver<bool>) -> zbus::Result<()> {
    match Connection::session().await {
        Ok(session) => {
            for (service, path) in SCREENSAVER_SERVICES {
                if let Err(e) = watch_screensaver(&session, service, path, sink.clone()).await {
                    rdebug!("dbus", "{}: not watched: {e:?}", service);
                }
            }
        }
        Err(e) => {
            rwarn!("dbus", "could not connect to session bus: {e:?}");
        }
    }

    match Connection::system().await {
        Ok(system) => {
            if let Err(e) = watch_sleep(&system, sink.clone()).await {
                rwarn!("dbus", "login1 sleep signals unavailable: {e:?}");
            }
        }
        Err(e) => {
            rwarn!("dbus", "could not connect to system bus: {e:?}");
        }
    }

    // Keep the listeners alive until shutdown.
    loop {
        if *shutdown.borrow() {
            break;
        }

        let _ = shutdown.changed().await;
        if *shutdown.borrow() {
            break;
        }
    }

    Ok(())
}

async fn watch_screensaver(
    conn: &Connection,
    service: &'static str,
    path: &'static str,
    sink: Arc<dyn EventSink>,
) -> zbus::Result<()> {
    let proxy = Proxy::new(conn, service, path, service).await?;
    let mut stream = proxy.receive_signal("ActiveChanged").await?;

    rinfo!("dbus", "watching {} ActiveChanged", service);

    tokio::spawn(async move {
        while let Some(sig) = stream.next().await {
            let active: bool = match sig.body().deserialize() {
                Ok(v) => v,
                Err(_) => continue,
            };

            let t = now_ms();
            sink.push(if active {
                Event::ScreensaverStarted { now_ms: t }
            } else {
                Event::ScreensaverStopped { now_ms: t }
            });
        }
    });

    Ok(())
}

async fn watch_sleep(conn: &Connection, sink: Arc<dyn EventSink>) -> zbus::Result<()> {
    let proxy = Proxy::new(
        conn,
        "org.freedesktop.login1",
        "/org/freedesktop/login1",
        "org.freedesktop.login1.Manager",
    )
    .await?;

    let mut stream = proxy.receive_signal("PrepareForSleep").await?;

    rinfo!("dbus", "watching login1 PrepareForSleep");

    tokio::spawn(async move {
        while let Some(sig) = stream.next().await {
            let going_down: bool = match sig.body().deserialize() {
                Ok(v) => v,
                Err(_) => continue,
            };

            let t = now_ms();
            sink.push(if going_down {
                Event::PrepareForSleep { now_ms: t }
            } else {
                Event::ResumedFromSleep { now_ms: t }
            });
        }
    });

    Ok(())
}
