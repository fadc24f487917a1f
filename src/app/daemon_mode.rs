// License: MIT

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::Args;
use crate::core::utils::format_duration;
use crate::daemon::sink::DesktopSink;
use crate::daemon::Daemon;
use crate::{rerror, rinfo};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    // single-instance
    let _instance_lock = crate::app::platform::acquire_single_instance_lock().map_err(|e| {
        eprintln!("{e}");
        io::Error::new(io::ErrorKind::AlreadyExists, e)
    })?;

    crate::log::set_verbose(args.verbose);

    let config_path: PathBuf = match args.config.as_deref() {
        Some(p) => p.to_path_buf(),
        None => crate::config::resolve_default_config_path(),
    };

    let file_cfg = crate::config::load_from_path(&config_path).map_err(|e| {
        rerror!("config", "{e:#}");
        AnyError::from(e.to_string())
    })?;

    let cfg = file_cfg.to_tracker_config().map_err(|e| {
        rerror!("config", "invalid configuration: {e}");
        AnyError::from(e.to_string())
    })?;

    rinfo!(
        "respite",
        "starting (tick {}, break after {}, {} reminder(s))",
        format_duration(Duration::from_millis(cfg.tick_interval_ms)),
        format_duration(Duration::from_millis(cfg.break_threshold_ms)),
        cfg.reminders_ms.len(),
    );

    let sink = Arc::new(DesktopSink::new(
        cfg.alert_ms(),
        crate::ipc::status_path().ok(),
    ));

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let mut daemon = Daemon::new(cfg, file_cfg.silent, sink);

    let mut daemon_task = tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move { daemon.run(shutdown_rx, shutdown_tx).await }
    });

    let result = tokio::select! {
        res = &mut daemon_task => {
            match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err) as AnyError),
            }
        }

        _ = tokio::signal::ctrl_c() => {
            rinfo!("respite", "received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);

            match daemon_task.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e),
                Err(join_err) => Err(Box::new(join_err) as AnyError),
            }
        }
    };

    if let Ok(sock) = crate::ipc::socket_path() {
        let _ = std::fs::remove_file(sock);
    }
    if let Ok(status) = crate::ipc::status_path() {
        let _ = std::fs::remove_file(status);
    }

    rinfo!("respite", "stopped");
    result
}
