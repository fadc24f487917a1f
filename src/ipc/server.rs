// License: MIT

use std::io;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{UnixListener, UnixStream},
    sync::{mpsc, oneshot},
    time::{timeout, Duration},
};

use crate::core::tracker_msg::TrackerMsg;
use crate::{rdebug, rerror, rwarn};

/// Spawns the IPC socket server that listens for incoming commands.
pub async fn spawn_ipc_server(tx: mpsc::Sender<TrackerMsg>) -> io::Result<()> {
    let path = crate::ipc::socket_path().map_err(io::Error::other)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Stale socket from a crashed run; the instance lock already ensures
    // no live daemon holds it.
    if path.exists() {
        let _ = std::fs::remove_file(&path);
    }

    let listener = UnixListener::bind(&path)?;

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut stream, _addr)) => {
                    let tx = tx.clone();

                    tokio::spawn(async move {
                        let result = timeout(Duration::from_secs(10), async {
                            if let Err(e) = handle_connection(&mut stream, tx).await {
                                rerror!("ipc", "error handling connection: {}", e);
                            }
                        })
                        .await;

                        if result.is_err() {
                            rerror!("ipc", "connection timed out after 10 seconds");
                        }

                        let _ = stream.shutdown().await;
                    });
                }
                Err(e) => rerror!("ipc", "failed to accept connection: {}", e),
            }
        }
    });

    Ok(())
}

async fn handle_connection(
    stream: &mut UnixStream,
    tx: mpsc::Sender<TrackerMsg>,
) -> io::Result<()> {
    let mut buf = vec![0u8; 256];
    let n = stream.read(&mut buf).await?;

    if n == 0 {
        return Ok(());
    }

    let cmd = String::from_utf8_lossy(&buf[..n]).trim().to_string();

    if !cmd.contains("--json") {
        rdebug!("ipc", "received command: {}", cmd);
    }

    let response = route_command(&cmd, tx).await;

    stream.write_all(response.as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}

/// Routes incoming commands to the daemon loop and renders the reply.
async fn route_command(cmd: &str, tx: mpsc::Sender<TrackerMsg>) -> String {
    match cmd {
        c if c.starts_with("info") => {
            let as_json = c.contains("--json");

            let (reply, rx) = oneshot::channel();
            if tx.send(TrackerMsg::GetInfo { reply }).await.is_err() {
                return "ERROR: daemon loop unavailable".to_string();
            }

            match rx.await {
                Ok(snap) => {
                    if as_json {
                        serde_json::to_string(&snap.waybar)
                            .unwrap_or_else(|e| format!("ERROR: {e}"))
                    } else {
                        snap.pretty_text
                    }
                }
                Err(_) => "ERROR: daemon loop unavailable".to_string(),
            }
        }

        "reset" => {
            let (reply, rx) = oneshot::channel();
            if tx.send(TrackerMsg::Reset { reply }).await.is_err() {
                return "ERROR: daemon loop unavailable".to_string();
            }
            flatten_reply(rx.await)
        }

        c if c.starts_with("silent") => {
            let arg = c.strip_prefix("silent").unwrap_or("").trim();

            let silent = match arg {
                "on" => Some(true),
                "off" => Some(false),
                "" | "toggle" => None,
                other => {
                    return format!("ERROR: unknown silent argument '{other}'");
                }
            };

            let (reply, rx) = oneshot::channel();
            if tx.send(TrackerMsg::SetSilent { silent, reply }).await.is_err() {
                return "ERROR: daemon loop unavailable".to_string();
            }
            flatten_reply(rx.await)
        }

        "stop" => {
            let (reply, rx) = oneshot::channel();
            if tx.send(TrackerMsg::StopDaemon { reply }).await.is_err() {
                return "ERROR: daemon loop unavailable".to_string();
            }
            flatten_reply(rx.await)
        }

        _ => {
            rwarn!("ipc", "unknown command: {}", cmd);
            format!("ERROR: unknown command '{cmd}'")
        }
    }
}

fn flatten_reply(res: Result<Result<String, String>, oneshot::error::RecvError>) -> String {
    match res {
        Ok(Ok(s)) => s,
        Ok(Err(e)) => format!("ERROR: {e}"),
        Err(_) => "ERROR: daemon loop unavailable".to_string(),
    }
}
