// License: MIT

use std::fmt::Display;
use std::future::Future;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::UnixStream,
    time::{timeout, Duration},
};

const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// One request/response exchange with the running daemon. The protocol
/// is a single command line followed by a half-close; the daemon writes
/// its full reply and closes.
pub async fn send_raw(cmd: &str) -> Result<String, String> {
    let path = crate::ipc::socket_path()?;

    if !path.exists() {
        return Err("daemon not running".to_string());
    }

    let mut stream = step("connect", UnixStream::connect(&path)).await?;

    step("send command", stream.write_all(cmd.as_bytes())).await?;
    step("finish request", stream.shutdown()).await?;

    let mut buf = Vec::new();
    step("read reply", stream.read_to_end(&mut buf)).await?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

async fn step<T, E: Display>(
    what: &str,
    fut: impl Future<Output = Result<T, E>>,
) -> Result<T, String> {
    match timeout(IO_TIMEOUT, fut).await {
        Ok(Ok(v)) => Ok(v),
        Ok(Err(e)) => Err(format!("{what} failed: {e}")),
        Err(_) => Err(format!(
            "{what} timed out after {}s (daemon unresponsive?)",
            IO_TIMEOUT.as_secs()
        )),
    }
}
