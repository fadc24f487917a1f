// License: MIT

pub mod client;
pub mod server;

use std::path::PathBuf;

pub fn runtime_dir() -> Result<PathBuf, String> {
    std::env::var_os("XDG_RUNTIME_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| "XDG_RUNTIME_DIR is not set".to_string())
}

pub fn socket_path() -> Result<PathBuf, String> {
    Ok(runtime_dir()?.join("respite").join("respite.sock"))
}

/// Status file the presentation sink rewrites every tick; status bars can
/// poll it instead of round-tripping `info --json` through the socket.
pub fn status_path() -> Result<PathBuf, String> {
    Ok(runtime_dir()?.join("respite").join("status.json"))
}
