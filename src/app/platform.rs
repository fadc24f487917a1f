// License: MIT

use std::io;
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::Path;

/// Bind the instance lock socket. Holding the listener for the process
/// lifetime is what keeps a second daemon from starting.
pub fn acquire_single_instance_lock() -> Result<UnixListener, String> {
    let path = crate::ipc::runtime_dir()?
        .join("respite")
        .join("respite.lock");

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match UnixListener::bind(&path) {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            // Someone answering means a daemon is live; nobody answering
            // means a stale path left by a crash, which we reclaim.
            if UnixStream::connect(&path).is_ok() {
                return Err(format!(
                    "respite is already running (another instance holds {})",
                    path.display()
                ));
            }

            let _ = std::fs::remove_file(&path);
            UnixListener::bind(&path).map_err(|e| bind_error(&path, e))
        }
        Err(e) => Err(bind_error(&path, e)),
    }
}

fn bind_error(path: &Path, e: io::Error) -> String {
    format!("failed to bind instance lock {}: {e}", path.display())
}
