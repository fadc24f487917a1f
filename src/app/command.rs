// License: MIT

use crate::cli::{Args, Command};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    let Some(cmd) = args.command else {
        return Ok(());
    };

    match cmd {
        Command::Info { json } => {
            let msg = if json { "info --json" } else { "info" };

            match crate::ipc::client::send_raw(msg).await {
                Ok(resp) => {
                    if !resp.is_empty() {
                        println!("{resp}");
                    }
                    Ok(())
                }
                Err(e) => {
                    if json {
                        // Status bars need valid JSON on stdout even when
                        // the daemon isn't running.
                        println!(
                            "{}",
                            r#"{"text":"","alt":"not_running","class":"not_running","tooltip":"Respite not running","icon_phase":0}"#
                        );
                    } else {
                        eprintln!("respite: {e}");
                    }
                    Ok(())
                }
            }
        }

        Command::Reset => {
            match crate::ipc::client::send_raw("reset").await {
                Ok(resp) => {
                    let out = resp.trim_end();
                    if out.is_empty() {
                        println!("Timer reset");
                    } else {
                        println!("{out}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("respite: {e}");
                    Ok(())
                }
            }
        }

        Command::Silent { args: silent_args } => {
            let mut msg = String::from("silent");
            if !silent_args.is_empty() {
                msg.push(' ');
                msg.push_str(&silent_args.join(" "));
            }

            match crate::ipc::client::send_raw(&msg).await {
                Ok(resp) => {
                    let out = resp.trim_end();
                    if out.is_empty() {
                        println!("Silent mode toggled");
                    } else {
                        println!("{out}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("respite: {e}");
                    Ok(())
                }
            }
        }

        Command::Stop => {
            match crate::ipc::client::send_raw("stop").await {
                Ok(resp) => {
                    let out = resp.trim_end();
                    if out.is_empty() {
                        println!("Stopping respite daemon");
                    } else {
                        println!("{out}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("respite: {e}");
                    Ok(())
                }
            }
        }
    }
}
