// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "respite",
    version = env!("CARGO_PKG_VERSION"),
    about = "Respite screen-time tracker and break reminder"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Display current screen time and session state")]
    Info {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Reset the screen-time counter")]
    Reset,

    #[command(about = "Toggle silent mode, or set it with on/off", disable_help_flag = true)]
    Silent {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    #[command(about = "Stop the running respite daemon")]
    Stop,
}
