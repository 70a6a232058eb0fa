use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// In-memory task list with a terminal UI.
/// Starts from a fixed set of sample tasks; nothing is saved on exit.
#[derive(Parser)]
#[command(name = "taskpad", version, about = "Terminal task list")]
pub struct Cli {
    /// Write logs to this file. Without it, the UI runs with logging off.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log debug events.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
