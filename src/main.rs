//! # taskpad
//!
//! A small terminal task list: create, edit, delete and toggle tasks, search
//! by title, with pending work always listed before completed work.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the task list
//! taskpad
//!
//! # Browse without changing anything
//! taskpad ui --read-only
//!
//! # Print the list, filtered by title
//! taskpad list --query notes
//! ```
//!
//! ## How screens talk
//!
//! The list screen owns the tasks. The new-task and edit screens never touch
//! that collection: they hand their result back as a named navigation
//! parameter (`newTask` or `updatedTask`) holding the task as JSON. The list
//! decodes and validates the parameter, merges it by id and clears it.
//!
//! Tasks live in memory only and start from six sample tasks on every run.

use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod form;
pub mod nav;
pub mod params;
pub mod seed;
pub mod store;
pub mod task;
pub mod view;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Commands::Ui { read_only: false });

    init_tracing(&cli, matches!(command, Commands::Ui { .. }))?;

    match command {
        Commands::Ui { read_only } => cmd_ui(read_only).context("terminal UI failed")?,
        Commands::List { query } => cmd_list(query),
        Commands::Completions { shell } => cmd_completions(shell),
    }
    Ok(())
}

/// Install the tracing subscriber.
///
/// The UI owns the terminal, so it only logs when a log file is given.
fn init_tracing(cli: &Cli, is_ui: bool) -> anyhow::Result<()> {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_env("TASKPAD_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let installed = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if is_ui => return Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
