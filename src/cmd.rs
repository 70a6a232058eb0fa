//! Command implementations for the CLI interface.

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::store::TaskStore;
use crate::tui::enums::ListMode;
use crate::tui::run::run_tui;
use crate::view::{empty_state, print_table, visible_tasks};

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive UI (default).
    Ui {
        /// Browse and search only; adding, editing, toggling and deleting are disabled.
        #[arg(long)]
        read_only: bool,
    },

    /// Print the task list, pending tasks first.
    List {
        /// Only show tasks whose title contains this text (case-insensitive).
        #[arg(long)]
        query: Option<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Run the terminal UI.
pub fn cmd_ui(read_only: bool) -> std::io::Result<()> {
    let mode = if read_only {
        ListMode::ReadOnly
    } else {
        ListMode::Interactive
    };
    tracing::info!(?mode, "starting ui");
    run_tui(mode)
}

/// Print the seeded task list through the same view the UI uses.
pub fn cmd_list(query: Option<String>) {
    let store = TaskStore::seeded();
    let query = query.unwrap_or_default();
    let tasks = visible_tasks(store.tasks(), &query);
    match empty_state(store.len(), &query, tasks.len()) {
        Some(empty) => println!("{}", empty.message()),
        None => print_table(&tasks),
    }
}

/// Print completions for `shell` to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "taskpad", &mut std::io::stdout());
}
