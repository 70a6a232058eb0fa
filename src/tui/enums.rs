//! Enumerations for TUI state management.

/// Screen currently shown by the terminal user interface.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    TaskList,
    AddTask,
    EditTask,
    Help,
    Confirm,
}

/// Whether the task list accepts changes.
///
/// Chosen once when the app is built; the list never switches variant while
/// running.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ListMode {
    /// Tasks can be opened, added, toggled and deleted.
    #[default]
    Interactive,
    /// Tasks can be browsed and searched only.
    ReadOnly,
}

impl ListMode {
    pub fn allows_changes(self) -> bool {
        matches!(self, ListMode::Interactive)
    }
}
