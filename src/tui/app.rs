//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store, handles
//! key input, renders the screens and moves between them. Moving from a form
//! screen back to the list carries the result as navigation parameters; the
//! list applies them when it regains focus.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mockable::{Clock, DefaultClock};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::{
    fields::TaskStatus,
    form::{apply_edit, build_new_task, FormValues},
    nav::{edit_params, resolve_edit_target, take_list_events, Params, TaskEvent},
    store::TaskStore,
    task::{now_millis, Task},
    tui::{
        colors::{ACCENT, DARK_RED, DIMMED, MUTED},
        enums::{AppState, ListMode},
        task_form::{TaskForm, DESCRIPTION_GLOBAL_ORDER, STATUS_GLOBAL_ORDER, TITLE_GLOBAL_ORDER},
        utils::centered_rect,
    },
    view::{empty_state, visible_tasks},
};

/// Main application state for the terminal user interface.
pub struct App<C: Clock = DefaultClock> {
    state: AppState,
    mode: ListMode,
    store: TaskStore,
    clock: C,
    /// Parameters handed to the list screen by the last navigation.
    params: Params,
    task_list_state: TableState,
    visible: Vec<String>,
    task_form: TaskForm,
    edit_target: Option<Task>,
    confirm_target: Option<String>,
    search_text: String,
    search_active: bool,
    status_message: String,
}

impl App<DefaultClock> {
    /// App over the seeded task list.
    pub fn new(mode: ListMode) -> Self {
        Self::with_store(TaskStore::seeded(), mode, DefaultClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_store(store: TaskStore, mode: ListMode, clock: C) -> Self {
        let mut app = App {
            state: AppState::TaskList,
            mode,
            store,
            clock,
            params: Params::new(),
            task_list_state: TableState::default(),
            visible: Vec::new(),
            task_form: TaskForm::new(),
            edit_target: None,
            confirm_target: None,
            search_text: String::new(),
            search_active: false,
            status_message: String::new(),
        };
        app.update_visible_tasks();
        app
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Switch screens, handing `params` to the destination.
    fn navigate(&mut self, target: AppState, params: Params) {
        tracing::debug!(from = ?self.state, to = ?target, "navigate");
        match target {
            AppState::TaskList => {
                self.params = params;
                self.on_list_focus();
            }
            AppState::AddTask => {
                self.task_form = TaskForm::new();
            }
            AppState::EditTask => {
                self.edit_target = resolve_edit_target(&params).ok();
                self.task_form = match &self.edit_target {
                    Some(task) => TaskForm::from_values(&FormValues::from_task(task)),
                    None => TaskForm::new(),
                };
            }
            AppState::Help | AppState::Confirm => {}
        }
        self.state = target;
    }

    /// Apply whatever the previous screen handed back, then refresh the view.
    fn on_list_focus(&mut self) {
        let events = take_list_events(&mut self.params);
        for event in events {
            let id = event.task().id.clone();
            let created = matches!(event, TaskEvent::Created(_));
            if self.store.apply(event) {
                self.select_after_refresh(&id);
                self.set_status_message(if created { "Task created" } else { "Task updated" });
            }
        }
        self.update_visible_tasks();
    }

    fn select_after_refresh(&mut self, id: &str) {
        self.update_visible_tasks();
        if let Some(idx) = self.visible.iter().position(|v| v == id) {
            self.task_list_state.select(Some(idx));
        }
    }

    /// Recompute the visible task ids, keeping the selection on the same task when possible.
    fn update_visible_tasks(&mut self) {
        let old_selected_id = self
            .task_list_state
            .selected()
            .and_then(|idx| self.visible.get(idx))
            .cloned();

        self.visible = visible_tasks(self.store.tasks(), &self.search_text)
            .into_iter()
            .map(|t| t.id.clone())
            .collect();

        let new_idx = match old_selected_id {
            Some(old_id) => self.visible.iter().position(|id| *id == old_id).or(Some(0)),
            None => Some(0),
        };
        self.task_list_state
            .select(if self.visible.is_empty() { None } else { new_idx });
    }

    fn selected_task_id(&self) -> Option<String> {
        self.task_list_state
            .selected()
            .and_then(|idx| self.visible.get(idx))
            .cloned()
    }

    fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Handle keys on the list screen. Returns true if the app should quit.
    fn handle_task_list_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.search_active {
            match key {
                KeyCode::Esc => {
                    self.search_active = false;
                    self.search_text.clear();
                    self.update_visible_tasks();
                }
                KeyCode::Enter => {
                    self.search_active = false;
                }
                KeyCode::Backspace => {
                    self.search_text.pop();
                    self.update_visible_tasks();
                }
                KeyCode::Char(c) => {
                    self.search_text.push(c);
                    self.update_visible_tasks();
                }
                _ => {}
            }
            return false;
        }

        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if self.search_text.is_empty() {
                    return true;
                }
                self.search_text.clear();
                self.update_visible_tasks();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.task_list_state.selected() {
                    if selected > 0 {
                        self.task_list_state.select(Some(selected - 1));
                    }
                } else if !self.visible.is_empty() {
                    self.task_list_state.select(Some(0));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.task_list_state.selected() {
                    if selected + 1 < self.visible.len() {
                        self.task_list_state.select(Some(selected + 1));
                    }
                } else if !self.visible.is_empty() {
                    self.task_list_state.select(Some(0));
                }
            }
            KeyCode::Char('/') => {
                self.search_active = true;
            }
            KeyCode::Char('h') | KeyCode::F(1) => {
                self.state = AppState::Help;
            }
            KeyCode::Char('a') | KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('d')
            | KeyCode::Char('c') | KeyCode::Char(' ')
                if !self.mode.allows_changes() =>
            {
                self.set_status_message("Read-only view");
            }
            KeyCode::Char('a') => {
                self.navigate(AppState::AddTask, Params::new());
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(task) = self.selected_task_id().and_then(|id| self.store.get(&id)) {
                    match edit_params(task) {
                        Ok(params) => self.navigate(AppState::EditTask, params),
                        Err(e) => self.set_status_message(format!("Error: {e}")),
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_task_id() {
                    self.confirm_target = Some(id);
                    self.state = AppState::Confirm;
                }
            }
            KeyCode::Char('c') | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_task_id() {
                    if self.store.toggle_status(&id, &self.clock) {
                        self.update_visible_tasks();
                        if let Some(task) = self.store.get(&id) {
                            let msg = format!("Marked {}", task.status);
                            self.set_status_message(msg);
                        }
                    }
                }
            }
            _ => {}
        }
        false
    }

    /// Handle keys on the new-task and edit screens.
    fn handle_form_input(&mut self, key: KeyCode, is_edit: bool) -> bool {
        if is_edit && self.edit_target.is_none() {
            if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.navigate(AppState::TaskList, Params::new());
            }
            return false;
        }

        match key {
            KeyCode::Esc => self.navigate(AppState::TaskList, Params::new()),
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Left => self.task_form.handle_left_right(false),
            KeyCode::Right => self.task_form.handle_left_right(true),
            KeyCode::Home => {
                if let Some(field) = self.task_form.active_input() {
                    field.move_cursor_home();
                }
            }
            KeyCode::End => {
                if let Some(field) = self.task_form.active_input() {
                    field.move_cursor_end();
                }
            }
            KeyCode::Backspace => self.task_form.handle_backspace(),
            KeyCode::Delete => self.task_form.handle_delete(),
            KeyCode::Enter => self.submit_form(is_edit),
            KeyCode::Char(c) => self.task_form.handle_char(c),
            _ => {}
        }
        false
    }

    /// Build the task from the form and hand it back to the list.
    ///
    /// With a blank title the submit action is disabled and nothing happens.
    fn submit_form(&mut self, is_edit: bool) {
        if !self.task_form.can_submit() {
            return;
        }
        let values = self.task_form.values();
        let now = now_millis(&self.clock);
        let event = if is_edit {
            let Some(original) = self.edit_target.as_ref() else {
                return;
            };
            apply_edit(original, &values, now).map(TaskEvent::Updated)
        } else {
            build_new_task(&values, now).map(TaskEvent::Created)
        };
        let Ok(event) = event else {
            return;
        };
        match event.into_params() {
            Ok(params) => self.navigate(AppState::TaskList, params),
            Err(e) => self.set_status_message(format!("Error: {e}")),
        }
    }

    fn handle_confirm_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(id) = self.confirm_target.take() {
                    if self.store.delete(&id) {
                        self.set_status_message("Task deleted");
                    }
                }
                self.state = AppState::TaskList;
                self.update_visible_tasks();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_target = None;
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        false
    }

    fn handle_help_input(&mut self, key: KeyCode) -> bool {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h')) {
            self.state = AppState::TaskList;
        }
        false
    }

    /// Dispatch a key to the current screen. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        self.clear_status_message();
        match self.state {
            AppState::TaskList => self.handle_task_list_input(key.code, key.modifiers),
            AppState::AddTask => self.handle_form_input(key.code, false),
            AppState::EditTask => self.handle_form_input(key.code, true),
            AppState::Help => self.handle_help_input(key.code),
            AppState::Confirm => self.handle_confirm_input(key.code),
        }
    }

    /// Poll for a keyboard event and handle it.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    /// Render the list screen: header, search line and task table.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // search
                Constraint::Min(0),    // tasks
            ])
            .split(area);

        let hint = match self.mode {
            ListMode::Interactive => "a: Add",
            ListMode::ReadOnly => "read-only",
        };
        let header = Paragraph::new(Line::from(vec![
            Span::styled("TASKS", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(hint, Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC)),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let search_style = if self.search_active {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        };
        let search_line = if self.search_text.is_empty() && !self.search_active {
            Line::from(Span::styled("Search tasks", Style::default().fg(MUTED)))
        } else {
            Line::from(self.search_text.as_str())
        };
        let search = Paragraph::new(search_line).block(
            Block::default()
                .borders(Borders::ALL)
                .title("/ Search")
                .border_style(search_style),
        );
        f.render_widget(search, chunks[1]);
        if self.search_active {
            let x = chunks[1].x + self.search_text.chars().count() as u16 + 1;
            f.set_cursor_position((x, chunks[1].y + 1));
        }

        let block = Block::default().borders(Borders::ALL).title(format!(
            "Tasks ({}/{}) - Press 'h' for help",
            self.visible.len(),
            self.store.len()
        ));

        if let Some(empty) = empty_state(self.store.len(), &self.search_text, self.visible.len()) {
            let message = Paragraph::new(Span::styled(empty.message(), Style::default().fg(MUTED)))
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(message, chunks[2]);
            return;
        }

        let header_cells = ["Title", "Status", "Description"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().bg(ACCENT).fg(Color::White))
            .height(1);

        let rows: Vec<Row> = self
            .visible
            .iter()
            .filter_map(|id| self.store.get(id))
            .map(|task| {
                let style = match task.status {
                    TaskStatus::Completed => Style::default().fg(DIMMED),
                    TaskStatus::Pending => Style::default().fg(Color::White),
                };
                Row::new(vec![
                    Cell::from(task.title.as_str()).style(style.add_modifier(Modifier::BOLD)),
                    Cell::from(task.status.as_str().to_uppercase()).style(Style::default().fg(MUTED)),
                    Cell::from(task.description.as_str()).style(style),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(40),
            Constraint::Length(11),
            Constraint::Min(20),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, chunks[2], &mut self.task_list_state);
    }

    /// Render the new-task or edit form.
    fn render_task_form(&mut self, f: &mut Frame, area: Rect, is_edit: bool) {
        let heading = if is_edit { "Edit Task" } else { "New Task" };

        if is_edit && self.edit_target.is_none() {
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("Task not found.", Style::default().fg(MUTED))),
            ])
            .block(Block::default().borders(Borders::ALL).title(heading))
            .alignment(Alignment::Center);
            f.render_widget(placeholder, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(6), // Description
                Constraint::Length(3), // Status
                Constraint::Length(3), // Submit
                Constraint::Min(0),
            ])
            .split(area);

        let focus = |field: usize| {
            if self.task_form.current_field == field {
                Style::default().fg(ACCENT)
            } else {
                Style::default()
            }
        };

        let title = Paragraph::new(self.task_form.title.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{heading} - Title *"))
                .border_style(focus(TITLE_GLOBAL_ORDER)),
        );
        f.render_widget(title, chunks[0]);

        let description = Paragraph::new(self.task_form.description.value.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Description (optional)")
                    .border_style(focus(DESCRIPTION_GLOBAL_ORDER)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(description, chunks[1]);

        let selected = self.task_form.selected_status();
        let pills: Vec<Span> = self
            .task_form
            .statuses
            .iter()
            .flat_map(|&s| {
                let label = format!(" {} ", s.as_str().to_uppercase());
                let style = if s == selected {
                    Style::default().bg(ACCENT).fg(Color::White)
                } else {
                    Style::default().fg(MUTED)
                };
                [Span::styled(label, style), Span::raw("  ")]
            })
            .collect();
        let status = Paragraph::new(Line::from(pills)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Status (←/→)")
                .border_style(focus(STATUS_GLOBAL_ORDER)),
        );
        f.render_widget(status, chunks[2]);

        let label = if is_edit { "Save Task" } else { "Create Task" };
        let submit_style = if self.task_form.can_submit() {
            Style::default().bg(ACCENT).fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIMMED)
        };
        let submit = Paragraph::new(Span::styled(format!(" {label} (Enter) "), submit_style))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(submit, chunks[3]);

        let cursor_field = match self.task_form.current_field {
            TITLE_GLOBAL_ORDER => Some((chunks[0], &self.task_form.title)),
            DESCRIPTION_GLOBAL_ORDER => Some((chunks[1], &self.task_form.description)),
            _ => None,
        };
        if let Some((chunk, field)) = cursor_field {
            f.set_cursor_position((chunk.x + field.cursor as u16 + 1, chunk.y + 1));
        }
    }

    /// Render the help screen with keyboard shortcuts.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(Span::styled("Task List:", bold)),
            Line::from("  ↑/↓, k/j     Select task"),
            Line::from("  Enter/e      Edit selected task"),
            Line::from("  a            Add new task"),
            Line::from("  c/Space      Toggle pending/completed"),
            Line::from("  d            Delete selected task"),
            Line::from("  /            Search titles (Enter keep, Esc clear)"),
            Line::from("  h/F1         Show this help"),
            Line::from("  q/Esc/Ctrl+C Quit"),
            Line::from(""),
            Line::from(Span::styled("Task Form:", bold)),
            Line::from("  Tab/↑/↓      Move between fields"),
            Line::from("  ←/→          Move cursor or change status"),
            Line::from("  Enter        Save (needs a title)"),
            Line::from("  Esc          Cancel and return"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press Esc to return"),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    /// Render the delete confirmation dialog.
    fn render_confirm(&mut self, f: &mut Frame, area: Rect) {
        let title = self
            .confirm_target
            .as_deref()
            .and_then(|id| self.store.get(id))
            .map(|t| t.title.clone())
            .unwrap_or_default();

        let block = Block::default()
            .title("Confirm Delete")
            .borders(Borders::ALL)
            .style(Style::default().bg(DARK_RED));

        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Delete this task?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(title),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else if self.search_active {
            format!("Search: {} (Esc to clear, Enter to keep)", self.search_text)
        } else {
            match self.state {
                AppState::TaskList if !self.search_text.is_empty() => format!(
                    "Tasks: {} (filtered by '{}') | Press 'h' for help",
                    self.visible.len(),
                    self.search_text
                ),
                AppState::TaskList => format!("Tasks: {} | Press 'h' for help", self.visible.len()),
                AppState::AddTask => "Add New Task".to_string(),
                AppState::EditTask => "Edit Task".to_string(),
                AppState::Help => "Help".to_string(),
                AppState::Confirm => "Confirm Delete".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(ACCENT).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Render the current screen plus the status bar.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        match self.state {
            AppState::TaskList => self.render_task_list(f, chunks[0]),
            AppState::AddTask => self.render_task_form(f, chunks[0], false),
            AppState::EditTask => self.render_task_form(f, chunks[0], true),
            AppState::Help => self.render_help(f, chunks[0]),
            AppState::Confirm => {
                self.render_task_list(f, chunks[0]);
                self.render_confirm(f, chunks[0]);
            }
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop: draw, then handle input until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
