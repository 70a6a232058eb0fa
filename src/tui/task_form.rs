//! Task form state for the new-task and edit screens.

use crate::{
    fields::TaskStatus,
    form::FormValues,
    tui::input::InputField,
};

/// Focus order of the form fields.
pub const TITLE_GLOBAL_ORDER: usize = 0;
pub const DESCRIPTION_GLOBAL_ORDER: usize = 1;
pub const STATUS_GLOBAL_ORDER: usize = 2;

const FIELD_COUNT: usize = 3;

/// Editable form backing both task screens.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub status: usize,
    pub statuses: Vec<TaskStatus>,
    pub current_field: usize,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskForm {
    /// Empty form. Status defaults to pending.
    pub fn new() -> Self {
        Self::from_values(&FormValues::default())
    }

    /// Form pre-filled with `values`.
    pub fn from_values(values: &FormValues) -> Self {
        let statuses = TaskStatus::ALL.to_vec();
        let status = statuses.iter().position(|&s| s == values.status).unwrap_or(0);
        let mut form = Self {
            title: InputField::with_value(&values.title),
            description: InputField::with_value(&values.description),
            status,
            statuses,
            current_field: TITLE_GLOBAL_ORDER,
        };
        form.update_active_field();
        form
    }

    /// Current contents as submit-ready values.
    pub fn values(&self) -> FormValues {
        FormValues {
            title: self.title.value.clone(),
            description: self.description.value.clone(),
            status: self.selected_status(),
        }
    }

    pub fn selected_status(&self) -> TaskStatus {
        self.statuses.get(self.status).copied().unwrap_or_default()
    }

    pub fn can_submit(&self) -> bool {
        self.values().can_submit()
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        self.current_field = (self.current_field + FIELD_COUNT - 1) % FIELD_COUNT;
        self.update_active_field();
    }

    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_GLOBAL_ORDER;
        self.description.active = self.current_field == DESCRIPTION_GLOBAL_ORDER;
    }

    /// The text field with focus, if focus is not on the status selector.
    pub fn active_input(&mut self) -> Option<&mut InputField> {
        match self.current_field {
            TITLE_GLOBAL_ORDER => Some(&mut self.title),
            DESCRIPTION_GLOBAL_ORDER => Some(&mut self.description),
            _ => None,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            field.handle_char(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_backspace();
        }
    }

    pub fn handle_delete(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_delete();
        }
    }

    /// Move the cursor, or cycle the status selector when it has focus.
    pub fn handle_left_right(&mut self, right: bool) {
        if self.current_field == STATUS_GLOBAL_ORDER {
            let len = self.statuses.len();
            self.status = if right {
                (self.status + 1) % len
            } else {
                (self.status + len - 1) % len
            };
            return;
        }
        if let Some(field) = self.active_input() {
            if right {
                field.move_cursor_right();
            } else {
                field.move_cursor_left();
            }
        }
    }
}
