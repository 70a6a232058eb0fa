//! Create/edit form submission rules.
//!
//! Submitting is only possible with a non-blank title. Title and description
//! are trimmed on the way in; status is taken as selected.

use crate::error::FormError;
use crate::fields::TaskStatus;
use crate::task::Task;

/// Values the user entered in the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl FormValues {
    /// Form pre-filled from an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
        }
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    fn trimmed(&self) -> Result<(String, String), FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        Ok((title.to_string(), self.description.trim().to_string()))
    }
}

/// Build a new task created at `now`. The id is the creation timestamp.
pub fn build_new_task(values: &FormValues, now: i64) -> Result<Task, FormError> {
    let (title, description) = values.trimmed()?;
    Ok(Task {
        id: now.to_string(),
        title,
        description,
        status: values.status,
        created_at: now,
        updated_at: now,
    })
}

/// Apply form values to `original`. `id` and `created_at` carry over unchanged.
pub fn apply_edit(original: &Task, values: &FormValues, now: i64) -> Result<Task, FormError> {
    let (title, description) = values.trimmed()?;
    Ok(Task {
        title,
        description,
        status: values.status,
        updated_at: now.max(original.created_at),
        ..original.clone()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::task::test_support::task;

    fn values(title: &str, description: &str, status: TaskStatus) -> FormValues {
        FormValues {
            title: title.into(),
            description: description.into(),
            status,
        }
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("\t", false)]
    #[case("x", true)]
    #[case("  Buy milk ", true)]
    fn submit_requires_a_title(#[case] title: &str, #[case] enabled: bool) {
        assert_eq!(values(title, "", TaskStatus::Pending).can_submit(), enabled);
    }

    #[test]
    fn new_task_is_trimmed_and_pending_by_default() {
        let form = FormValues {
            title: " Buy milk ".into(),
            ..FormValues::default()
        };
        let task = build_new_task(&form, 1_720_100_000_000).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.id, "1720100000000");
    }

    #[test]
    fn new_task_keeps_selected_status() {
        let form = values("Done already", "  notes  ", TaskStatus::Completed);
        let task = build_new_task(&form, 5).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.description, "notes");
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(
            build_new_task(&values("  ", "desc", TaskStatus::Pending), 5),
            Err(FormError::EmptyTitle)
        );
        let original = task("a", "A", TaskStatus::Pending);
        assert_eq!(
            apply_edit(&original, &values("", "", TaskStatus::Pending), 5),
            Err(FormError::EmptyTitle)
        );
    }

    #[test]
    fn edit_carries_over_identity_and_creation_time() {
        let original = task("task-001", "Review weekly goals", TaskStatus::Pending);
        let form = values(" Review monthly goals ", " quarterly too ", TaskStatus::Pending);
        let edited = apply_edit(&original, &form, 9_000).unwrap();

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.created_at, original.created_at);
        assert_eq!(edited.title, "Review monthly goals");
        assert_eq!(edited.description, "quarterly too");
        assert_eq!(edited.updated_at, 9_000);
        // editing never completes a task on its own
        assert_eq!(edited.status, TaskStatus::Pending);
    }

    #[test]
    fn edit_never_stamps_before_creation() {
        let original = task("a", "A", TaskStatus::Pending);
        let edited = apply_edit(&original, &FormValues::from_task(&original), 10).unwrap();
        assert_eq!(edited.updated_at, original.created_at);
    }

    #[test]
    fn from_task_prefills_every_field() {
        let mut t = task("a", "Title", TaskStatus::Completed);
        t.description = "Body".into();
        assert_eq!(FormValues::from_task(&t), values("Title", "Body", TaskStatus::Completed));
    }
}
