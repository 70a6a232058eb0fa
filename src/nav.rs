//! Screen-to-screen task hand-off.
//!
//! Form screens produce a typed [`TaskEvent`]. Crossing a screen transition,
//! the event travels as a named string parameter; the list screen takes the
//! parameters back out, decodes them through the codec and applies the
//! events to its store. Taking a parameter removes it, so a second render
//! never applies the same event twice.

use std::collections::BTreeMap;

use crate::error::{EditError, ParamError};
use crate::params::{decode, encode, ParamValue};
use crate::task::Task;

/// Parameter carrying a freshly created task back to the list.
pub const NEW_TASK: &str = "newTask";
/// Parameter carrying an edited task back to the list.
pub const UPDATED_TASK: &str = "updatedTask";
/// Id of the task the edit screen was opened for.
pub const TASK_ID: &str = "taskId";
/// Current value of the task the edit screen was opened for.
pub const TASK: &str = "task";

/// Named parameters attached to a navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Remove and return a parameter.
    pub fn take(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A change produced by the new-task or edit screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    Created(Task),
    Updated(Task),
}

impl TaskEvent {
    pub fn task(&self) -> &Task {
        match self {
            TaskEvent::Created(task) | TaskEvent::Updated(task) => task,
        }
    }

    /// Name of the parameter this event travels under.
    pub fn param_name(&self) -> &'static str {
        match self {
            TaskEvent::Created(_) => NEW_TASK,
            TaskEvent::Updated(_) => UPDATED_TASK,
        }
    }

    /// Encode the event as the parameters for navigating back to the list.
    pub fn into_params(self) -> Result<Params, ParamError> {
        let encoded = encode(self.task())?;
        Ok(Params::new().with(self.param_name(), encoded))
    }
}

/// Consume `newTask` and `updatedTask`, returning the events that decoded.
///
/// Both parameters are cleared whether or not they were valid.
pub fn take_list_events(params: &mut Params) -> Vec<TaskEvent> {
    let mut events = Vec::new();
    if let Some(raw) = params.take(NEW_TASK) {
        match decode(Some(&raw)) {
            Some(task) => events.push(TaskEvent::Created(task)),
            None => tracing::debug!(param = NEW_TASK, "ignoring invalid task parameter"),
        }
    }
    if let Some(raw) = params.take(UPDATED_TASK) {
        match decode(Some(&raw)) {
            Some(task) => events.push(TaskEvent::Updated(task)),
            None => tracing::debug!(param = UPDATED_TASK, "ignoring invalid task parameter"),
        }
    }
    events
}

/// Parameters for opening the edit screen on `task`.
pub fn edit_params(task: &Task) -> Result<Params, ParamError> {
    Ok(Params::new()
        .with(TASK_ID, task.id.as_str())
        .with(TASK, encode(task)?))
}

/// Resolve the task the edit screen should show.
///
/// The decoded task must carry the requested id; otherwise the screen shows
/// its not-found state instead of editing some other task.
pub fn resolve_edit_target(params: &Params) -> Result<Task, EditError> {
    let task_id = params
        .get(TASK_ID)
        .and_then(ParamValue::first)
        .filter(|id| !id.is_empty())
        .ok_or(EditError::NotFound)?;
    let task = decode(params.get(TASK)).ok_or(EditError::NotFound)?;
    if task.id != task_id {
        tracing::debug!(requested = task_id, received = %task.id, "edit target id mismatch");
        return Err(EditError::NotFound);
    }
    Ok(task)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fields::TaskStatus;
    use crate::task::test_support::task;

    #[test]
    fn created_event_round_trips_through_params() {
        let t = task("1720000000000", "Buy milk", TaskStatus::Pending);
        let mut params = TaskEvent::Created(t.clone()).into_params().unwrap();
        assert!(params.get(NEW_TASK).is_some());
        assert!(params.get(UPDATED_TASK).is_none());

        let events = take_list_events(&mut params);
        assert_eq!(events, vec![TaskEvent::Created(t)]);
        assert!(params.is_empty());
    }

    #[test]
    fn updated_event_uses_its_own_parameter() {
        let t = task("task-003", "Edited", TaskStatus::Completed);
        let mut params = TaskEvent::Updated(t.clone()).into_params().unwrap();
        assert!(params.get(UPDATED_TASK).is_some());
        assert_eq!(take_list_events(&mut params), vec![TaskEvent::Updated(t)]);
    }

    #[test]
    fn taking_events_twice_applies_nothing_the_second_time() {
        let t = task("a", "A", TaskStatus::Pending);
        let mut params = TaskEvent::Created(t).into_params().unwrap();
        assert_eq!(take_list_events(&mut params).len(), 1);
        assert!(take_list_events(&mut params).is_empty());
    }

    #[test]
    fn malformed_parameters_are_cleared_and_dropped() {
        let mut params = Params::new()
            .with(NEW_TASK, "{broken")
            .with(UPDATED_TASK, r#"{"id":"a"}"#);
        assert!(take_list_events(&mut params).is_empty());
        assert!(params.get(NEW_TASK).is_none());
        assert!(params.get(UPDATED_TASK).is_none());
    }

    #[test]
    fn edit_target_resolves_when_ids_match() {
        let t = task("task-001", "Review weekly goals", TaskStatus::Pending);
        let params = edit_params(&t).unwrap();
        assert_eq!(resolve_edit_target(&params), Ok(t));
    }

    #[test]
    fn edit_target_with_mismatched_id_is_not_found() {
        let other = task("task-002", "Write project brief", TaskStatus::Completed);
        let params = Params::new()
            .with(TASK_ID, "task-001")
            .with(TASK, encode(&other).unwrap());
        assert_eq!(resolve_edit_target(&params), Err(EditError::NotFound));
    }

    #[test]
    fn edit_target_uses_first_id_when_repeated() {
        let t = task("task-001", "Review", TaskStatus::Pending);
        let params = Params::new()
            .with(TASK_ID, vec!["task-001".to_string(), "task-002".to_string()])
            .with(TASK, encode(&t).unwrap());
        assert_eq!(resolve_edit_target(&params), Ok(t));
    }

    #[test]
    fn edit_target_missing_pieces_are_not_found() {
        let t = task("task-001", "Review", TaskStatus::Pending);
        let no_id = Params::new().with(TASK, encode(&t).unwrap());
        assert_eq!(resolve_edit_target(&no_id), Err(EditError::NotFound));

        let no_task = Params::new().with(TASK_ID, "task-001");
        assert_eq!(resolve_edit_target(&no_task), Err(EditError::NotFound));

        let bad_task = Params::new().with(TASK_ID, "task-001").with(TASK, "nope");
        assert_eq!(resolve_edit_target(&bad_task), Err(EditError::NotFound));
    }
}
