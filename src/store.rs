//! In-memory task store owned by the list screen.
//!
//! The store keeps tasks in display-independent order (newest creations
//! first) and applies merges keyed by id. Operations return whether the
//! collection changed; tasks that an operation does not target keep their
//! position and value.

use mockable::Clock;

use crate::nav::TaskEvent;
use crate::seed::seed_tasks;
use crate::task::{now_millis, Task};

/// Ordered collection of tasks with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Build a store from `tasks`, keeping the first occurrence of any id.
    pub fn new(tasks: Vec<Task>) -> Self {
        let mut store = TaskStore {
            tasks: Vec::with_capacity(tasks.len()),
        };
        for task in tasks {
            if !store.contains(&task.id) {
                store.tasks.push(task);
            }
        }
        store
    }

    /// Store seeded with the sample tasks.
    pub fn seeded() -> Self {
        Self::new(seed_tasks())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Insert a new task at the front. An existing id wins and nothing changes.
    pub fn create(&mut self, task: Task) -> bool {
        if self.contains(&task.id) {
            tracing::trace!(id = %task.id, "create ignored, id already present");
            return false;
        }
        tracing::debug!(id = %task.id, "task created");
        self.tasks.insert(0, task);
        true
    }

    /// Replace the task with the same id. Unknown ids are ignored.
    pub fn update(&mut self, task: Task) -> bool {
        match self.position(&task.id) {
            Some(idx) => {
                tracing::debug!(id = %task.id, "task updated");
                self.tasks[idx] = task;
                true
            }
            None => {
                tracing::trace!(id = %task.id, "update ignored, unknown id");
                false
            }
        }
    }

    /// Remove the task with `id`, if any.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.tasks.remove(idx);
                tracing::debug!(id, "task deleted");
                true
            }
            None => {
                tracing::trace!(id, "delete ignored, unknown id");
                false
            }
        }
    }

    /// Flip pending/completed on `id` and stamp it with the current time.
    pub fn toggle_status(&mut self, id: &str, clock: &impl Clock) -> bool {
        let now = now_millis(clock);
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.toggle_status(now);
                tracing::debug!(id, status = %task.status, "task status toggled");
                true
            }
            None => {
                tracing::trace!(id, "toggle ignored, unknown id");
                false
            }
        }
    }

    /// Apply an event handed back by a form screen.
    pub fn apply(&mut self, event: TaskEvent) -> bool {
        match event {
            TaskEvent::Created(task) => self.create(task),
            TaskEvent::Updated(task) => self.update(task),
        }
    }
}
