//! Task data structure.
//!
//! A `Task` is the unit passed between screens and held by the store.
//! Timestamps are milliseconds since the Unix epoch.

use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::fields::TaskStatus;

/// A single user task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Task {
    /// Bump `updated_at` to `now`, keeping it strictly ahead of the previous value.
    pub fn touch(&mut self, now: i64) {
        self.updated_at = now.max(self.updated_at.saturating_add(1));
    }

    /// Flip the status and record the mutation time.
    pub fn toggle_status(&mut self, now: i64) {
        self.status = self.status.toggled();
        self.touch(now);
    }
}

/// Current time from `clock` in epoch milliseconds.
pub fn now_millis(clock: &impl Clock) -> i64 {
    clock.utc().timestamp_millis()
}


#[cfg(test)]
mod tests {
    use super::test_support::{task, FixedClock};
    use super::*;

    #[test]
    fn toggle_moves_updated_at_forward() {
        let mut t = task("a", "A", TaskStatus::Pending);
        t.toggle_status(5_000);
        assert_eq!(t.status, TaskStatus::Completed);
        assert_eq!(t.updated_at, 5_000);
        assert_eq!(t.created_at, 1_000);
    }

    #[test]
    fn touch_is_strictly_increasing_when_clock_stalls() {
        let mut t = task("a", "A", TaskStatus::Pending);
        t.touch(1_000);
        assert_eq!(t.updated_at, 1_001);
        t.touch(500);
        assert_eq!(t.updated_at, 1_002);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(task("a", "A", TaskStatus::Completed)).unwrap();
        assert_eq!(json["createdAt"], 1_000);
        assert_eq!(json["updatedAt"], 1_000);
        assert_eq!(json["status"], "completed");
    }

    #[test]
    fn now_millis_reads_the_clock() {
        let clock = FixedClock::at_millis(1_720_000_000_123);
        assert_eq!(now_millis(&clock), 1_720_000_000_123);
    }
}
