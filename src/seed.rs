//! The compiled-in sample tasks the list screen starts with.

use crate::fields::TaskStatus;
use crate::task::Task;

const SEED: [(&str, &str, &str, TaskStatus, i64, i64); 6] = [
    (
        "task-001",
        "Review weekly goals",
        "Align on top priorities for the week.",
        TaskStatus::Pending,
        1_720_000_000_000,
        1_720_000_000_000,
    ),
    (
        "task-002",
        "Write project brief",
        "Outline scope, timeline, and risks.",
        TaskStatus::Completed,
        1_720_003_600_000,
        1_720_007_200_000,
    ),
    (
        "task-003",
        "Schedule stakeholder sync",
        "Confirm attendees and time options.",
        TaskStatus::Pending,
        1_720_010_800_000,
        1_720_010_800_000,
    ),
    (
        "task-004",
        "Organize research notes",
        "Tag findings for quick retrieval.",
        TaskStatus::Completed,
        1_720_014_400_000,
        1_720_018_000_000,
    ),
    (
        "task-005",
        "Prepare demo script",
        "Focus on the top three outcomes.",
        TaskStatus::Pending,
        1_720_021_600_000,
        1_720_021_600_000,
    ),
    (
        "task-006",
        "Send follow-up notes",
        "Recap decisions and next steps.",
        TaskStatus::Completed,
        1_720_025_200_000,
        1_720_028_800_000,
    ),
];

/// Fresh copies of the six sample tasks, in list order.
pub fn seed_tasks() -> Vec<Task> {
    SEED.iter()
        .map(|&(id, title, description, status, created_at, updated_at)| Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status,
            created_at,
            updated_at,
        })
        .collect()
}
