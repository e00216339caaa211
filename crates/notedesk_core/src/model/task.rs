//! Kanban task model.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `column` is always one of the four fixed board stages.
//! - Merge updates never refresh `created_at`; tasks carry no update
//!   timestamp.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for tasks.
pub type TaskId = Uuid;

/// Fixed kanban board stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskColumn {
    #[default]
    Todo,
    Doing,
    Review,
    Done,
}

impl std::fmt::Display for TaskColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskColumn::Todo => write!(f, "todo"),
            TaskColumn::Doing => write!(f, "doing"),
            TaskColumn::Review => write!(f, "review"),
            TaskColumn::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Ok(TaskColumn::Todo),
            "doing" => Ok(TaskColumn::Doing),
            "review" => Ok(TaskColumn::Review),
            "done" => Ok(TaskColumn::Done),
            other => Err(format!("invalid task column: `{other}`")),
        }
    }
}

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            other => Err(format!("invalid task priority: `{other}`")),
        }
    }
}

/// Canonical task record as persisted under the `tasks` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub column: TaskColumn,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Optional due timestamp, Unix epoch milliseconds.
    pub due_date: Option<i64>,
    pub priority: TaskPriority,
    /// Soft references to tag names; not counted by the tag registry.
    pub tags: Vec<String>,
}

/// Request shape for task creation. `title` is required and must be
/// non-blank; everything else has a default.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub column: Option<TaskColumn>,
    pub due_date: Option<i64>,
    pub priority: Option<TaskPriority>,
    pub tags: Vec<String>,
}

/// Partial update for a task. `None` fields are left untouched; the nested
/// option on `due_date` distinguishes "clear the due date" from "keep it".
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub column: Option<TaskColumn>,
    pub due_date: Option<Option<i64>>,
    pub priority: Option<TaskPriority>,
    pub tags: Option<Vec<String>>,
}

impl Task {
    /// Creates a task from a draft with a generated stable ID.
    pub fn from_draft(draft: TaskDraft, created_at_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            column: draft.column.unwrap_or_default(),
            created_at: created_at_ms,
            due_date: draft.due_date,
            priority: draft.priority.unwrap_or_default(),
            tags: draft.tags,
        }
    }

    /// Merges a partial update into this task. `created_at` never changes.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(column) = patch.column {
            self.column = column;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskColumn, TaskDraft, TaskPatch, TaskPriority};
    use crate::model::task::Task;

    #[test]
    fn column_round_trips_through_display_and_parse() {
        for column in [
            TaskColumn::Todo,
            TaskColumn::Doing,
            TaskColumn::Review,
            TaskColumn::Done,
        ] {
            assert_eq!(column.to_string().parse::<TaskColumn>().unwrap(), column);
        }
        assert!("shipping".parse::<TaskColumn>().is_err());
    }

    #[test]
    fn draft_defaults_column_and_priority() {
        let task = Task::from_draft(
            TaskDraft {
                title: "write report".to_string(),
                ..TaskDraft::default()
            },
            1_000,
        );
        assert_eq!(task.column, TaskColumn::Todo);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn patch_can_clear_due_date_without_touching_created_at() {
        let mut task = Task::from_draft(
            TaskDraft {
                title: "t".to_string(),
                due_date: Some(5_000),
                ..TaskDraft::default()
            },
            1_000,
        );
        task.apply_patch(TaskPatch {
            due_date: Some(None),
            ..TaskPatch::default()
        });
        assert!(task.due_date.is_none());
        assert_eq!(task.created_at, 1_000);
    }
}
