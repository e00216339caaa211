//! Kanban task operations.
//!
//! # Responsibility
//! - Task CRUD with write-through persistence and a by-column view.
//!
//! # Invariants
//! - Tasks carry no derived invariants beyond the column filter; task tags
//!   never feed the tag registry.
//! - Unknown ids on update/delete are silent no-ops; nothing is persisted.

use crate::model::now_ms;
use crate::model::task::{Task, TaskColumn, TaskDraft, TaskId, TaskPatch};
use crate::repo::local_store::LocalStore;
use crate::store::{AppStore, StoreError, StoreResult};
use log::info;

impl<S: LocalStore> AppStore<S> {
    /// Creates a task from a draft and appends it to the board.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the trimmed title is blank.
    pub fn create_task(&mut self, draft: TaskDraft) -> StoreResult<Task> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::Validation("task title cannot be empty".into()));
        }
        let task = Task::from_draft(draft, now_ms());
        self.tasks.push(task.clone());
        self.persist_tasks()?;
        info!(
            "event=task_create module=store status=ok id={} column={}",
            task.id, task.column
        );
        Ok(task)
    }

    /// Merges a partial update into the task with `id`. Column reassignment
    /// goes through here; no timestamp is refreshed.
    ///
    /// Returns `None` without persisting anything when the id is unknown.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> StoreResult<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.apply_patch(patch);
        let updated = task.clone();
        self.persist_tasks()?;
        info!(
            "event=task_update module=store status=ok id={id} column={}",
            updated.column
        );
        Ok(Some(updated))
    }

    /// Removes the task with `id`. Returns `false` when unknown.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            return Ok(false);
        };
        self.tasks.remove(position);
        self.persist_tasks()?;
        info!("event=task_delete module=store status=ok id={id}");
        Ok(true)
    }

    /// Looks up one task by id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks in the given column, in creation order.
    pub fn tasks_by_column(&self, column: TaskColumn) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.column == column)
            .collect()
    }
}
