//! Core domain logic for Notedesk, a local-first note/task manager.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod timer;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::folder::Folder;
pub use model::note::{Note, NoteDraft, NoteId, NotePatch};
pub use model::settings::{EditorSettings, PomodoroSettings, Settings, SettingsPatch, Theme};
pub use model::tag::Tag;
pub use model::task::{Task, TaskColumn, TaskDraft, TaskId, TaskPatch, TaskPriority};
pub use repo::local_store::{
    LocalStore, SqliteLocalStore, StorageError, StorageResult, StoreKey,
};
pub use store::{AppStore, ExportScope, ImportSummary, NoteFilter, StoreError, StoreResult};
pub use timer::{FocusTimer, TimerMode, TimerTransition};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
