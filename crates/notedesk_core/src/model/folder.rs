//! Folder domain model.
//!
//! # Invariants
//! - `id` is the slug of the folder name at creation time and never changes.
//! - `count` is derived; it equals the number of notes filed under `id`
//!   after every note-collection mutation.

use serde::{Deserialize, Serialize};

/// A named grouping bucket for notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Slugified name; unique across the folder collection.
    pub id: String,
    pub name: String,
    /// Opaque presentation value (e.g. a hex color).
    pub color: String,
    /// Derived note count; recomputed after note mutations.
    pub count: usize,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            count: 0,
        }
    }
}

/// Built-in folders seeded when the `folders` key is absent on first load.
pub fn builtin_folders() -> Vec<Folder> {
    vec![
        Folder::new("personal", "Personal", "#6366f1"),
        Folder::new("work", "Work", "#f59e0b"),
        Folder::new("ideas", "Ideas", "#10b981"),
        Folder::new("archive", "Archive", "#64748b"),
    ]
}
