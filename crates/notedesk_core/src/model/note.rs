//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its create/update request shapes.
//! - Keep `word_count` derivation in one place.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `word_count` always equals the character count of `content`.
//! - `updated_at >= created_at`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for notes.
pub type NoteId = Uuid;

/// Title assigned when a note is created without one.
pub const UNTITLED: &str = "Untitled";

/// Canonical note record as persisted under the `notes` key.
///
/// `folder` is a soft reference to `Folder::id`; an empty string means
/// unfiled, and a dangling id is tolerated (the note renders as unfiled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable global ID used for lookups and view selection.
    pub id: NoteId,
    pub title: String,
    /// Markdown source.
    pub content: String,
    /// Insertion order preserved for display; order is not part of identity.
    pub tags: Vec<String>,
    /// Folder id, empty when unfiled. Soft reference.
    pub folder: String,
    pub starred: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Refreshed on every update.
    pub updated_at: i64,
    /// Derived from `content` length; the historical field name is kept.
    pub word_count: usize,
}

/// Request shape for note creation. All fields optional.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub folder: Option<String>,
}

/// Partial update for a note. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub folder: Option<String>,
    pub starred: Option<bool>,
}

/// Derives the stored `word_count` value from note content.
///
/// The source system defined "word count" as content length; the name is
/// kept and the derivation is the Unicode scalar count.
pub fn word_count(content: &str) -> usize {
    content.chars().count()
}

impl Note {
    /// Creates a note from a draft with a generated stable ID.
    ///
    /// # Invariants
    /// - An absent or blank title defaults to [`UNTITLED`].
    /// - `created_at == updated_at == created_at_ms`.
    pub fn from_draft(draft: NoteDraft, created_at_ms: i64) -> Self {
        let title = match draft.title {
            Some(value) if !value.trim().is_empty() => value,
            _ => UNTITLED.to_string(),
        };
        let content = draft.content.unwrap_or_default();
        let count = word_count(&content);
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            tags: draft.tags,
            folder: draft.folder.unwrap_or_default(),
            starred: false,
            created_at: created_at_ms,
            updated_at: created_at_ms,
            word_count: count,
        }
    }

    /// Merges a partial update into this note.
    ///
    /// # Contract
    /// - `updated_at` is always refreshed to `updated_at_ms`.
    /// - `word_count` is recomputed only when `content` is part of the patch.
    pub fn apply_patch(&mut self, patch: NotePatch, updated_at_ms: i64) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.word_count = word_count(&content);
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(folder) = patch.folder {
            self.folder = folder;
        }
        if let Some(starred) = patch.starred {
            self.starred = starred;
        }
        self.updated_at = updated_at_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::{word_count, Note, NoteDraft, NotePatch, UNTITLED};

    #[test]
    fn word_count_counts_unicode_scalars() {
        assert_eq!(word_count("hello world"), 11);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("héllo"), 5);
    }

    #[test]
    fn draft_defaults_blank_title_to_untitled() {
        let note = Note::from_draft(
            NoteDraft {
                title: Some("   ".to_string()),
                ..NoteDraft::default()
            },
            1_000,
        );
        assert_eq!(note.title, UNTITLED);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn patch_without_content_keeps_word_count() {
        let mut note = Note::from_draft(
            NoteDraft {
                content: Some("abc".to_string()),
                ..NoteDraft::default()
            },
            1_000,
        );
        note.apply_patch(
            NotePatch {
                title: Some("renamed".to_string()),
                ..NotePatch::default()
            },
            2_000,
        );
        assert_eq!(note.word_count, 3);
        assert_eq!(note.updated_at, 2_000);
    }
}
