//! Note operations and derived views.
//!
//! # Responsibility
//! - Note CRUD with write-through persistence and count refresh.
//! - Filtered views (all/starred/today/folder) and substring search.
//!
//! # Invariants
//! - The note collection is ordered most-recent-first; creation prepends,
//!   updates keep position.
//! - Every view preserves the relative order of the full collection.
//! - Unknown ids on update/delete are silent no-ops; nothing is persisted.

use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use crate::model::now_ms;
use crate::repo::local_store::LocalStore;
use crate::store::{AppStore, StoreResult};
use chrono::{Local, NaiveDate, TimeZone};
use log::info;

/// Selector for the folder-oriented note views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteFilter {
    /// Every note.
    All,
    /// Notes with `starred == true`.
    Starred,
    /// Notes whose `updated_at` falls on the current local calendar day.
    Today,
    /// Notes filed under the given folder id (exact match).
    Folder(String),
}

impl From<&str> for NoteFilter {
    fn from(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "starred" => Self::Starred,
            "today" => Self::Today,
            folder_id => Self::Folder(folder_id.to_string()),
        }
    }
}

impl std::str::FromStr for NoteFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl<S: LocalStore> AppStore<S> {
    /// Creates a note from a draft and prepends it to the collection.
    ///
    /// # Side effects
    /// - Persists `notes`, then refreshes and persists folder/tag counts.
    pub fn create_note(&mut self, draft: NoteDraft) -> StoreResult<Note> {
        let note = Note::from_draft(draft, now_ms());
        self.notes.insert(0, note.clone());
        self.persist_notes()?;
        self.refresh_derived_counts()?;
        info!(
            "event=note_create module=store status=ok id={} folder={} tags={}",
            note.id,
            note.folder,
            note.tags.len()
        );
        Ok(note)
    }

    /// Merges a partial update into the note with `id`.
    ///
    /// Returns `None` without persisting anything when the id is unknown.
    /// `updated_at` is always refreshed; `word_count` is recomputed only
    /// when the patch carries new content.
    pub fn update_note(&mut self, id: NoteId, patch: NotePatch) -> StoreResult<Option<Note>> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(None);
        };
        note.apply_patch(patch, now_ms());
        let updated = note.clone();
        self.persist_notes()?;
        self.refresh_derived_counts()?;
        info!("event=note_update module=store status=ok id={id}");
        Ok(Some(updated))
    }

    /// Removes the note with `id`. Returns `false` when unknown.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        let Some(position) = self.notes.iter().position(|note| note.id == id) else {
            return Ok(false);
        };
        self.notes.remove(position);
        self.persist_notes()?;
        self.refresh_derived_counts()?;
        info!("event=note_delete module=store status=ok id={id}");
        Ok(true)
    }

    /// Looks up one note by id.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Returns the notes selected by `filter`, in collection order.
    pub fn notes_by_filter(&self, filter: &NoteFilter) -> Vec<&Note> {
        let today = Local::now().date_naive();
        self.notes
            .iter()
            .filter(|note| match filter {
                NoteFilter::All => true,
                NoteFilter::Starred => note.starred,
                NoteFilter::Today => is_on_local_day(note.updated_at, today),
                NoteFilter::Folder(folder_id) => note.folder == *folder_id,
            })
            .collect()
    }

    /// Case-insensitive substring search over title, content and tags.
    ///
    /// A blank query returns the full collection unfiltered.
    pub fn search_notes(&self, query: &str) -> Vec<&Note> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.notes.iter().collect();
        }
        self.notes
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&needle)
                    || note.content.to_lowercase().contains(&needle)
                    || note
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

/// Whether the epoch-millisecond timestamp falls on the given local date.
fn is_on_local_day(timestamp_ms: i64, day: NaiveDate) -> bool {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|moment| moment.date_naive() == day)
        .unwrap_or(false)
}
