//! JSON export and import of the persisted state.
//!
//! # Responsibility
//! - Produce the user-facing export payloads (full or notes-only).
//! - Apply import payloads with wholesale per-key replacement.
//!
//! # Invariants
//! - Import parses the full payload before touching any state; a malformed
//!   payload mutates nothing.
//! - Keys absent from an import are left untouched.
//! - A full export followed by an import of that payload reproduces an
//!   equivalent state field-for-field.

use crate::model::folder::Folder;
use crate::model::note::Note;
use crate::model::settings::Settings;
use crate::model::tag::Tag;
use crate::model::task::Task;
use crate::repo::local_store::LocalStore;
use crate::store::{AppStore, StoreError, StoreResult};
use chrono::{SecondsFormat, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Which collections an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// All five collections.
    Full,
    /// The note collection only.
    NotesOnly,
}

/// Which collections an import replaced, with record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub notes: Option<usize>,
    pub folders: Option<usize>,
    pub tasks: Option<usize>,
    pub settings: bool,
    pub tags: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FullExport<'a> {
    notes: &'a [Note],
    folders: &'a [Folder],
    tasks: &'a [Task],
    settings: &'a Settings,
    tags: &'a [Tag],
    export_date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotesExport<'a> {
    notes: &'a [Note],
    export_date: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportEnvelope {
    #[serde(default)]
    notes: Option<Vec<Note>>,
    #[serde(default)]
    folders: Option<Vec<Folder>>,
    #[serde(default)]
    tasks: Option<Vec<Task>>,
    #[serde(default)]
    settings: Option<Settings>,
    #[serde(default)]
    tags: Option<Vec<Tag>>,
}

fn export_date_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<S: LocalStore> AppStore<S> {
    /// Serializes the requested scope to a JSON payload with an
    /// ISO-8601 `exportDate`.
    pub fn export(&self, scope: ExportScope) -> StoreResult<String> {
        let payload = match scope {
            ExportScope::Full => serde_json::to_string_pretty(&FullExport {
                notes: &self.notes,
                folders: &self.folders,
                tasks: &self.tasks,
                settings: &self.settings,
                tags: &self.tags,
                export_date: export_date_now(),
            }),
            ExportScope::NotesOnly => serde_json::to_string_pretty(&NotesExport {
                notes: &self.notes,
                export_date: export_date_now(),
            }),
        }
        .map_err(StoreError::Export)?;

        info!(
            "event=export module=store status=ok scope={} bytes={}",
            match scope {
                ExportScope::Full => "full",
                ExportScope::NotesOnly => "notes",
            },
            payload.len()
        );
        Ok(payload)
    }

    /// Applies an import payload.
    ///
    /// Each present key wholesale-replaces the corresponding collection and
    /// is persisted; absent keys are untouched. When `notes` was present,
    /// folder and tag counts are refreshed afterwards.
    ///
    /// # Errors
    /// - `StoreError::Import` when the payload is not valid JSON or a key
    ///   has the wrong shape; no mutation is applied in that case.
    pub fn import(&mut self, json: &str) -> StoreResult<ImportSummary> {
        let envelope: ImportEnvelope = serde_json::from_str(json)
            .map_err(|err| StoreError::Import(err.to_string()))?;

        let mut summary = ImportSummary::default();

        if let Some(notes) = envelope.notes {
            summary.notes = Some(notes.len());
            self.notes = notes;
            self.persist_notes()?;
        }
        if let Some(folders) = envelope.folders {
            summary.folders = Some(folders.len());
            self.folders = folders;
            self.persist_folders()?;
        }
        if let Some(tasks) = envelope.tasks {
            summary.tasks = Some(tasks.len());
            self.tasks = tasks;
            self.persist_tasks()?;
        }
        if let Some(settings) = envelope.settings {
            summary.settings = true;
            self.settings = settings;
            self.persist_settings()?;
        }
        if let Some(tags) = envelope.tags {
            summary.tags = Some(tags.len());
            self.tags = tags;
            self.persist_tags()?;
        }

        if summary.notes.is_some() {
            self.refresh_derived_counts()?;
        }

        info!(
            "event=import module=store status=ok notes={:?} folders={:?} tasks={:?} settings={} tags={:?}",
            summary.notes, summary.folders, summary.tasks, summary.settings, summary.tags
        );
        Ok(summary)
    }
}
