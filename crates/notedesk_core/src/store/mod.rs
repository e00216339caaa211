//! Domain store: the in-memory collections and their write-through sync.
//!
//! # Responsibility
//! - Own the five collections (notes, folders, tags, tasks, settings).
//! - Persist each affected collection immediately after every mutation.
//! - Maintain derived folder/tag counts after note-collection mutations.
//!
//! # Invariants
//! - Construction seeds built-in folders and default settings when their
//!   keys are absent, and persists the seeds immediately.
//! - A key that is present but undecodable fails construction; user data is
//!   never silently discarded.
//! - Writes are per-key and non-transactional across keys; a crash between
//!   two related writes leaves derived counts stale until the next mutation
//!   recomputes them.

use crate::model::folder::{builtin_folders, Folder};
use crate::model::note::Note;
use crate::model::settings::{Settings, SettingsPatch};
use crate::model::tag::Tag;
use crate::model::task::Task;
use crate::repo::local_store::{LocalStore, StorageError, StoreKey};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

mod exchange;
mod folders;
mod notes;
mod tags;
mod tasks;

pub use exchange::{ExportScope, ImportSummary};
pub use notes::NoteFilter;

pub type StoreResult<T> = Result<T, StoreError>;

/// Domain store error.
///
/// Not-found on note/task update/delete is not an error; those operations
/// report it as `Ok(None)` / `Ok(false)`.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence-layer failure.
    Storage(StorageError),
    /// Rejected input (blank folder name, duplicate folder id, blank task
    /// title).
    Validation(String),
    /// Malformed import payload; no mutation was applied.
    Import(String),
    /// Export payload serialization failure.
    Export(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Validation(message) => write!(f, "validation failed: {message}"),
            Self::Import(message) => write!(f, "import rejected: {message}"),
            Self::Export(err) => write!(f, "export failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Export(err) => Some(err),
            Self::Validation(_) | Self::Import(_) => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// The application's domain store.
///
/// Holds all collections in memory and writes each one through to the
/// injected [`LocalStore`] after every mutation. Constructed once per
/// session and passed by reference to the presentation layer; mutations
/// return affected records and the caller re-renders — the store pushes no
/// updates itself.
#[derive(Debug)]
pub struct AppStore<S: LocalStore> {
    store: S,
    notes: Vec<Note>,
    folders: Vec<Folder>,
    tags: Vec<Tag>,
    tasks: Vec<Task>,
    settings: Settings,
}

impl<S: LocalStore> AppStore<S> {
    /// Loads all collections from `store`, seeding first-run defaults.
    ///
    /// # Contract
    /// - Absent `folders` installs the four built-ins and persists them.
    /// - Absent `settings` installs defaults and persists them.
    /// - Absent `notes`/`tasks`/`tags` start empty in memory; they are first
    ///   persisted on their first mutation.
    ///
    /// # Errors
    /// - `StoreError::Storage` when a key cannot be read, decoded, or a seed
    ///   cannot be written.
    pub fn open(mut store: S) -> StoreResult<Self> {
        let started_at = Instant::now();

        let notes: Vec<Note> = store.load(StoreKey::Notes)?.unwrap_or_default();
        let folders: Vec<Folder> = match store.load(StoreKey::Folders)? {
            Some(folders) => folders,
            None => {
                let seeds = builtin_folders();
                store.save(StoreKey::Folders, &seeds)?;
                seeds
            }
        };
        let tasks: Vec<Task> = store.load(StoreKey::Tasks)?.unwrap_or_default();
        let settings: Settings = match store.load(StoreKey::Settings)? {
            Some(settings) => settings,
            None => {
                let seeded = Settings::seeded();
                store.save(StoreKey::Settings, &seeded)?;
                seeded
            }
        };
        let tags: Vec<Tag> = store.load(StoreKey::Tags)?.unwrap_or_default();

        let mut app = Self {
            store,
            notes,
            folders,
            tags,
            tasks,
            settings,
        };
        // Derived counts may be stale after a crash between related writes;
        // recount in memory so accessors are truthful from the start.
        app.recount_folders();
        app.recount_tags();

        info!(
            "event=store_open module=store status=ok notes={} folders={} tasks={} tags={} duration_ms={}",
            app.notes.len(),
            app.folders.len(),
            app.tasks.len(),
            app.tags.len(),
            started_at.elapsed().as_millis()
        );
        Ok(app)
    }

    /// All notes, most-recent-first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// All folders in creation order (built-ins first).
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// The tag registry in its stable display order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// All tasks in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merges a partial settings update and persists the result.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> StoreResult<Settings> {
        self.settings.apply_patch(patch);
        self.persist_settings()?;
        info!("event=settings_update module=store status=ok");
        Ok(self.settings.clone())
    }

    pub(crate) fn persist_notes(&mut self) -> StoreResult<()> {
        self.store.save(StoreKey::Notes, &self.notes)?;
        Ok(())
    }

    pub(crate) fn persist_folders(&mut self) -> StoreResult<()> {
        self.store.save(StoreKey::Folders, &self.folders)?;
        Ok(())
    }

    pub(crate) fn persist_tags(&mut self) -> StoreResult<()> {
        self.store.save(StoreKey::Tags, &self.tags)?;
        Ok(())
    }

    pub(crate) fn persist_tasks(&mut self) -> StoreResult<()> {
        self.store.save(StoreKey::Tasks, &self.tasks)?;
        Ok(())
    }

    pub(crate) fn persist_settings(&mut self) -> StoreResult<()> {
        self.store.save(StoreKey::Settings, &self.settings)?;
        Ok(())
    }

    /// Runs the derived-count refresh that follows every note-collection
    /// mutation: recount folders and tags, persist both registries.
    pub(crate) fn refresh_derived_counts(&mut self) -> StoreResult<()> {
        self.refresh_folder_counts()?;
        self.refresh_tag_counts()?;
        Ok(())
    }
}
