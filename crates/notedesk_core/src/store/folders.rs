//! Folder operations and derived note counts.
//!
//! # Responsibility
//! - Folder create/delete with slug-id validation.
//! - Recompute every folder's note count after note-collection mutations.
//!
//! # Invariants
//! - Folder ids are slugs; creation rejects a slug already in use.
//! - Notes referencing a deleted folder keep the dangling id (unfiled in
//!   effect); folders are never auto-deleted when emptied.

use crate::model::folder::Folder;
use crate::repo::local_store::LocalStore;
use crate::store::{AppStore, StoreError, StoreResult};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derives a folder id from its display name: trimmed, lower-cased,
/// internal whitespace runs collapsed to a single hyphen.
pub fn slugify_folder_name(name: &str) -> String {
    WHITESPACE_RE
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

impl<S: LocalStore> AppStore<S> {
    /// Creates a folder with a slugified id.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the trimmed name is empty or the slug
    ///   collides with an existing folder id.
    pub fn create_folder(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> StoreResult<Folder> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(StoreError::Validation("folder name cannot be empty".into()));
        }
        let id = slugify_folder_name(trimmed);
        if self.folders.iter().any(|folder| folder.id == id) {
            return Err(StoreError::Validation(format!(
                "folder id `{id}` already exists"
            )));
        }

        let folder = Folder::new(id, trimmed, color.into());
        self.folders.push(folder.clone());
        self.persist_folders()?;
        info!(
            "event=folder_create module=store status=ok id={}",
            folder.id
        );
        Ok(folder)
    }

    /// Removes the folder with `id`. Returns `false` when unknown.
    ///
    /// Notes filed under the folder are left untouched; their dangling
    /// folder reference is tolerated.
    pub fn delete_folder(&mut self, id: &str) -> StoreResult<bool> {
        let Some(position) = self.folders.iter().position(|folder| folder.id == id) else {
            return Ok(false);
        };
        self.folders.remove(position);
        self.persist_folders()?;
        info!("event=folder_delete module=store status=ok id={id}");
        Ok(true)
    }

    /// Recomputes every folder's count from the note collection.
    pub(crate) fn recount_folders(&mut self) {
        for folder in &mut self.folders {
            folder.count = self
                .notes
                .iter()
                .filter(|note| note.folder == folder.id)
                .count();
        }
    }

    /// Recounts and persists the folder collection. Runs after every
    /// note-collection mutation.
    pub(crate) fn refresh_folder_counts(&mut self) -> StoreResult<()> {
        self.recount_folders();
        self.persist_folders()
    }
}
