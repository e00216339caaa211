//! Tag registry maintenance and popularity ranking.
//!
//! # Responsibility
//! - Recompute tag counts from the note collection after every note
//!   mutation.
//! - Rank tags by popularity with a stable order.
//!
//! # Invariants
//! - Counts are always a full recompute, never incremental accumulation, so
//!   repeated edits cannot inflate them.
//! - Previously known tag names keep their relative order across recomputes;
//!   newly seen names append in note order.
//! - Tags carried by zero notes drop out of the registry.

use crate::model::tag::Tag;
use crate::repo::local_store::LocalStore;
use crate::store::{AppStore, StoreResult};
use std::collections::HashMap;

impl<S: LocalStore> AppStore<S> {
    /// The `limit` most popular tags, descending by count. Ties keep the
    /// registry's stable order.
    pub fn popular_tags(&self, limit: usize) -> Vec<Tag> {
        let mut ranked: Vec<Tag> = self.tags.to_vec();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }

    /// Rebuilds the tag registry from the note collection.
    pub(crate) fn recount_tags(&mut self) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for note in &self.notes {
            for tag in &note.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        let mut rebuilt: Vec<Tag> = Vec::with_capacity(counts.len());
        for tag in &self.tags {
            if let Some(count) = counts.remove(tag.name.as_str()) {
                rebuilt.push(Tag::new(tag.name.clone(), count));
            }
        }
        for note in &self.notes {
            for tag in &note.tags {
                if let Some(count) = counts.remove(tag.as_str()) {
                    rebuilt.push(Tag::new(tag.clone(), count));
                }
            }
        }
        self.tags = rebuilt;
    }

    /// Recounts and persists the tag registry. Runs after every
    /// note-collection mutation.
    pub(crate) fn refresh_tag_counts(&mut self) -> StoreResult<()> {
        self.recount_tags();
        self.persist_tags()
    }
}
