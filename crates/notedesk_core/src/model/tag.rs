//! Tag registry model.
//!
//! # Invariants
//! - `name` is the unique key within the registry.
//! - `count` equals the number of notes currently carrying the tag; it is
//!   recomputed from the note collection, never incrementally accumulated.

use serde::{Deserialize, Serialize};

/// A free-text label with a global popularity count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub count: usize,
}

impl Tag {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}
