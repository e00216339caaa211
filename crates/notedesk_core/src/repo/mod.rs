//! Persistence layer abstractions and the SQLite-backed local store.
//!
//! # Responsibility
//! - Define the key-value persistence contract used by the domain store.
//! - Isolate SQLite query details from domain orchestration.
//!
//! # Invariants
//! - Each collection key is read and written independently; a failure on
//!   one key never touches another key's stored value.

pub mod local_store;
