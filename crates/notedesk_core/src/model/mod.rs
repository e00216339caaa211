//! Domain model for notes, folders, tags, tasks and settings.
//!
//! # Responsibility
//! - Define the canonical data structures owned by the domain store.
//! - Keep persisted/exported JSON field names stable (camelCase schema).
//!
//! # Invariants
//! - Every note/task is identified by a stable `Uuid`.
//! - Timestamps are Unix epoch milliseconds.

use chrono::Utc;

pub mod folder;
pub mod note;
pub mod settings;
pub mod tag;
pub mod task;

/// Returns the current wall-clock time as Unix epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::now_ms;

    #[test]
    fn now_ms_is_monotonic_enough_for_ordering() {
        let first = now_ms();
        let second = now_ms();
        assert!(second >= first);
    }
}
