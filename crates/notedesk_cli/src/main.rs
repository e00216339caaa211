//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notedesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notedesk_core::{AppStore, SqliteLocalStore};

fn main() {
    println!("notedesk_core ping={}", notedesk_core::ping());
    println!("notedesk_core version={}", notedesk_core::core_version());

    // Seed an in-memory store to exercise bootstrap end to end.
    match SqliteLocalStore::open_in_memory().map_err(|err| err.to_string()) {
        Ok(store) => match AppStore::open(store) {
            Ok(app) => println!("notedesk_core seeded_folders={}", app.folders().len()),
            Err(err) => eprintln!("notedesk_core store_open_failed error={err}"),
        },
        Err(err) => eprintln!("notedesk_core db_open_failed error={err}"),
    }
}
